// Copyright 2026 Syncmark Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core data model for Syncmark.
//!
//! This crate defines the benchmark-history feed shapes (revisions, timing
//! records, operation timings) and the error taxonomy shared by the
//! projector, feed, and CLI crates. It performs no I/O.
//!
//! # Modules
//!
//! - [`types`] - Feed data model: operation mixes, timing fields, timing records
//! - [`history`] - The [`BenchmarkHistory`] revision map
//! - [`error`] - The [`Error`] taxonomy and [`Result`] alias

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod history;
pub mod types;

pub use error::{Error, Result};
pub use history::BenchmarkHistory;
pub use types::{
    MixTimings, OperationMix, OperationTiming, RevisionId, TimingField, TimingRecord,
};
