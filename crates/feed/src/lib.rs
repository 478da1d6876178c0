// Copyright 2026 Syncmark Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks feed access for Syncmark.
//!
//! The feed is a single JSON document fetched via HTTP GET from a fixed URL,
//! shaped `{ [revisionId]: TimingRecord }`. This crate owns the one
//! asynchronous boundary of the system: the one-time fetch of that document.
//! The projector never participates in it; it receives the already-resolved
//! history.
//!
//! # Modules
//!
//! - [`settings`] - Environment-driven deployment settings
//! - [`client`] - The [`FeedClient`] HTTP fetcher

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod client;
pub mod settings;

pub use client::{FeedClient, FeedError};
pub use settings::FeedSettings;
