// Copyright 2026 Syncmark Contributors
// SPDX-License-Identifier: Apache-2.0

//! The benchmark-history revision map.
//!
//! [`BenchmarkHistory`] is the feed document as fetched: revision id to
//! [`TimingRecord`], in the document's own key order. It is constructed once
//! per session and treated as read-only afterwards; the projector only ever
//! takes it by shared reference.

use crate::error::{Error, Result};
use crate::types::{RevisionId, TimingRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The full revision-to-timings mapping retrieved from the feed.
///
/// Deserializes directly from the feed's top-level shape
/// `{ [revisionId]: TimingRecord }`. Key order is preserved, which the
/// reverse-insertion ordering policy depends on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkHistory {
    records: IndexMap<RevisionId, TimingRecord>,
}

impl BenchmarkHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a history from a feed JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert one revision's record. Construction-time only; a revision id
    /// occurs at most once, later inserts replace earlier ones.
    pub fn insert(&mut self, revision: impl Into<RevisionId>, record: TimingRecord) {
        self.records.insert(revision.into(), record);
    }

    /// Look up a revision's record.
    pub fn get(&self, revision: &str) -> Option<&TimingRecord> {
        self.records.get(revision)
    }

    /// Resolve a revision's record, failing loudly on an unknown id.
    ///
    /// Every id handed to the projector originates from this history's own
    /// keys, so a miss is a caller bug (e.g. a stale id after the history
    /// changed) and must not be silently skipped.
    pub fn record(&self, revision: &str) -> Result<&TimingRecord> {
        self.records
            .get(revision)
            .ok_or_else(|| Error::revision_not_found(revision))
    }

    /// Revision ids in feed-document order.
    pub fn revisions(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Number of revisions in the history.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history holds no revisions.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
