// Copyright 2026 Syncmark Contributors
// SPDX-License-Identifier: Apache-2.0

//! Feed data model types.
//!
//! The benchmarks feed is a nested JSON document: revision id to timing
//! record, timing record to per-sync-type operation mixes, each mix to a
//! numeric timing in milliseconds. Older feed generations name the timing
//! field `executionTime`, newer ones `average`; [`TimingField`] selects
//! between them once per deployment rather than branching per key.

use crate::error::Error;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque revision label: a semantic version tag or a commit hash.
///
/// Equality is exact string match; each revision occurs at most once as a
/// history key.
pub type RevisionId = String;

/// The three fixed operation-mix keys of every benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationMix {
    /// A batch consisting only of resource creations.
    CreatesOnly,
    /// A batch consisting only of resource updates.
    UpdatesOnly,
    /// A batch mixing creations and updates.
    Mix,
}

impl OperationMix {
    /// All mixes, in the feed's canonical order.
    pub const ALL: [OperationMix; 3] = [
        OperationMix::CreatesOnly,
        OperationMix::UpdatesOnly,
        OperationMix::Mix,
    ];

    /// The feed key for this mix.
    pub fn key(&self) -> &'static str {
        match self {
            OperationMix::CreatesOnly => "createsOnly",
            OperationMix::UpdatesOnly => "updatesOnly",
            OperationMix::Mix => "mix",
        }
    }

    /// Human-readable fragment used in chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            OperationMix::CreatesOnly => "creates only",
            OperationMix::UpdatesOnly => "updates only",
            OperationMix::Mix => "creates and updates",
        }
    }
}

impl fmt::Display for OperationMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which numeric field of an [`OperationTiming`] carries the elapsed time.
///
/// Resolved once from configuration; the projector never mixes fields within
/// a projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimingField {
    /// The `executionTime` field (older feed generations).
    #[default]
    ExecutionTime,
    /// The `average` field (newer feed generations).
    Average,
}

impl TimingField {
    /// The feed key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            TimingField::ExecutionTime => "executionTime",
            TimingField::Average => "average",
        }
    }
}

impl fmt::Display for TimingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TimingField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "executionTime" | "execution-time" | "execution_time" => {
                Ok(TimingField::ExecutionTime)
            }
            "average" => Ok(TimingField::Average),
            _ => Err(Error::invalid_input(format!("unknown timing field: {s}"))),
        }
    }
}

/// Elapsed-time record for one (sync-type, operation-mix) run, in
/// milliseconds.
///
/// Both field generations are modeled; absent fields deserialize to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationTiming {
    /// Elapsed milliseconds under the `executionTime` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    /// Elapsed milliseconds under the `average` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

impl OperationTiming {
    /// The elapsed milliseconds carried by the selected field, if present.
    pub fn millis(&self, field: TimingField) -> Option<f64> {
        match field {
            TimingField::ExecutionTime => self.execution_time,
            TimingField::Average => self.average,
        }
    }
}

/// One sync-type's timings across the three operation mixes.
///
/// The feed may omit any mix for any sync-type (older revisions were not
/// benchmarked under every mix); absent mixes deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MixTimings {
    /// Timing for the all-creates batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creates_only: Option<OperationTiming>,
    /// Timing for the all-updates batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updates_only: Option<OperationTiming>,
    /// Timing for the mixed batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix: Option<OperationTiming>,
}

impl MixTimings {
    /// The timing sub-record for the given mix, if the feed carried it.
    pub fn for_mix(&self, mix: OperationMix) -> Option<&OperationTiming> {
        match mix {
            OperationMix::CreatesOnly => self.creates_only.as_ref(),
            OperationMix::UpdatesOnly => self.updates_only.as_ref(),
            OperationMix::Mix => self.mix.as_ref(),
        }
    }
}

/// One revision's timings, keyed by sync-type (`"productSync"`, ...).
///
/// The sync-type set varies by feed generation; insertion order is the feed
/// document's key order.
pub type TimingRecord = IndexMap<String, MixTimings>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_mix_keys() {
        assert_eq!(OperationMix::CreatesOnly.key(), "createsOnly");
        assert_eq!(OperationMix::UpdatesOnly.key(), "updatesOnly");
        assert_eq!(OperationMix::Mix.key(), "mix");
    }

    #[test]
    fn test_operation_mix_serde_names() {
        let json = serde_json::to_string(&OperationMix::CreatesOnly).unwrap();
        assert_eq!(json, "\"createsOnly\"");
        let mix: OperationMix = serde_json::from_str("\"mix\"").unwrap();
        assert_eq!(mix, OperationMix::Mix);
    }

    #[test]
    fn test_timing_field_from_str() {
        assert_eq!(
            "executionTime".parse::<TimingField>().unwrap(),
            TimingField::ExecutionTime
        );
        assert_eq!(
            "execution-time".parse::<TimingField>().unwrap(),
            TimingField::ExecutionTime
        );
        assert_eq!("average".parse::<TimingField>().unwrap(), TimingField::Average);
        assert!("p99".parse::<TimingField>().is_err());
    }

    #[test]
    fn test_operation_timing_field_selection() {
        let timing: OperationTiming =
            serde_json::from_str(r#"{"executionTime": 2000.0}"#).unwrap();
        assert_eq!(timing.millis(TimingField::ExecutionTime), Some(2000.0));
        assert_eq!(timing.millis(TimingField::Average), None);
    }

    #[test]
    fn test_operation_timing_ignores_unknown_fields() {
        let timing: OperationTiming =
            serde_json::from_str(r#"{"average": 1500.0, "diff": "-3%"}"#).unwrap();
        assert_eq!(timing.millis(TimingField::Average), Some(1500.0));
    }

    #[test]
    fn test_mix_timings_partial_record() {
        let timings: MixTimings =
            serde_json::from_str(r#"{"createsOnly": {"executionTime": 100.0}}"#).unwrap();
        assert!(timings.for_mix(OperationMix::CreatesOnly).is_some());
        assert!(timings.for_mix(OperationMix::UpdatesOnly).is_none());
        assert!(timings.for_mix(OperationMix::Mix).is_none());
    }

    #[test]
    fn test_mix_timings_serializes_without_absent_mixes() {
        let timings = MixTimings {
            creates_only: Some(OperationTiming {
                execution_time: Some(100.0),
                average: None,
            }),
            updates_only: None,
            mix: None,
        };
        let json = serde_json::to_string(&timings).unwrap();
        assert_eq!(json, r#"{"createsOnly":{"executionTime":100.0}}"#);
    }
}
