//! Benchmark series projection for Syncmark.
//!
//! This crate shapes a fetched [`BenchmarkHistory`] into chart-ready,
//! positionally aligned series: an ordered list of revision labels plus one
//! numeric sequence per (sync-type, operation-mix) pair. The projector is a
//! pure transformation; it performs no I/O and never mutates the history.
//!
//! # Quick Start
//!
//! ```
//! use syncmark_core::BenchmarkHistory;
//! use syncmark_projector::{ProjectorConfig, SeriesProjector};
//!
//! let history = BenchmarkHistory::from_json_str(
//!     r#"{"v1": {"productSync": {"createsOnly": {"executionTime": 2000}}}}"#,
//! )?;
//!
//! let projector = SeriesProjector::new(ProjectorConfig::default());
//! let ordered = projector.index_revisions(&history);
//! let projection = projector.project_latest(&history, &ordered)?;
//!
//! assert_eq!(projection.category_labels, vec!["v1"]);
//! # Ok::<(), syncmark_core::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`projector`] - The [`SeriesProjector`] and its configuration
//! - [`policy`] - Revision display-order policies
//! - [`series`] - The [`ChartProjection`] output types
//! - [`io`] - Reading feed documents and writing chart outputs
//! - [`markdown`] - Markdown summary generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod io;
pub mod markdown;
pub mod policy;
pub mod projector;
pub mod series;

pub use policy::RevisionOrder;
pub use projector::{ProjectorConfig, SeriesProjector, DEFAULT_SYNC_TYPES, DEFAULT_WINDOW};
pub use series::{ChartProjection, Series, SeriesKey};

use syncmark_core::{BenchmarkHistory, Result};

/// Project the default latest window with the default configuration.
///
/// Convenience entrypoint for callers without deployment-specific
/// configuration.
pub fn latest_chart(history: &BenchmarkHistory) -> Result<ChartProjection> {
    let projector = SeriesProjector::new(ProjectorConfig::default());
    let ordered = projector.index_revisions(history);
    projector.project_latest(history, &ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_chart_on_empty_history() {
        let projection = latest_chart(&BenchmarkHistory::new()).unwrap();
        assert!(projection.category_labels.is_empty());
        assert!(!projection.series.is_empty());
        assert!(projection.series.iter().all(|s| s.values.is_empty()));
    }
}
