//! The Benchmark Series Projector.
//!
//! Given a [`BenchmarkHistory`] and a selection (latest window or explicit
//! comparison slots), produce a [`ChartProjection`] whose series are all
//! positionally aligned with the revision labels. Every call builds its
//! result from scratch; there is no shared series state between calls.

use crate::policy::RevisionOrder;
use crate::series::{ChartProjection, SeriesKey};
use syncmark_core::{
    BenchmarkHistory, OperationMix, Result, RevisionId, TimingField, TimingRecord,
};

/// Sync-types projected when no explicit set is configured.
pub const DEFAULT_SYNC_TYPES: [&str; 6] = [
    "productSync",
    "categorySync",
    "inventorySync",
    "productTypeSync",
    "typeSync",
    "cartDiscountSync",
];

/// Revisions shown by the default latest-window projection.
pub const DEFAULT_WINDOW: usize = 10;

/// Projector configuration, resolved once per deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectorConfig {
    /// Sync-type feed keys to project. The series-key set is the cross
    /// product of this list and the three operation mixes.
    pub sync_types: Vec<String>,
    /// Which numeric field of an operation timing carries the elapsed time.
    pub timing_field: TimingField,
    /// Display-order policy for the revision index.
    pub order: RevisionOrder,
    /// Latest-window size in revisions.
    pub window: usize,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            sync_types: DEFAULT_SYNC_TYPES.iter().map(|s| s.to_string()).collect(),
            timing_field: TimingField::default(),
            order: RevisionOrder::default(),
            window: DEFAULT_WINDOW,
        }
    }
}

/// Pure projection from a [`BenchmarkHistory`] into chart-ready series.
///
/// All operations are deterministic and side-effect free: the same inputs
/// yield the same projection, and nothing accumulates across calls.
#[derive(Debug, Clone)]
pub struct SeriesProjector {
    config: ProjectorConfig,
    keys: Vec<SeriesKey>,
}

impl SeriesProjector {
    /// Create a projector, fixing the series-key set from the configuration.
    pub fn new(config: ProjectorConfig) -> Self {
        let keys = config
            .sync_types
            .iter()
            .flat_map(|sync_type| {
                OperationMix::ALL
                    .iter()
                    .map(move |mix| SeriesKey::new(sync_type.clone(), *mix))
            })
            .collect();
        Self { config, keys }
    }

    /// The active configuration.
    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// The fixed series-key set, in configuration order.
    pub fn series_keys(&self) -> &[SeriesKey] {
        &self.keys
    }

    /// Build the ordered revision index per the configured policy.
    ///
    /// Seeds the caller's selector option lists. Empty history yields an
    /// empty index.
    pub fn index_revisions(&self, history: &BenchmarkHistory) -> Vec<RevisionId> {
        self.config.order.index(history)
    }

    /// Project the latest window using the configured window size.
    pub fn project_latest(
        &self,
        history: &BenchmarkHistory,
        ordered: &[RevisionId],
    ) -> Result<ChartProjection> {
        self.project_window(history, ordered, self.config.window)
    }

    /// Project the first `window` entries of `ordered`, or fewer if the
    /// index is shorter.
    ///
    /// Every taken id must resolve in `history`; an unknown id fails the
    /// whole call rather than leaving a partial row behind.
    pub fn project_window(
        &self,
        history: &BenchmarkHistory,
        ordered: &[RevisionId],
        window: usize,
    ) -> Result<ChartProjection> {
        let take = window.min(ordered.len());
        self.project(history, ordered[..take].iter().map(String::as_str))
    }

    /// Project the user's comparison selection.
    ///
    /// Each slot is one selector control: `None` (or an empty string) means
    /// unselected and contributes no label and no values, not a zero-filled
    /// position.
    pub fn project_comparison(
        &self,
        history: &BenchmarkHistory,
        selections: &[Option<RevisionId>],
    ) -> Result<ChartProjection> {
        self.project(
            history,
            selections
                .iter()
                .filter_map(|slot| slot.as_deref())
                .filter(|revision| !revision.is_empty()),
        )
    }

    fn project<'a>(
        &self,
        history: &BenchmarkHistory,
        revisions: impl Iterator<Item = &'a str>,
    ) -> Result<ChartProjection> {
        let mut projection = ChartProjection::empty(&self.keys);
        for revision in revisions {
            let record = history.record(revision)?;
            projection.category_labels.push(revision.to_owned());
            for series in &mut projection.series {
                series.values.push(self.seconds_for(record, &series.key));
            }
        }
        Ok(projection)
    }

    // Absent sync-type, mix sub-record, or selected field all project as
    // zero: positions are filled, never skipped, so every series stays
    // aligned with the labels.
    fn seconds_for(&self, record: &TimingRecord, key: &SeriesKey) -> f64 {
        record
            .get(&key.sync_type)
            .and_then(|timings| timings.for_mix(key.operation_mix))
            .and_then(|timing| timing.millis(self.config.timing_field))
            .map(|ms| ms / 1000.0)
            .unwrap_or(0.0)
    }
}
