//! Chart projection output types.
//!
//! A [`ChartProjection`] is the consumer-facing result: a shared category
//! axis of revision labels plus one positionally aligned value sequence per
//! [`SeriesKey`]. The charting collaborator draws from this shape; nothing
//! here renders pixels.

use serde::{Deserialize, Serialize};
use syncmark_core::OperationMix;

/// Identifies one output series: a (sync-type, operation-mix) pair.
///
/// The full key set is fixed when the projector is constructed, not derived
/// per call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesKey {
    /// The sync-type feed key, e.g. `"productSync"`.
    pub sync_type: String,
    /// The operation mix.
    pub operation_mix: OperationMix,
}

impl SeriesKey {
    /// Create a key for the given sync-type and mix.
    pub fn new(sync_type: impl Into<String>, operation_mix: OperationMix) -> Self {
        Self {
            sync_type: sync_type.into(),
            operation_mix,
        }
    }

    /// Legend label for this series, e.g. `"Product Sync (creates only)"`.
    pub fn label(&self) -> String {
        let stem = self
            .sync_type
            .strip_suffix("Sync")
            .unwrap_or(&self.sync_type);
        let mut chars = stem.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        format!("{} Sync ({})", capitalized, self.operation_mix.label())
    }
}

/// One series' values, aligned positionally with the projection's labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// The key identifying this series.
    pub key: SeriesKey,
    /// Elapsed seconds, one entry per revision label.
    pub values: Vec<f64>,
}

/// The shaped chart data: revision labels plus parallel numeric series.
///
/// Invariant: `values.len() == category_labels.len()` for every series. A
/// projection is built fresh by every projector call and never mutated in
/// place afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProjection {
    /// The shared category axis: revision labels in display order.
    pub category_labels: Vec<String>,
    /// One value sequence per configured series key.
    pub series: Vec<Series>,
}

impl ChartProjection {
    /// An empty projection carrying a zero-length series for every key.
    pub(crate) fn empty(keys: &[SeriesKey]) -> Self {
        Self {
            category_labels: Vec::new(),
            series: keys
                .iter()
                .map(|key| Series {
                    key: key.clone(),
                    values: Vec::new(),
                })
                .collect(),
        }
    }

    /// Number of revisions on the category axis.
    pub fn revision_count(&self) -> usize {
        self.category_labels.len()
    }

    /// Whether every series is positionally aligned with the labels.
    pub fn is_aligned(&self) -> bool {
        self.series
            .iter()
            .all(|s| s.values.len() == self.category_labels.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_key_labels() {
        let key = SeriesKey::new("productSync", OperationMix::CreatesOnly);
        assert_eq!(key.label(), "Product Sync (creates only)");

        let key = SeriesKey::new("productTypeSync", OperationMix::Mix);
        assert_eq!(key.label(), "ProductType Sync (creates and updates)");

        let key = SeriesKey::new("cartDiscountSync", OperationMix::UpdatesOnly);
        assert_eq!(key.label(), "CartDiscount Sync (updates only)");
    }

    #[test]
    fn test_projection_serializes_consumer_field_names() {
        let projection = ChartProjection {
            category_labels: vec!["v1".to_string()],
            series: vec![Series {
                key: SeriesKey::new("productSync", OperationMix::CreatesOnly),
                values: vec![2.0],
            }],
        };
        let json = serde_json::to_value(&projection).unwrap();
        assert!(json.get("categoryLabels").is_some());
        let series = &json["series"][0];
        assert_eq!(series["key"]["syncType"], "productSync");
        assert_eq!(series["key"]["operationMix"], "createsOnly");
        assert_eq!(series["values"][0], 2.0);
    }

    #[test]
    fn test_empty_projection_keeps_every_key() {
        let keys = vec![
            SeriesKey::new("productSync", OperationMix::CreatesOnly),
            SeriesKey::new("typeSync", OperationMix::Mix),
        ];
        let projection = ChartProjection::empty(&keys);
        assert_eq!(projection.series.len(), 2);
        assert!(projection.is_aligned());
        assert_eq!(projection.revision_count(), 0);
    }
}
