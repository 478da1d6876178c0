//! Markdown summary generation for chart projections.

use crate::series::ChartProjection;
use std::fmt::Write;

/// Generate a markdown summary table from a projection.
///
/// One row per series, one seconds column per revision label.
pub fn generate_summary(projection: &ChartProjection) -> String {
    let mut output = String::new();

    writeln!(output, "# Benchmark Chart Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();

    if projection.category_labels.is_empty() {
        writeln!(output, "No revisions selected.").unwrap();
        return output;
    }

    write!(output, "| Series |").unwrap();
    for label in &projection.category_labels {
        write!(output, " {} |", label).unwrap();
    }
    writeln!(output).unwrap();

    write!(output, "|--------|").unwrap();
    for _ in &projection.category_labels {
        write!(output, "---|").unwrap();
    }
    writeln!(output).unwrap();

    for series in &projection.series {
        write!(output, "| {} |", series.key.label()).unwrap();
        for value in &series.values {
            write!(output, " {:.3} |", value).unwrap();
        }
        writeln!(output).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "Time to sync 1000 resources, in seconds.").unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{Series, SeriesKey};
    use syncmark_core::OperationMix;

    #[test]
    fn test_summary_lists_labels_and_values() {
        let projection = ChartProjection {
            category_labels: vec!["v1".to_string(), "v2".to_string()],
            series: vec![Series {
                key: SeriesKey::new("productSync", OperationMix::CreatesOnly),
                values: vec![2.0, 1.5],
            }],
        };

        let summary = generate_summary(&projection);
        assert!(summary.contains("| Series | v1 | v2 |"));
        assert!(summary.contains("| Product Sync (creates only) | 2.000 | 1.500 |"));
    }

    #[test]
    fn test_summary_notes_empty_projection() {
        let projection = ChartProjection {
            category_labels: Vec::new(),
            series: Vec::new(),
        };
        let summary = generate_summary(&projection);
        assert!(summary.contains("No revisions selected."));
    }
}
