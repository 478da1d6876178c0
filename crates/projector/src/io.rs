//! I/O operations for chart projections.
//!
//! Reads feed documents from disk and writes the chart outputs a downstream
//! renderer consumes.

use crate::markdown;
use crate::series::ChartProjection;
use std::fs;
use std::io;
use std::path::Path;
use syncmark_core::BenchmarkHistory;

/// Default chart output directory.
pub const OUTPUT_DIR: &str = "charts/output";

/// Chart data file consumed by the renderer.
pub const CHART_DATA_FILE: &str = "chart_data.json";

/// Markdown summary file.
pub const SUMMARY_FILE: &str = "summary.md";

/// Write the chart data JSON and markdown summary under `dir`.
pub fn write_chart_outputs(projection: &ChartProjection, dir: impl AsRef<Path>) -> io::Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(projection)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(dir.join(CHART_DATA_FILE), json)?;

    fs::write(dir.join(SUMMARY_FILE), markdown::generate_summary(projection))
}

/// Read a feed document from a JSON file on disk.
pub fn read_history_json(path: impl AsRef<Path>) -> io::Result<BenchmarkHistory> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
