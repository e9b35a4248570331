//! Per-column summary statistics for `lrkit describe`.
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use lrkit_engine::config::LoaderConfig;
use lrkit_engine::io::read_matrix_with_config;
use lrkit_engine::stats;
use lrkit_engine::Matrix;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// 0-based column index.
    pub column: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

pub fn summarize(table: &Matrix) -> Result<Vec<ColumnSummary>> {
    (0..table.ncols())
        .map(|column| {
            let values = table
                .column(column)
                .with_context(|| format!("No column {}", column))?
                .to_vec();
            Ok(ColumnSummary {
                column,
                mean: stats::mean(&values)?,
                median: stats::median(&values)?,
                std: stats::standard_deviation(&values)?,
                min: stats::min(&values)?,
                max: stats::max(&values)?,
            })
        })
        .collect()
}

/// Render summaries as a TSV table with a header row.
pub fn format_table(summaries: &[ColumnSummary]) -> String {
    let mut out = String::from("column\tmean\tmedian\tstd\tmin\tmax\n");
    for s in summaries {
        let _ = writeln!(
            out,
            "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            s.column, s.mean, s.median, s.std, s.min, s.max
        );
    }
    out
}

pub fn describe_file<P: AsRef<Path>>(path: P, loader: &LoaderConfig) -> Result<String> {
    let path = path.as_ref();
    let table = read_matrix_with_config(path, loader)?;
    let summaries = summarize(&table)
        .with_context(|| format!("Failed to summarize {}", path.display()))?;
    Ok(format_table(&summaries))
}
