//! Reader for headerless delimited numeric files (CSV/TSV).
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::{StringRecord, Trim};

use crate::config::{Delimiter, LoaderConfig};
use crate::data_handling::Dataset;
use crate::error::MathError;
use crate::math::Matrix;

/// Read a delimited numeric file, inferring the delimiter from the extension.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    read_matrix_with_config(path, &LoaderConfig::default())
}

fn delimiter_byte(path: &Path, delimiter: Delimiter) -> u8 {
    match delimiter {
        Delimiter::Comma => b',',
        Delimiter::Tab => b'\t',
        Delimiter::Semicolon => b';',
        Delimiter::Auto => {
            let is_tsv = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("tsv"))
                .unwrap_or(false);
            if is_tsv {
                b'\t'
            } else {
                b','
            }
        }
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}

/// Read a delimited numeric file using an explicit configuration.
///
/// Rows are numbered by their line in the file in error messages, columns
/// from 1.
pub fn read_matrix_with_config<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Matrix> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(path, config.delimiter))
        .has_headers(config.has_header)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open data file: {}", path.display()))?;

    let mut data = Vec::new();
    let mut n_cols: Option<usize> = None;
    let mut n_rows = 0;

    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read record {}", idx + 1))?;
        if is_blank(&record) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 1);

        let expected = *n_cols.get_or_insert(record.len());
        if record.len() != expected {
            return Err(anyhow!(
                "Row {} has {} columns, expected {}",
                line,
                record.len(),
                expected
            ));
        }

        for (col, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().with_context(|| {
                format!("Invalid number '{}' at row {}, column {}", field, line, col + 1)
            })?;
            data.push(value);
        }
        n_rows += 1;
    }

    let n_cols = n_cols.ok_or_else(|| anyhow!("No data rows in {}", path.display()))?;
    log::debug!(
        "Loaded {} rows x {} columns from {}",
        n_rows,
        n_cols,
        path.display()
    );
    Matrix::new(n_rows, n_cols, data).context("Failed to build data matrix")
}

/// Split column `label_column` (0-based) off as the label column; the rest
/// keep their order as features.
pub fn split_features_labels(table: &Matrix, label_column: usize) -> crate::error::Result<Dataset> {
    let (rows, cols) = table.shape();
    if label_column >= cols {
        return Err(MathError::ColumnRange {
            from: label_column + 1,
            to: label_column + 1,
            cols,
        });
    }
    if cols < 2 {
        return Err(MathError::invalid(
            "at least one feature column is required besides the label",
        ));
    }

    let mut features = Vec::with_capacity(rows * (cols - 1));
    let mut labels = Vec::with_capacity(rows);
    for row in table.rows_iter() {
        for (col, &value) in row.iter().enumerate() {
            if col == label_column {
                labels.push(value);
            } else {
                features.push(value);
            }
        }
    }

    Ok(Dataset {
        x: Matrix::new(rows, cols - 1, features)?,
        y: Matrix::new(rows, 1, labels)?,
    })
}
