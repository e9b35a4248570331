//! Integration tests for the delimited numeric loader.

use std::io::Write;

use lrkit_engine::config::{Delimiter, LoaderConfig};
use lrkit_engine::io::{read_matrix, read_matrix_with_config, split_features_labels};
use lrkit_engine::Matrix;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

#[test]
fn reads_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "1,2,3\n4,5,6\n");
    let m = read_matrix(&path).unwrap();
    assert_eq!(m, Matrix::sequence(2, 3));
}

#[test]
fn reads_tsv_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.tsv", "1\t2\n3\t4\n");
    assert_eq!(read_matrix(&path).unwrap(), Matrix::sequence(2, 2));
}

#[test]
fn skips_blank_lines_and_trims_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "1, 2\n\n 3 ,4\n\n");
    assert_eq!(read_matrix(&path).unwrap(), Matrix::sequence(2, 2));
}

#[test]
fn explicit_delimiter_and_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.txt", "a;b\n1;2\n3;4\n");
    let config = LoaderConfig {
        delimiter: Delimiter::Semicolon,
        has_header: true,
    };
    assert_eq!(
        read_matrix_with_config(&path, &config).unwrap(),
        Matrix::sequence(2, 2)
    );
}

#[test]
fn non_numeric_field_names_row_and_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "1,2\n3,x\n");
    let err = read_matrix(&path).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("row 2"), "{}", msg);
    assert!(msg.contains("column 2"), "{}", msg);
}

#[test]
fn ragged_row_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "1,2\n3\n");
    let msg = format!("{:#}", read_matrix(&path).unwrap_err());
    assert!(msg.contains("Row 2 has 1 columns, expected 2"), "{}", msg);
}

#[test]
fn empty_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "\n\n");
    assert!(read_matrix(&path).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(read_matrix("/nonexistent/data.csv").is_err());
}

// ---------------------------------------------------------------------------
// Features and labels
// ---------------------------------------------------------------------------

#[test]
fn last_column_as_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "1,2,3\n4,5,6\n");
    let table = read_matrix(&path).unwrap();
    let data = split_features_labels(&table, table.ncols() - 1).unwrap();
    assert_eq!(data.x.to_rows(), vec![vec![1.0, 2.0], vec![4.0, 5.0]]);
    assert_eq!(data.y.to_rows(), vec![vec![3.0], vec![6.0]]);
}
