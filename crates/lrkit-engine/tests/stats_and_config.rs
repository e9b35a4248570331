//! Integration tests for stats helpers, metrics and serde configuration.

use lrkit_engine::config::{Delimiter, LoaderConfig, SolverConfig};
use lrkit_engine::metrics::{accuracy, f1_score, precision, recall, ConfusionTable};
use lrkit_engine::stats;
use lrkit_engine::MathError;

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[test]
fn summary_of_small_sample() {
    let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(stats::sum(&v), 40.0);
    assert!((stats::mean(&v).unwrap() - 5.0).abs() < 1e-12);
    assert!((stats::standard_deviation(&v).unwrap() - 2.0).abs() < 1e-12);
    assert!((stats::median(&v).unwrap() - 4.5).abs() < 1e-9);
    assert_eq!(stats::mode(&v).unwrap(), 4.0);
    assert_eq!(stats::min(&v).unwrap(), 2.0);
    assert_eq!(stats::max(&v).unwrap(), 9.0);
}

#[test]
fn confidence_interval_is_symmetric() {
    let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let z = stats::critical_value(0.95).unwrap();
    let (low, high) = stats::confidence_interval(&v, z).unwrap();
    assert!(((low + high) / 2.0 - 5.0).abs() < 1e-12);
    // 1.96 * 2 / sqrt(8)
    assert!((high - 5.0 - z * 2.0 / 8f64.sqrt()).abs() < 1e-12);
}

#[test]
fn correlation_of_reversed_series() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [10.0, 8.0, 6.0, 4.0, 2.0];
    assert!((stats::coefficient_of_correlation(&x, &y).unwrap() + 1.0).abs() < 1e-12);
    assert!((stats::slope(&x, &y).unwrap() + 2.0).abs() < 1e-12);
}

#[test]
fn stats_errors() {
    assert!(matches!(
        stats::standard_deviation(&[]),
        Err(MathError::EmptyInput { .. })
    ));
    assert!(stats::slope(&[1.0, 2.0], &[1.0]).is_err());
    assert!(matches!(
        stats::coefficient_of_correlation(&[1.0, 1.0], &[1.0, 2.0]),
        Err(MathError::DivisionByZero { .. })
    ));
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[test]
fn perfect_classifier() {
    let t = ConfusionTable::tally(&[0.9, 0.1, 0.8], &[1.0, 0.0, 1.0], 0.5).unwrap();
    assert_eq!(accuracy(&t).unwrap(), 1.0);
    assert_eq!(precision(&t).unwrap(), 1.0);
    assert_eq!(recall(&t).unwrap(), 1.0);
    assert_eq!(f1_score(&t).unwrap(), 1.0);
}

#[test]
fn no_true_positives_has_no_f1() {
    let t = ConfusionTable::new(0, 3, 2, 5);
    assert_eq!(precision(&t).unwrap(), 0.0);
    assert!(matches!(
        f1_score(&t),
        Err(MathError::DivisionByZero { op: "f1_score" })
    ));
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn solver_config_defaults_and_json() {
    let cfg = SolverConfig::default();
    assert!(cfg.learning_rate > 0.0);
    assert!(cfg.max_iterations > 0);

    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("learning_rate"));
    let back: SolverConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn loader_config_fills_missing_fields() {
    let cfg: LoaderConfig = serde_json::from_str(r#"{"delimiter": "tab"}"#).unwrap();
    assert_eq!(cfg.delimiter, Delimiter::Tab);
    assert!(!cfg.has_header);

    let cfg: LoaderConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, LoaderConfig::default());
}

#[test]
fn delimiter_from_str() {
    assert_eq!("comma".parse::<Delimiter>().unwrap(), Delimiter::Comma);
    assert_eq!(";".parse::<Delimiter>().unwrap(), Delimiter::Semicolon);
    assert!("pipe".parse::<Delimiter>().is_err());
}
