//! Load, split, scale and solve for an `lrkit fit` run.
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use lrkit_engine::data_handling::{split_rows, Dataset};
use lrkit_engine::io::{read_matrix_with_config, split_features_labels};
use lrkit_engine::models::{cost, GradientDescent, SolverState};
use lrkit_engine::preprocessing::{add_intercept, fit_scaler, transform, Scaler};
use lrkit_engine::{Matrix, Value};

use super::input::FitConfig;
use crate::util::write_text_output;

/// Outcome of a fit, printed as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct FitReport {
    /// Intercept first, then one weight per feature column.
    pub theta: Vec<f64>,
    pub state: SolverState,
    pub iterations: usize,
    /// Training cost of `theta`; unset when no update improved on the start.
    pub final_cost: Option<f64>,
    /// Cost of `theta` on the held-out rows; unset without a test split.
    pub test_cost: Option<f64>,
    pub train_rows: usize,
    pub test_rows: usize,
    pub label_column: usize,
    pub scaler: Option<Scaler>,
}

fn scale_split(train: &mut Dataset, test: &mut Dataset) -> Result<Scaler> {
    let scaler = fit_scaler(&train.x).context("Failed to fit feature scaler")?;
    train.x = transform(&train.x, &scaler)?;
    if test.n_samples() > 0 {
        test.x = transform(&test.x, &scaler)?;
    }
    Ok(scaler)
}

fn design_matrix(x: &Matrix) -> Result<Matrix> {
    add_intercept(x).context("Failed to add intercept column")
}

/// Run gradient descent as described by `config`.
pub fn run_fit(config: &FitConfig) -> Result<FitReport> {
    let table = read_matrix_with_config(&config.data, &config.loader)?;
    let label_column = config
        .label_column
        .unwrap_or_else(|| table.ncols().saturating_sub(1));
    let data = split_features_labels(&table, label_column)
        .with_context(|| format!("Failed to take labels from column {}", label_column))?;
    log::info!(
        "Loaded {} samples with {} features from {}",
        data.n_samples(),
        data.n_features(),
        config.data
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (mut train, mut test) = split_rows(&data, config.test_fraction, &mut rng)?;
    if train.n_samples() == 0 {
        anyhow::bail!("No training rows left after holding out {}", test.n_samples());
    }

    let scaler = if config.scale {
        Some(scale_split(&mut train, &mut test)?)
    } else {
        None
    };

    let train_x = design_matrix(&train.x)?;
    let theta0 = Matrix::zeros(train_x.ncols(), 1);
    let solver = GradientDescent::new(config.solver.clone());
    let fit = solver
        .fit(&train_x, &Value::Matrix(train.y.clone()), &theta0)
        .context("Gradient descent failed")?;

    match fit.state {
        SolverState::Converged => log::info!("Converged after {} iterations", fit.iterations),
        SolverState::Exhausted => log::warn!(
            "Stopped after {} iterations while the cost was still falling; consider raising the iteration budget",
            fit.iterations
        ),
        SolverState::Running => {}
    }

    let test_cost = if test.n_samples() > 0 {
        let test_x = design_matrix(&test.x)?;
        Some(cost(&test_x, &Value::Matrix(test.y.clone()), &fit.theta)?)
    } else {
        None
    };

    Ok(FitReport {
        theta: fit.theta.unroll().to_vec(),
        state: fit.state,
        iterations: fit.iterations,
        final_cost: fit.final_cost(),
        test_cost,
        train_rows: train.n_samples(),
        test_rows: test.n_samples(),
        label_column,
        scaler,
    })
}

/// Serialize the report as pretty JSON to `output` or stdout.
pub fn write_fit_report(report: &FitReport, output: Option<&Path>) -> Result<()> {
    let mut json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    json.push('\n');
    write_text_output(output, &json)
}
