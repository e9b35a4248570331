//! Linear regression by batch gradient descent.
//!
//! The hypothesis is `h(x) = x · θ` for a feature row `x` and an n×1 parameter
//! column `θ`. All arithmetic goes through the shape-dispatched operators in
//! [`crate::ops`], so any dimensional problem surfaces as a [`MathError`].

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::{MathError, Result};
use crate::math::{Dims, Matrix, Value};
use crate::ops;
use crate::shape::{as_column, transpose};

/// Where the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverState {
    Running,
    /// The last candidate update did not strictly lower the cost.
    Converged,
    /// The iteration budget ran out while the cost was still falling.
    Exhausted,
}

/// Result of a gradient-descent run.
#[derive(Debug, Clone)]
pub struct RegressionFit {
    /// Parameters from the last improving iteration.
    pub theta: Matrix,
    /// Cost after each accepted update, strictly decreasing.
    pub cost_history: Vec<f64>,
    pub state: SolverState,
    /// Number of updates attempted, including a rejected final one.
    pub iterations: usize,
}

impl RegressionFit {
    /// Cost of the returned parameters, if any update was accepted.
    pub fn final_cost(&self) -> Option<f64> {
        self.cost_history.last().copied()
    }
}

fn check_inputs(op: &'static str, x: &Matrix, y: &Matrix, theta: &Matrix) -> Result<()> {
    if x.nrows() == 0 {
        return Err(MathError::EmptyInput { op });
    }
    if y.nrows() != x.nrows() {
        return Err(MathError::ShapeMismatch {
            op,
            lhs: Dims::Matrix(x.nrows(), x.ncols()),
            rhs: Dims::Matrix(y.nrows(), y.ncols()),
        });
    }
    if theta.ncols() != 1 || theta.nrows() != x.ncols() {
        return Err(MathError::ShapeMismatch {
            op,
            lhs: Dims::Matrix(x.nrows(), x.ncols()),
            rhs: Dims::Matrix(theta.nrows(), theta.ncols()),
        });
    }
    Ok(())
}

/// `J = (1 / 2m) * sum((Xθ - y)^2)` on already-validated operands.
fn squared_error_cost(x: &Value, y: &Value, theta: &Value, m: f64) -> Result<f64> {
    let residuals = ops::sub(&ops::mul(x, theta)?, y)?;
    let squared = ops::dot_mul(&residuals, &residuals)?;
    let cost = squared.sum() / (2.0 * m);
    if !cost.is_finite() {
        return Err(MathError::NonFinite { op: "cost" });
    }
    Ok(cost)
}

/// Linear-regression cost of `theta` on features `x` (m×n) and labels `y`.
///
/// `y` may be an m×1 matrix or a vector of length m.
pub fn cost(x: &Matrix, y: &Value, theta: &Matrix) -> Result<f64> {
    let y = as_column(y, "cost")?;
    check_inputs("cost", x, &y, theta)?;
    squared_error_cost(
        &Value::Matrix(x.clone()),
        &Value::Matrix(y),
        &Value::Matrix(theta.clone()),
        x.nrows() as f64,
    )
}

/// Predictions `Xθ` as an m×1 column.
pub fn predict(x: &Matrix, theta: &Matrix) -> Result<Matrix> {
    ops::mul(&Value::Matrix(x.clone()), &Value::Matrix(theta.clone()))?.into_matrix("predict")
}

/// Batch gradient-descent solver.
#[derive(Debug, Clone, Default)]
pub struct GradientDescent {
    config: SolverConfig,
}

impl GradientDescent {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// One update `θ - (α/m) * Xᵀ(Xθ - y)`.
    ///
    /// `(Xᵀr)ᵀ` is formed as the row-vector product `rᵀX`, then promoted back
    /// to a column before it is subtracted from θ.
    fn step(x: &Value, y: &Value, theta: &Value, alpha: &Value, m: &Value) -> Result<Value> {
        let residuals = ops::sub(&ops::mul(x, theta)?, y)?;
        let gradient = ops::mul(&transpose(&residuals), x)?;
        let scaled = ops::div(&ops::mul(alpha, &gradient)?, m)?;
        ops::sub(theta, &transpose(&scaled))
    }

    /// Fit `theta` starting from `initial_theta` (n×1).
    pub fn fit(&self, x: &Matrix, y: &Value, initial_theta: &Matrix) -> Result<RegressionFit> {
        let alpha = self.config.learning_rate;
        if !alpha.is_finite() {
            return Err(MathError::invalid(format!(
                "learning rate must be finite, got {}",
                alpha
            )));
        }

        let y = as_column(y, "gradient_descent")?;
        check_inputs("gradient_descent", x, &y, initial_theta)?;

        let m = x.nrows() as f64;
        let x = Value::Matrix(x.clone());
        let y = Value::Matrix(y);
        let alpha = Value::Scalar(alpha);
        let m_value = Value::Scalar(m);

        let mut theta = Value::Matrix(initial_theta.clone());
        let mut cost_history = Vec::new();
        let mut state = SolverState::Running;
        let mut iterations = 0;

        let mut current = squared_error_cost(&x, &y, &theta, m)?;
        log::debug!("gradient descent: initial cost {:.6}", current);

        while state == SolverState::Running {
            if iterations == self.config.max_iterations {
                state = SolverState::Exhausted;
                break;
            }
            iterations += 1;

            let candidate = Self::step(&x, &y, &theta, &alpha, &m_value)?;
            // an overflowing candidate counts as a failed decrease
            let next = match squared_error_cost(&x, &y, &candidate, m) {
                Ok(next) => next,
                Err(MathError::NonFinite { .. }) => f64::INFINITY,
                Err(e) => return Err(e),
            };

            if next >= current {
                log::debug!(
                    "gradient descent: iteration {} raised cost {:.6} -> {:.6}, keeping previous parameters",
                    iterations,
                    current,
                    next
                );
                state = SolverState::Converged;
            } else {
                log::trace!("gradient descent: iteration {} cost {:.6}", iterations, next);
                cost_history.push(next);
                theta = candidate;
                current = next;
            }
        }

        log::info!(
            "gradient descent finished: {:?} after {} iterations, cost {:.6}",
            state,
            iterations,
            current
        );

        Ok(RegressionFit {
            theta: theta.into_matrix("gradient_descent")?,
            cost_history,
            state,
            iterations,
        })
    }
}

/// Run gradient descent with learning rate `alpha` for at most `max_iterations` updates.
pub fn gradient_descent(
    x: &Matrix,
    y: &Value,
    initial_theta: &Matrix,
    alpha: f64,
    max_iterations: usize,
) -> Result<RegressionFit> {
    GradientDescent::new(SolverConfig::new(alpha, max_iterations)).fit(x, y, initial_theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;

    fn line_data() -> (Matrix, Vector) {
        // y = 1 + 2x with an intercept column
        let rows: Vec<Vec<f64>> = (0..6).map(|i| vec![1.0, i as f64]).collect();
        let y = (0..6).map(|i| 1.0 + 2.0 * i as f64).collect();
        (Matrix::from_rows(rows).unwrap(), y)
    }

    #[test]
    fn cost_of_exact_fit_is_zero() {
        let (x, y) = line_data();
        let theta = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(cost(&x, &Value::Vector(y), &theta).unwrap(), 0.0);
    }

    #[test]
    fn cost_matches_closed_form() {
        let x = Matrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 2.0]]).unwrap();
        let y = Matrix::from_rows(vec![vec![1.0], vec![3.0]]).unwrap();
        let theta = Matrix::zeros(2, 1);
        // (1 + 9) / (2 * 2)
        assert_eq!(cost(&x, &Value::Matrix(y), &theta).unwrap(), 2.5);
    }

    #[test]
    fn zero_iterations_is_exhausted_immediately() {
        let (x, y) = line_data();
        let fit = gradient_descent(&x, &Value::Vector(y), &Matrix::zeros(2, 1), 0.05, 0).unwrap();
        assert_eq!(fit.state, SolverState::Exhausted);
        assert!(fit.cost_history.is_empty());
        assert_eq!(fit.theta, Matrix::zeros(2, 1));
    }

    #[test]
    fn non_finite_initial_cost_is_an_error() {
        let x = Matrix::from_rows(vec![vec![1.0, f64::NAN], vec![1.0, 2.0]]).unwrap();
        let y = Value::Vector(vec![1.0, 2.0].into());
        let err = gradient_descent(&x, &y, &Matrix::zeros(2, 1), 0.1, 10).unwrap_err();
        assert!(matches!(err, MathError::NonFinite { op: "cost" }));
    }

    #[test]
    fn rejects_misshapen_theta() {
        let (x, y) = line_data();
        let err = gradient_descent(&x, &Value::Vector(y), &Matrix::zeros(3, 1), 0.05, 10).unwrap_err();
        assert!(matches!(err, MathError::ShapeMismatch { op: "gradient_descent", .. }));
    }
}
