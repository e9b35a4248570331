//! Integration tests for the cost function, gradient descent and sigmoid.

use lrkit_engine::activation::sigmoid;
use lrkit_engine::config::SolverConfig;
use lrkit_engine::models::{cost, gradient_descent, predict, GradientDescent, SolverState};
use lrkit_engine::preprocessing::add_intercept;
use lrkit_engine::{MathError, Matrix, Value, Vector};

/// Route solver logs through the test harness; `RUST_LOG=lrkit_engine=trace` shows every iteration.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `y = 4 + 3x` sampled at a handful of points, with an intercept column.
fn linear_problem() -> (Matrix, Vector) {
    let xs = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
    let x = Matrix::from_rows(xs.iter().map(|&v| vec![v]).collect::<Vec<_>>()).unwrap();
    let y = xs.iter().map(|&v| 4.0 + 3.0 * v).collect();
    (add_intercept(&x).unwrap(), y)
}

// ---------------------------------------------------------------------------
// Cost
// ---------------------------------------------------------------------------

#[test]
fn cost_of_zero_theta() {
    let (x, y) = linear_problem();
    let expected: f64 = y.iter().map(|v| v * v).sum::<f64>() / (2.0 * y.len() as f64);
    let j = cost(&x, &Value::Vector(y), &Matrix::zeros(2, 1)).unwrap();
    assert!((j - expected).abs() < 1e-12);
}

#[test]
fn cost_rejects_mismatched_labels() {
    let (x, _) = linear_problem();
    let short = Value::Vector(Vector::from_vec(vec![1.0, 2.0]));
    assert!(matches!(
        cost(&x, &short, &Matrix::zeros(2, 1)),
        Err(MathError::ShapeMismatch { op: "cost", .. })
    ));
}

#[test]
fn cost_reports_overflow() {
    let x = Matrix::from_rows(vec![[1.0e200]]).unwrap();
    let y = Value::Vector(Vector::from_vec(vec![0.0]));
    let theta = Matrix::from_rows(vec![[1.0e200]]).unwrap();
    assert!(matches!(
        cost(&x, &y, &theta),
        Err(MathError::NonFinite { op: "cost" })
    ));
}

// ---------------------------------------------------------------------------
// Gradient descent
// ---------------------------------------------------------------------------

#[test]
fn history_is_strictly_decreasing() {
    init_logging();
    let (x, y) = linear_problem();
    let fit = gradient_descent(&x, &Value::Vector(y), &Matrix::zeros(2, 1), 0.05, 400).unwrap();
    assert!(!fit.cost_history.is_empty());
    for pair in fit.cost_history.windows(2) {
        assert!(pair[1] < pair[0], "cost rose: {} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn recovers_the_line() {
    init_logging();
    let (x, y) = linear_problem();
    let y = Value::Vector(y);
    let solver = GradientDescent::new(SolverConfig::new(0.1, 20_000));
    let fit = solver.fit(&x, &y, &Matrix::zeros(2, 1)).unwrap();
    assert!((fit.theta[(0, 0)] - 4.0).abs() < 1e-3, "intercept {}", fit.theta[(0, 0)]);
    assert!((fit.theta[(1, 0)] - 3.0).abs() < 1e-3, "slope {}", fit.theta[(1, 0)]);

    let final_cost = fit.final_cost().unwrap();
    assert!((cost(&x, &y, &fit.theta).unwrap() - final_cost).abs() < 1e-12);
}

#[test]
fn small_budget_is_exhausted() {
    init_logging();
    let (x, y) = linear_problem();
    let fit = gradient_descent(&x, &Value::Vector(y), &Matrix::zeros(2, 1), 0.01, 5).unwrap();
    assert_eq!(fit.state, SolverState::Exhausted);
    assert_eq!(fit.iterations, 5);
    assert_eq!(fit.cost_history.len(), 5);
}

#[test]
fn overshooting_step_converges_on_previous_theta() {
    init_logging();
    let (x, y) = linear_problem();
    let theta0 = Matrix::zeros(2, 1);
    // far past the stability limit: the first update already raises the cost
    let fit = gradient_descent(&x, &Value::Vector(y), &theta0, 10.0, 100).unwrap();
    assert_eq!(fit.state, SolverState::Converged);
    assert_eq!(fit.iterations, 1);
    assert!(fit.cost_history.is_empty());
    assert_eq!(fit.theta, theta0);
}

#[test]
fn overflowing_step_converges_on_previous_theta() {
    init_logging();
    let x = Matrix::from_rows(vec![[1.0, 1e150], [1.0, 2e150]]).unwrap();
    let y = Value::Vector(Vector::from_vec(vec![1.0, 2.0]));
    let theta0 = Matrix::zeros(2, 1);
    // the first candidate's squared residuals overflow to +inf
    let fit = gradient_descent(&x, &y, &theta0, 1.0, 10).unwrap();
    assert_eq!(fit.state, SolverState::Converged);
    assert_eq!(fit.iterations, 1);
    assert!(fit.cost_history.is_empty());
    assert_eq!(fit.theta, theta0);
}

#[test]
fn predictions_follow_theta() {
    let (x, _) = linear_problem();
    let theta = Matrix::from_rows(vec![[4.0], [3.0]]).unwrap();
    let p = predict(&x, &theta).unwrap();
    assert_eq!(p.shape(), (7, 1));
    assert_eq!(p[(2, 0)], 7.0);
}

#[test]
fn labels_as_column_or_vector_agree() {
    let (x, y) = linear_problem();
    let column = Value::Matrix(Matrix::column_from(&y));
    let a = gradient_descent(&x, &Value::Vector(y), &Matrix::zeros(2, 1), 0.05, 50).unwrap();
    let b = gradient_descent(&x, &column, &Matrix::zeros(2, 1), 0.05, 50).unwrap();
    assert_eq!(a.theta, b.theta);
    assert_eq!(a.cost_history, b.cost_history);
}

// ---------------------------------------------------------------------------
// Sigmoid
// ---------------------------------------------------------------------------

#[test]
fn sigmoid_is_shape_polymorphic() {
    assert_eq!(sigmoid(&Value::Scalar(0.0)), Value::Scalar(0.5));

    let v = sigmoid(&Value::Vector(Vector::from_vec(vec![-50.0, 0.0, 50.0])));
    let v = v.as_vector().unwrap();
    assert!(v[0] < 1e-20);
    assert_eq!(v[1], 0.5);
    assert!((v[2] - 1.0).abs() < 1e-15);

    let m = sigmoid(&Value::Matrix(Matrix::zeros(2, 3)));
    assert_eq!(m, Value::Matrix(Matrix::from_elem(2, 3, 0.5)));
}
