pub mod linear_regression;

pub use linear_regression::{
    cost, gradient_descent, predict, GradientDescent, RegressionFit, SolverState,
};
