//! lrkit-engine: shape-dispatched numeric kernels and linear regression.
//!
//! Operands are a closed [`Value`] type (scalar, vector or matrix). Binary
//! arithmetic classifies both operands and routes the pair to a kernel in
//! [`ops`]; pairs without a kernel are reported as errors rather than guessed.
//! On top of the engine sit a gradient-descent regression solver, the logistic
//! activation, classification metrics, descriptive statistics, a delimited
//! numeric loader and dataset partitioning/preprocessing helpers.
pub mod activation;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod math;
pub mod metrics;
pub mod models;
pub mod ops;
pub mod preprocessing;
pub mod shape;
pub mod stats;

pub use error::{MathError, Result};
pub use math::{Dims, Matrix, Shape, Value, Vector};
