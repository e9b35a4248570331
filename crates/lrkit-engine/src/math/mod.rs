//! Scalar, vector and matrix value types.
//!
//! `Vector` and `Matrix` are small owned containers of `f64`. `Value` is the
//! closed sum type the dispatcher works on; its shape tag is derived from the
//! variant on every call rather than stored.
pub mod matrix;
pub mod value;
pub mod vector;

pub use matrix::Matrix;
pub use value::{Dims, Shape, Value};
pub use vector::Vector;
