//! # Arithmetic dispatch
//!
//! Binary operators come in two families:
//!
//! - the broadcast / linear-algebra family ([`add`], [`sub`], [`mul`], [`div`]),
//!   which broadcasts scalars and vectors across larger operands and carries
//!   the restricted matrix product;
//! - the elementwise (Hadamard) family ([`dot_add`], [`dot_sub`], [`dot_mul`],
//!   [`dot_div`]), which only combines operands of identical shape.
//!
//! Both classify their operands into a (`Shape`, `Shape`) pair and route it to
//! a kernel in [`kernels`]. Pairs without a kernel are reported as
//! [`MathError::Unsupported`](crate::error::MathError::Unsupported).
//!
//! ```rust
//! use lrkit_engine::math::{Matrix, Value, Vector};
//! use lrkit_engine::ops;
//!
//! let a = Value::from(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap());
//! let theta = Value::from(Matrix::from_rows(vec![vec![10.0], vec![100.0]]).unwrap());
//! let out = ops::mul(&a, &theta).unwrap();
//! assert_eq!(out.as_matrix().unwrap().to_rows(), vec![vec![210.0], vec![430.0], vec![650.0]]);
//!
//! let v = Value::from(Vector::from([1.0, 2.0]));
//! assert!(ops::div(&v, &v).is_err());
//! ```

pub mod dispatch;
pub mod kernels;

pub use dispatch::{
    add, broadcast, div, dot_add, dot_div, dot_mul, dot_sub, elementwise, mul, sub,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        }
    }

    /// Name of the broadcast-family operator.
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
        }
    }

    /// Name of the elementwise-family operator.
    pub fn dot_name(self) -> &'static str {
        match self {
            BinaryOp::Add => "dot_add",
            BinaryOp::Sub => "dot_sub",
            BinaryOp::Mul => "dot_mul",
            BinaryOp::Div => "dot_div",
        }
    }
}
