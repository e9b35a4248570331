use crate::math::{Dims, Shape};

/// Errors raised by the arithmetic engine and everything built on it.
///
/// Kernels validate their operands before computing, so a returned error
/// always means no partial result was produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// Operand dimensions are incompatible for the selected kernel.
    #[error("{op}: shape mismatch between {lhs} and {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Dims,
        rhs: Dims,
    },

    /// The shape-category pair has no kernel for the requested operator.
    #[error("{op}: unsupported operand shapes {lhs} and {rhs}")]
    Unsupported {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    #[error("{op}: division by zero")]
    DivisionByZero { op: &'static str },

    #[error("{op}: result is not finite")]
    NonFinite { op: &'static str },

    /// Buffer length does not match the requested shape.
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    InvalidShape { rows: usize, cols: usize, len: usize },

    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("a matrix needs at least one row")]
    EmptyMatrix,

    /// 1-based inclusive column bounds outside the matrix.
    #[error("column range {from}..={to} is invalid for a matrix with {cols} columns")]
    ColumnRange { from: usize, to: usize, cols: usize },

    #[error("{op}: input is empty")]
    EmptyInput { op: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl MathError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        MathError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, MathError>;
