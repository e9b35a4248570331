use std::fmt;

use crate::error::{MathError, Result};
use crate::math::{Matrix, Vector};

/// Shape category of an operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Vector,
    Matrix,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Scalar => "scalar",
            Shape::Vector => "vector",
            Shape::Matrix => "matrix",
        };
        f.write_str(name)
    }
}

/// Shape category together with its extent, used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dims {
    Scalar,
    Vector(usize),
    Matrix(usize, usize),
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dims::Scalar => write!(f, "scalar"),
            Dims::Vector(len) => write!(f, "vector[{}]", len),
            Dims::Matrix(rows, cols) => write!(f, "matrix[{}x{}]", rows, cols),
        }
    }
}

/// Any operand the engine accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(Vector),
    Matrix(Matrix),
}

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Value::Scalar(_) => Shape::Scalar,
            Value::Vector(_) => Shape::Vector,
            Value::Matrix(_) => Shape::Matrix,
        }
    }

    pub fn dims(&self) -> Dims {
        match self {
            Value::Scalar(_) => Dims::Scalar,
            Value::Vector(v) => Dims::Vector(v.len()),
            Value::Matrix(m) => Dims::Matrix(m.nrows(), m.ncols()),
        }
    }

    /// Rows and columns, counting a vector as one row and a scalar as 1x1.
    pub fn size(&self) -> (usize, usize) {
        match self {
            Value::Scalar(_) => (1, 1),
            Value::Vector(v) => (1, v.len()),
            Value::Matrix(m) => m.shape(),
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_scalar(self, op: &'static str) -> Result<f64> {
        match self {
            Value::Scalar(s) => Ok(s),
            other => Err(MathError::Unsupported {
                op,
                lhs: other.shape(),
                rhs: Shape::Scalar,
            }),
        }
    }

    pub fn into_vector(self, op: &'static str) -> Result<Vector> {
        match self {
            Value::Vector(v) => Ok(v),
            other => Err(MathError::Unsupported {
                op,
                lhs: other.shape(),
                rhs: Shape::Vector,
            }),
        }
    }

    pub fn into_matrix(self, op: &'static str) -> Result<Matrix> {
        match self {
            Value::Matrix(m) => Ok(m),
            other => Err(MathError::Unsupported {
                op,
                lhs: other.shape(),
                rhs: Shape::Matrix,
            }),
        }
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn mapv<F>(&self, f: F) -> Value
    where
        F: FnMut(f64) -> f64,
    {
        let mut f = f;
        match self {
            Value::Scalar(s) => Value::Scalar(f(*s)),
            Value::Vector(v) => Value::Vector(v.mapv(f)),
            Value::Matrix(m) => Value::Matrix(m.mapv(f)),
        }
    }

    pub fn sum(&self) -> f64 {
        match self {
            Value::Scalar(s) => *s,
            Value::Vector(v) => v.sum(),
            Value::Matrix(m) => m.sum(),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vector> for Value {
    fn from(value: Vector) -> Self {
        Value::Vector(value)
    }
}

impl From<Matrix> for Value {
    fn from(value: Matrix) -> Self {
        Value::Matrix(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Vector(v) => write!(f, "{}", v),
            Value::Matrix(m) => write!(f, "{}", m),
        }
    }
}
