//! Pair-code dispatch.
//!
//! Every (lhs, rhs) shape pair is spelled out below; a pair that has no
//! kernel for the requested operator returns `MathError::Unsupported`
//! instead of a default value.

use crate::error::{MathError, Result};
use crate::math::Value;

use super::kernels;
use super::BinaryOp;
use BinaryOp::{Add, Div, Mul, Sub};

fn unsupported(op: &'static str, lhs: &Value, rhs: &Value) -> MathError {
    log::debug!("{}: no kernel for {} and {}", op, lhs.dims(), rhs.dims());
    MathError::Unsupported {
        op,
        lhs: lhs.shape(),
        rhs: rhs.shape(),
    }
}

/// Route a broadcast-family operation to its kernel.
pub fn broadcast(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value> {
    let name = op.name();
    match (lhs, rhs) {
        (Value::Scalar(a), Value::Scalar(b)) => {
            kernels::check_divisor(op, name, *b)?;
            Ok(Value::Scalar(kernels::scalar_scalar(op, *a, *b)))
        }
        (Value::Scalar(s), Value::Vector(v)) => match op {
            Add | Sub | Mul => Ok(Value::Vector(kernels::scalar_vector(op, *s, v))),
            Div => Err(unsupported(name, lhs, rhs)),
        },
        (Value::Scalar(s), Value::Matrix(m)) => match op {
            Add | Sub | Mul => Ok(Value::Matrix(kernels::scalar_matrix(op, *s, m))),
            Div => Err(unsupported(name, lhs, rhs)),
        },
        (Value::Vector(v), Value::Scalar(s)) => {
            kernels::vector_scalar(op, name, v, *s).map(Value::Vector)
        }
        (Value::Vector(a), Value::Vector(b)) => match op {
            Add | Sub => kernels::vector_vector(op, name, a, b).map(Value::Vector),
            Mul | Div => Err(unsupported(name, lhs, rhs)),
        },
        (Value::Vector(v), Value::Matrix(m)) => match op {
            Add | Sub => kernels::vector_matrix(op, name, v, m).map(Value::Matrix),
            Mul => kernels::vector_matrix_product(name, v, m).map(Value::Vector),
            Div => Err(unsupported(name, lhs, rhs)),
        },
        (Value::Matrix(m), Value::Scalar(s)) => {
            kernels::matrix_scalar(op, name, m, *s).map(Value::Matrix)
        }
        (Value::Matrix(m), Value::Vector(v)) => match op {
            Add | Sub | Mul => kernels::matrix_vector(op, name, m, v).map(Value::Matrix),
            Div => Err(unsupported(name, lhs, rhs)),
        },
        (Value::Matrix(a), Value::Matrix(b)) => match op {
            Add | Sub => kernels::matrix_matrix(op, name, a, b).map(Value::Matrix),
            Mul => kernels::matrix_column_product(name, a, b).map(Value::Matrix),
            Div => Err(unsupported(name, lhs, rhs)),
        },
    }
}

/// Route an elementwise (Hadamard) operation; shapes must match exactly.
pub fn elementwise(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value> {
    let name = op.dot_name();
    match (lhs, rhs) {
        (Value::Scalar(a), Value::Scalar(b)) => {
            Ok(Value::Scalar(kernels::scalar_scalar(op, *a, *b)))
        }
        (Value::Vector(a), Value::Vector(b)) => {
            kernels::vector_vector(op, name, a, b).map(Value::Vector)
        }
        (Value::Matrix(a), Value::Matrix(b)) => {
            kernels::matrix_matrix(op, name, a, b).map(Value::Matrix)
        }
        (Value::Scalar(_), Value::Vector(_) | Value::Matrix(_))
        | (Value::Vector(_), Value::Scalar(_) | Value::Matrix(_))
        | (Value::Matrix(_), Value::Scalar(_) | Value::Vector(_)) => {
            Err(unsupported(name, lhs, rhs))
        }
    }
}

pub fn add(lhs: &Value, rhs: &Value) -> Result<Value> {
    broadcast(Add, lhs, rhs)
}

pub fn sub(lhs: &Value, rhs: &Value) -> Result<Value> {
    broadcast(Sub, lhs, rhs)
}

pub fn mul(lhs: &Value, rhs: &Value) -> Result<Value> {
    broadcast(Mul, lhs, rhs)
}

pub fn div(lhs: &Value, rhs: &Value) -> Result<Value> {
    broadcast(Div, lhs, rhs)
}

pub fn dot_add(lhs: &Value, rhs: &Value) -> Result<Value> {
    elementwise(Add, lhs, rhs)
}

pub fn dot_sub(lhs: &Value, rhs: &Value) -> Result<Value> {
    elementwise(Sub, lhs, rhs)
}

pub fn dot_mul(lhs: &Value, rhs: &Value) -> Result<Value> {
    elementwise(Mul, lhs, rhs)
}

pub fn dot_div(lhs: &Value, rhs: &Value) -> Result<Value> {
    elementwise(Div, lhs, rhs)
}
