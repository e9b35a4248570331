//! Shape-specific arithmetic kernels.
//!
//! Each kernel checks its operand extents before touching any data and
//! returns either a complete result or an error. The dispatcher in
//! [`super::dispatch`] decides which kernel a pair of operands reaches.

use crate::error::{MathError, Result};
use crate::math::vector::dot_slices;
use crate::math::{Dims, Matrix, Vector};

use super::BinaryOp;

fn mismatch(op: &'static str, lhs: Dims, rhs: Dims) -> MathError {
    MathError::ShapeMismatch { op, lhs, rhs }
}

fn vdims(v: &Vector) -> Dims {
    Dims::Vector(v.len())
}

fn mdims(m: &Matrix) -> Dims {
    Dims::Matrix(m.nrows(), m.ncols())
}

pub(super) fn check_divisor(op: BinaryOp, name: &'static str, divisor: f64) -> Result<()> {
    if op == BinaryOp::Div && divisor == 0.0 {
        return Err(MathError::DivisionByZero { op: name });
    }
    Ok(())
}

pub fn scalar_scalar(op: BinaryOp, a: f64, b: f64) -> f64 {
    op.apply(a, b)
}

/// Same-shape matrices, position by position.
pub fn matrix_matrix(op: BinaryOp, name: &'static str, a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.shape() != b.shape() {
        return Err(mismatch(name, mdims(a), mdims(b)));
    }
    Ok(a.zip_map(b, |x, y| op.apply(x, y)))
}

/// Same-length vectors, position by position.
pub fn vector_vector(op: BinaryOp, name: &'static str, a: &Vector, b: &Vector) -> Result<Vector> {
    if a.len() != b.len() {
        return Err(mismatch(name, vdims(a), vdims(b)));
    }
    Ok(a.zip_map(b, |x, y| op.apply(x, y)))
}

/// `row[j] op vector[j]` for every row of the matrix.
pub fn matrix_vector(op: BinaryOp, name: &'static str, m: &Matrix, v: &Vector) -> Result<Matrix> {
    if m.ncols() != v.len() {
        return Err(mismatch(name, mdims(m), vdims(v)));
    }
    Ok(m.map_rows_with(v, |x, y| op.apply(x, y)))
}

/// `vector[j] op row[j]` for every row of the matrix.
pub fn vector_matrix(op: BinaryOp, name: &'static str, v: &Vector, m: &Matrix) -> Result<Matrix> {
    if m.ncols() != v.len() {
        return Err(mismatch(name, vdims(v), mdims(m)));
    }
    Ok(m.map_rows_with(v, |x, y| op.apply(y, x)))
}

pub fn matrix_scalar(op: BinaryOp, name: &'static str, m: &Matrix, s: f64) -> Result<Matrix> {
    check_divisor(op, name, s)?;
    Ok(m.mapv(|x| op.apply(x, s)))
}

pub fn scalar_matrix(op: BinaryOp, s: f64, m: &Matrix) -> Matrix {
    m.mapv(|x| op.apply(s, x))
}

pub fn vector_scalar(op: BinaryOp, name: &'static str, v: &Vector, s: f64) -> Result<Vector> {
    check_divisor(op, name, s)?;
    Ok(v.mapv(|x| op.apply(x, s)))
}

pub fn scalar_vector(op: BinaryOp, s: f64, v: &Vector) -> Vector {
    v.mapv(|x| op.apply(s, x))
}

/// Restricted matrix product: `b` must be a single column as tall as `a` is wide.
///
/// Entry `i` of the `rows(a)`x1 result is row `i` of `a` dotted with that column.
pub fn matrix_column_product(name: &'static str, a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if b.ncols() != 1 || b.nrows() != a.ncols() {
        return Err(mismatch(name, mdims(a), mdims(b)));
    }
    let column = b.as_slice();
    let data = a.rows_iter().map(|row| dot_slices(row, column)).collect();
    Matrix::from_shape_vec((a.nrows(), 1), data)
}

/// Row vector times matrix: `result[j] = sum_i v[i] * m[i][j]`.
pub fn vector_matrix_product(name: &'static str, v: &Vector, m: &Matrix) -> Result<Vector> {
    if v.len() != m.nrows() {
        return Err(mismatch(name, vdims(v), mdims(m)));
    }
    let mut out = vec![0.0; m.ncols()];
    for (weight, row) in v.iter().zip(m.rows_iter()) {
        for (acc, &value) in out.iter_mut().zip(row.iter()) {
            *acc += weight * value;
        }
    }
    Ok(Vector::from_vec(out))
}
