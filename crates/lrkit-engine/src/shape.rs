//! Shape utilities over [`Value`]: transpose with vector promotion,
//! reshape/unroll, column extraction, joins and the matrix factories.

use rand::Rng;

use crate::error::{MathError, Result};
use crate::math::{Dims, Matrix, Shape, Value, Vector};

/// Transpose a value.
///
/// - a vector becomes an N×1 column matrix;
/// - an N×1 column matrix collapses back to a vector;
/// - any other matrix is transposed normally;
/// - a scalar is its own transpose.
///
/// Applying it twice returns the input for every matrix with at least two
/// rows. A 1×N matrix comes back in the vector row form.
pub fn transpose(value: &Value) -> Value {
    match value {
        Value::Scalar(s) => Value::Scalar(*s),
        Value::Vector(v) => Value::Matrix(Matrix::column_from(v)),
        Value::Matrix(m) if m.ncols() == 1 => Value::Vector(m.unroll()),
        Value::Matrix(m) => Value::Matrix(m.transpose()),
    }
}

pub fn unroll(matrix: &Matrix) -> Vector {
    matrix.unroll()
}

/// Lay a vector out as `rows`×`cols`, row-major.
pub fn reshape(vector: &Vector, rows: usize, cols: usize) -> Result<Matrix> {
    Matrix::reshape(vector, rows, cols)
}

/// Columns `from..=to`, 1-based.
pub fn columns(matrix: &Matrix, from: usize, to: usize) -> Result<Matrix> {
    matrix.columns(from, to)
}

/// Concatenate same-category values.
///
/// Vectors are joined end to end. Matrices are joined side by side and must
/// share a row count. Anything else has no join.
pub fn join(values: &[Value]) -> Result<Value> {
    let Some(first) = values.first() else {
        return Err(MathError::EmptyInput { op: "join" });
    };

    match first {
        Value::Vector(_) => {
            let mut out = Vec::new();
            for value in values {
                match value {
                    Value::Vector(v) => out.extend_from_slice(v.as_slice()),
                    other => return Err(join_unsupported(first, other)),
                }
            }
            Ok(Value::Vector(Vector::from_vec(out)))
        }
        Value::Matrix(_) => {
            let mut matrices = Vec::with_capacity(values.len());
            for value in values {
                match value {
                    Value::Matrix(m) => matrices.push(m),
                    other => return Err(join_unsupported(first, other)),
                }
            }
            join_matrices(&matrices).map(Value::Matrix)
        }
        Value::Scalar(_) => Err(join_unsupported(first, values.get(1).unwrap_or(first))),
    }
}

fn join_unsupported(first: &Value, other: &Value) -> MathError {
    MathError::Unsupported {
        op: "join",
        lhs: first.shape(),
        rhs: other.shape(),
    }
}

/// Side-by-side concatenation of matrices with a shared row count.
pub fn join_matrices(matrices: &[&Matrix]) -> Result<Matrix> {
    let Some(first) = matrices.first() else {
        return Err(MathError::EmptyInput { op: "join" });
    };
    let rows = first.nrows();
    if let Some(bad) = matrices.iter().find(|m| m.nrows() != rows) {
        return Err(MathError::ShapeMismatch {
            op: "join",
            lhs: Dims::Matrix(first.nrows(), first.ncols()),
            rhs: Dims::Matrix(bad.nrows(), bad.ncols()),
        });
    }

    let cols: usize = matrices.iter().map(|m| m.ncols()).sum();
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for m in matrices {
            data.extend_from_slice(m.row_slice(row));
        }
    }
    Matrix::from_shape_vec((rows, cols), data)
}

pub fn zeros(rows: usize, cols: usize) -> Matrix {
    Matrix::zeros(rows, cols)
}

pub fn ones(rows: usize, cols: usize) -> Matrix {
    Matrix::ones(rows, cols)
}

pub fn identity(size: usize) -> Matrix {
    Matrix::identity(size)
}

pub fn sequence(rows: usize, cols: usize) -> Matrix {
    Matrix::sequence(rows, cols)
}

pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
    Matrix::random(rows, cols, rng)
}

/// Coerce labels into an m×1 column. Vectors are promoted; a wider matrix is rejected.
pub fn as_column(value: &Value, op: &'static str) -> Result<Matrix> {
    match value {
        Value::Vector(v) => Ok(Matrix::column_from(v)),
        Value::Matrix(m) if m.ncols() == 1 => Ok(m.clone()),
        Value::Matrix(m) => Err(MathError::ShapeMismatch {
            op,
            lhs: Dims::Matrix(m.nrows(), m.ncols()),
            rhs: Dims::Matrix(m.nrows(), 1),
        }),
        Value::Scalar(_) => Err(MathError::Unsupported {
            op,
            lhs: Shape::Scalar,
            rhs: Shape::Matrix,
        }),
    }
}
