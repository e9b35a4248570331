//! Feature standardization and intercept handling.
//!
//! A [`Scaler`] is fitted on training rows only and then applied unchanged to
//! any held-out rows so both live on the same scale.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::math::{Dims, Matrix};
use crate::shape::join_matrices;

/// Per-column mean and population standard deviation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl Scaler {
    /// Floor applied to every column's deviation so constant columns map to zero.
    pub const MIN_STD: f64 = 1e-12;
}

/// Fit a `Scaler` on a matrix whose rows are samples and columns features.
pub fn fit_scaler(x: &Matrix) -> Result<Scaler> {
    let (nrows, ncols) = x.shape();
    if nrows == 0 || ncols == 0 {
        return Err(MathError::EmptyInput { op: "fit_scaler" });
    }

    let mut mean = vec![0.0; ncols];
    for row in x.rows_iter() {
        for (m, v) in mean.iter_mut().zip(row) {
            *m += v;
        }
    }
    let n = nrows as f64;
    for m in mean.iter_mut() {
        *m /= n;
    }

    let mut var = vec![0.0; ncols];
    for row in x.rows_iter() {
        for c in 0..ncols {
            let d = row[c] - mean[c];
            var[c] += d * d;
        }
    }
    let std = var
        .into_iter()
        .map(|v| (v / n).sqrt().max(Scaler::MIN_STD))
        .collect();

    Ok(Scaler { mean, std })
}

/// Standardize every row with a previously fitted scaler.
pub fn transform(x: &Matrix, scaler: &Scaler) -> Result<Matrix> {
    let (nrows, ncols) = x.shape();
    if ncols != scaler.mean.len() {
        return Err(MathError::ShapeMismatch {
            op: "transform",
            lhs: Dims::Matrix(nrows, ncols),
            rhs: Dims::Vector(scaler.mean.len()),
        });
    }

    let mut out = Vec::with_capacity(nrows * ncols);
    for row in x.rows_iter() {
        for c in 0..ncols {
            out.push((row[c] - scaler.mean[c]) / scaler.std[c]);
        }
    }
    Matrix::from_shape_vec((nrows, ncols), out)
}

/// Fit a scaler and return it alongside the transformed matrix.
pub fn fit_transform(x: &Matrix) -> Result<(Scaler, Matrix)> {
    let scaler = fit_scaler(x)?;
    let scaled = transform(x, &scaler)?;
    Ok((scaler, scaled))
}

/// Prepend a column of ones.
pub fn add_intercept(x: &Matrix) -> Result<Matrix> {
    let ones = Matrix::ones(x.nrows(), 1);
    join_matrices(&[&ones, x])
}
