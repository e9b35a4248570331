//! Descriptive statistics over slices of reals.
//!
//! Every function rejects empty input with [`MathError::EmptyInput`] instead of
//! returning NaN. Standard deviations are population (divide by `n`).

use std::collections::HashMap;

use statrs::distribution::{ContinuousCDF, Normal};
use statrs::statistics::{Data, Median, Statistics};

use crate::error::{MathError, Result};

fn non_empty(op: &'static str, values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(MathError::EmptyInput { op });
    }
    Ok(())
}

fn same_length(op: &'static str, x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(MathError::invalid(format!(
            "{}: series have {} and {} values",
            op,
            x.len(),
            y.len()
        )));
    }
    non_empty(op, x)
}

/// Round half away from zero to `places` decimals.
pub fn round(value: f64, places: i32) -> f64 {
    let shift = 10f64.powi(places);
    (value * shift).round() / shift
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn mean(values: &[f64]) -> Result<f64> {
    non_empty("mean", values)?;
    Ok(values.iter().mean())
}

/// Middle value of the sorted data, averaging the two middle values for even lengths.
pub fn median(values: &[f64]) -> Result<f64> {
    non_empty("median", values)?;
    Ok(Data::new(values.to_vec()).median())
}

/// Trimmed mean: sort, drop `floor(n * trim)` values from each end, average the rest.
pub fn sample_mean(values: &[f64], trim: f64) -> Result<f64> {
    non_empty("sample_mean", values)?;
    if !(0.0..0.5).contains(&trim) {
        return Err(MathError::invalid(format!(
            "sample_mean: trim must be in [0, 0.5), got {}",
            trim
        )));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let cut = (sorted.len() as f64 * trim).floor() as usize;
    let kept = &sorted[cut..sorted.len() - cut];
    Ok(kept.iter().mean())
}

/// Most frequent value; ties go to the smallest value.
pub fn mode(values: &[f64]) -> Result<f64> {
    non_empty("mode", values)?;
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for v in values {
        *counts.entry(v.to_bits()).or_default() += 1;
    }
    let (bits, _) = counts
        .into_iter()
        .max_by(|(a_bits, a_n), (b_bits, b_n)| {
            a_n.cmp(b_n)
                .then_with(|| f64::from_bits(*b_bits).total_cmp(&f64::from_bits(*a_bits)))
        })
        .ok_or(MathError::EmptyInput { op: "mode" })?;
    Ok(f64::from_bits(bits))
}

/// Population standard deviation.
pub fn standard_deviation(values: &[f64]) -> Result<f64> {
    non_empty("standard_deviation", values)?;
    Ok(values.iter().population_std_dev())
}

pub fn min(values: &[f64]) -> Result<f64> {
    non_empty("min", values)?;
    Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn max(values: &[f64]) -> Result<f64> {
    non_empty("max", values)?;
    Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// `mean ± critical * σ / √n`.
pub fn confidence_interval(values: &[f64], critical: f64) -> Result<(f64, f64)> {
    let centre = mean(values)?;
    let bound = critical * standard_deviation(values)? / (values.len() as f64).sqrt();
    Ok((centre - bound, centre + bound))
}

/// Two-sided standard normal critical value for a confidence level, e.g. 0.95 -> 1.96.
pub fn critical_value(confidence: f64) -> Result<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(MathError::invalid(format!(
            "confidence must be in (0, 1), got {}",
            confidence
        )));
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| MathError::invalid(e.to_string()))?;
    Ok(normal.inverse_cdf(0.5 + confidence / 2.0))
}

/// Pearson correlation coefficient.
pub fn coefficient_of_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    same_length("coefficient_of_correlation", x, y)?;
    let sx = standard_deviation(x)?;
    let sy = standard_deviation(y)?;
    if sx == 0.0 || sy == 0.0 {
        return Err(MathError::DivisionByZero {
            op: "coefficient_of_correlation",
        });
    }
    Ok(x.iter().population_covariance(y.iter()) / (sx * sy))
}

/// Least-squares slope of `y` on `x`: `r * σy / σx`.
pub fn slope(x: &[f64], y: &[f64]) -> Result<f64> {
    let r = coefficient_of_correlation(x, y)?;
    Ok(r * standard_deviation(y)? / standard_deviation(x)?)
}
