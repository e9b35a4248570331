//! Logistic activation.

use crate::math::Value;

/// `1 / (1 + e^-z)`.
#[inline]
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Elementwise logistic sigmoid; the output has the shape of the input.
pub fn sigmoid(z: &Value) -> Value {
    z.mapv(logistic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Matrix, Vector};

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(logistic(0.0), 0.5);
        assert_eq!(sigmoid(&Value::Scalar(0.0)), Value::Scalar(0.5));
    }

    #[test]
    fn sigmoid_keeps_shape() {
        let m = Value::Matrix(Matrix::zeros(2, 3));
        let out = sigmoid(&m);
        assert_eq!(out.dims(), m.dims());
        assert!(out.as_matrix().unwrap().as_slice().iter().all(|&v| v == 0.5));

        let v = Value::Vector(Vector::from([-1.0, 1.0]));
        let out = sigmoid(&v).into_vector("sigmoid").unwrap();
        assert!((out[0] + out[1] - 1.0).abs() < 1e-12);
        assert!((out[1] - 0.731_058_578_630_004_9).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_saturates_without_overflow() {
        assert_eq!(logistic(-1000.0), 0.0);
        assert_eq!(logistic(1000.0), 1.0);
    }
}
