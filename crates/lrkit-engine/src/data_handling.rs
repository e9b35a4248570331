//! Random sets and dataset partitioning.
//!
//! Every function draws from a caller-supplied generator so a whole run can be
//! reproduced from one seed.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{MathError, Result};
use crate::math::{Dims, Matrix, Vector};

/// Feature matrix with its label column.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// m×n features.
    pub x: Matrix,
    /// m×1 labels.
    pub y: Matrix,
}

impl Dataset {
    pub fn new(x: Matrix, y: Matrix) -> Result<Self> {
        if y.ncols() != 1 || y.nrows() != x.nrows() {
            return Err(MathError::ShapeMismatch {
                op: "dataset",
                lhs: Dims::Matrix(x.nrows(), x.ncols()),
                rhs: Dims::Matrix(y.nrows(), y.ncols()),
            });
        }
        Ok(Self { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Rows `indices` of both features and labels, in the given order.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            x: self.x.select_rows(indices),
            y: self.y.select_rows(indices),
        }
    }
}

/// Disjoint row index sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub train: Vec<usize>,
    pub validation: Vec<usize>,
    pub test: Vec<usize>,
}

/// `len` uniform draws in `[min, max)`.
pub fn random_float_set<R: Rng + ?Sized>(len: usize, min: f64, max: f64, rng: &mut R) -> Result<Vector> {
    if !(min < max) || !min.is_finite() || !max.is_finite() {
        return Err(MathError::invalid(format!(
            "random_float_set: empty range [{}, {})",
            min, max
        )));
    }
    Ok((0..len).map(|_| rng.gen_range(min..max)).collect())
}

/// `len` uniform whole numbers in `[min, max]`, as reals.
pub fn random_whole_float_set<R: Rng + ?Sized>(
    len: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vector> {
    if min > max {
        return Err(MathError::invalid(format!(
            "random_whole_float_set: empty range [{}, {}]",
            min, max
        )));
    }
    Ok((0..len).map(|_| rng.gen_range(min..=max) as f64).collect())
}

fn check_fraction(name: &str, fraction: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(MathError::invalid(format!(
            "{} must be in [0, 1], got {}",
            name, fraction
        )));
    }
    Ok(())
}

/// Shuffle `0..n` and carve it into test, validation and train sets.
///
/// The test and validation sets hold `round(n * fraction)` indices each and
/// train gets the remainder. Each set is returned in ascending order.
pub fn partition_indices<R: Rng + ?Sized>(
    n: usize,
    validation_fraction: f64,
    test_fraction: f64,
    rng: &mut R,
) -> Result<Partition> {
    check_fraction("validation fraction", validation_fraction)?;
    check_fraction("test fraction", test_fraction)?;

    let n_test = (n as f64 * test_fraction).round() as usize;
    let n_validation = (n as f64 * validation_fraction).round() as usize;
    if n_test + n_validation > n {
        return Err(MathError::invalid(format!(
            "cannot hold out {} test and {} validation rows from {}",
            n_test, n_validation, n
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let mut test = indices[..n_test].to_vec();
    let mut validation = indices[n_test..n_test + n_validation].to_vec();
    let mut train = indices[n_test + n_validation..].to_vec();
    test.sort_unstable();
    validation.sort_unstable();
    train.sort_unstable();

    log::debug!(
        "Partitioned {} rows: {} train, {} validation, {} test",
        n,
        train.len(),
        validation.len(),
        test.len()
    );

    Ok(Partition {
        train,
        validation,
        test,
    })
}

fn pick(values: &[f64], indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&i| values[i]).collect()
}

/// Split `values` into `(train, test)`.
pub fn train_test_split<R: Rng + ?Sized>(
    values: &[f64],
    test_fraction: f64,
    rng: &mut R,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let part = partition_indices(values.len(), 0.0, test_fraction, rng)?;
    Ok((pick(values, &part.train), pick(values, &part.test)))
}

/// Split `values` into `(train, validation, test)`.
pub fn train_validation_test_split<R: Rng + ?Sized>(
    values: &[f64],
    validation_fraction: f64,
    test_fraction: f64,
    rng: &mut R,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let part = partition_indices(values.len(), validation_fraction, test_fraction, rng)?;
    Ok((
        pick(values, &part.train),
        pick(values, &part.validation),
        pick(values, &part.test),
    ))
}

/// Split the rows of a dataset into `(train, test)`.
pub fn split_rows<R: Rng + ?Sized>(
    data: &Dataset,
    test_fraction: f64,
    rng: &mut R,
) -> Result<(Dataset, Dataset)> {
    let part = partition_indices(data.n_samples(), 0.0, test_fraction, rng)?;
    Ok((data.select(&part.train), data.select(&part.test)))
}

/// Split the rows of a dataset into `(train, validation, test)`.
pub fn split_rows_three_way<R: Rng + ?Sized>(
    data: &Dataset,
    validation_fraction: f64,
    test_fraction: f64,
    rng: &mut R,
) -> Result<(Dataset, Dataset, Dataset)> {
    let part = partition_indices(data.n_samples(), validation_fraction, test_fraction, rng)?;
    Ok((
        data.select(&part.train),
        data.select(&part.validation),
        data.select(&part.test),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_sets_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let floats = random_float_set(200, -1.0, 1.0, &mut rng).unwrap();
        assert_eq!(floats.len(), 200);
        assert!(floats.iter().all(|&v| (-1.0..1.0).contains(&v)));

        let whole = random_whole_float_set(200, 1, 6, &mut rng).unwrap();
        assert!(whole.iter().all(|&v| v.fract() == 0.0 && (1.0..=6.0).contains(&v)));
    }

    #[test]
    fn empty_ranges_are_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_float_set(3, 1.0, 1.0, &mut rng).is_err());
        assert!(random_whole_float_set(3, 2, 1, &mut rng).is_err());
    }

    #[test]
    fn partition_sizes_and_disjointness() {
        let mut rng = StdRng::seed_from_u64(11);
        let part = partition_indices(10, 0.2, 0.3, &mut rng).unwrap();
        assert_eq!(part.test.len(), 3);
        assert_eq!(part.validation.len(), 2);
        assert_eq!(part.train.len(), 5);

        let mut all: Vec<usize> = part
            .train
            .iter()
            .chain(&part.validation)
            .chain(&part.test)
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_partition() {
        let a = partition_indices(50, 0.1, 0.2, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = partition_indices(50, 0.1, 0.2, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_holdout_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(partition_indices(3, 0.5, 0.5, &mut rng).is_err());
        assert!(partition_indices(3, 0.0, 1.5, &mut rng).is_err());
    }

    #[test]
    fn split_rows_keeps_labels_aligned() {
        let x = Matrix::from_rows((0..8).map(|i| vec![i as f64, 1.0]).collect::<Vec<_>>()).unwrap();
        let y = Matrix::from_rows((0..8).map(|i| vec![10.0 * i as f64]).collect::<Vec<_>>()).unwrap();
        let data = Dataset::new(x, y).unwrap();
        let (train, test) = split_rows(&data, 0.25, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(train.n_samples(), 6);
        assert_eq!(test.n_samples(), 2);
        for part in [&train, &test] {
            for r in 0..part.n_samples() {
                assert_eq!(part.y[(r, 0)], 10.0 * part.x[(r, 0)]);
            }
        }
    }
}
