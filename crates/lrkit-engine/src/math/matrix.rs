use std::fmt;
use std::ops::Index;

use rand::Rng;

use crate::error::{MathError, Result};
use crate::math::vector::Vector;

/// Rectangular matrix of reals, stored row-major.
///
/// The fallible constructors (`from_shape_vec`, `new`, `from_rows`, `reshape`)
/// require at least one row. A zero-row matrix only arises as an empty row
/// selection, such as a hold-out set of size zero, or from a factory called
/// with `rows == 0`, and it keeps its column count.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 {
            return Err(MathError::EmptyMatrix);
        }
        if data.len() != rows * cols {
            return Err(MathError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Build a matrix from explicit rows. Every row must have the length of the first.
    pub fn from_rows<R>(rows: Vec<R>) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let Some(first) = rows.first() else {
            return Err(MathError::EmptyMatrix);
        };
        let cols = first.as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MathError::RaggedRows {
                    row: idx,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Single-column matrix holding the vector's elements top to bottom.
    pub fn column_from(vector: &Vector) -> Self {
        Self {
            data: vector.to_vec(),
            rows: vector.len(),
            cols: 1,
        }
    }

    /// Single-row matrix holding the vector's elements left to right.
    pub fn row_from(vector: &Vector) -> Self {
        Self {
            data: vector.to_vec(),
            rows: 1,
            cols: vector.len(),
        }
    }

    pub fn from_elem(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, 1.0)
    }

    /// `size`×`size` matrix with ones on the diagonal.
    pub fn identity(size: usize) -> Self {
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            data[i * size + i] = 1.0;
        }
        Self {
            data,
            rows: size,
            cols: size,
        }
    }

    /// Filled with 1, 2, 3, ... in row-major order.
    pub fn sequence(rows: usize, cols: usize) -> Self {
        Self {
            data: (1..=rows * cols).map(|v| v as f64).collect(),
            rows,
            cols,
        }
    }

    /// Uniform draws in `[0, 1)` from the caller's generator.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        Self {
            data: (0..rows * cols).map(|_| rng.gen::<f64>()).collect(),
            rows,
            cols,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| self.row_slice(r))
    }

    pub fn row(&self, row: usize) -> Vector {
        Vector::from_vec(self.row_slice(row).to_vec())
    }

    /// Column `col` (0-based), or `None` past the last column.
    pub fn column(&self, col: usize) -> Option<Vector> {
        if col >= self.cols {
            return None;
        }
        Some((0..self.rows).map(|row| self[(row, col)]).collect())
    }

    pub fn select_rows(&self, indices: &[usize]) -> Matrix {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &row in indices {
            data.extend_from_slice(self.row_slice(row));
        }
        Matrix {
            data,
            rows: indices.len(),
            cols: self.cols,
        }
    }

    /// Extract columns `from..=to`, both 1-based.
    pub fn columns(&self, from: usize, to: usize) -> Result<Matrix> {
        if from == 0 || from > to || to > self.cols {
            return Err(MathError::ColumnRange {
                from,
                to,
                cols: self.cols,
            });
        }

        let new_cols = to - from + 1;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for row in self.rows_iter() {
            data.extend_from_slice(&row[from - 1..to]);
        }

        Ok(Matrix {
            data,
            rows: self.rows,
            cols: new_cols,
        })
    }

    /// Plain rows/cols swap; the result is always a matrix.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)]);
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Flatten in row-major order.
    pub fn unroll(&self) -> Vector {
        Vector::from_vec(self.data.clone())
    }

    /// Inverse of [`Matrix::unroll`].
    pub fn reshape(vector: &Vector, rows: usize, cols: usize) -> Result<Matrix> {
        Matrix::from_shape_vec((rows, cols), vector.to_vec())
    }

    pub fn mapv<F>(&self, f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().copied().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Same-shape positionwise combination; callers validate the shapes.
    pub(crate) fn zip_map<F>(&self, other: &Matrix, mut f: F) -> Matrix
    where
        F: FnMut(f64, f64) -> f64,
    {
        debug_assert_eq!(self.shape(), other.shape());
        Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Apply `f(element, vector[col])` to every element; callers check `vector.len() == cols`.
    pub(crate) fn map_rows_with<F>(&self, vector: &Vector, mut f: F) -> Matrix
    where
        F: FnMut(f64, f64) -> f64,
    {
        debug_assert_eq!(self.cols, vector.len());
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.rows_iter() {
            data.extend(row.iter().zip(vector.iter()).map(|(&m, &v)| f(m, v)));
        }
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows_iter().map(|r| r.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, row) in self.rows_iter().enumerate() {
            write!(f, "{}", Vector::from_vec(row.to_vec()))?;
            if idx + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MathError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        let rows: Vec<Vec<f64>> = vec![];
        assert_eq!(Matrix::from_rows(rows).unwrap_err(), MathError::EmptyMatrix);
    }

    #[test]
    fn shaped_constructors_need_a_row() {
        assert_eq!(Matrix::from_shape_vec((0, 4), vec![]).unwrap_err(), MathError::EmptyMatrix);
        assert_eq!(Matrix::new(0, 0, vec![]).unwrap_err(), MathError::EmptyMatrix);
        assert_eq!(
            Matrix::reshape(&Vector::from_vec(vec![]), 0, 4).unwrap_err(),
            MathError::EmptyMatrix
        );
    }

    #[test]
    fn empty_row_selection_keeps_width() {
        let m = Matrix::sequence(3, 2);
        let empty = m.select_rows(&[]);
        assert_eq!(empty.shape(), (0, 2));
        assert_eq!(empty.sum(), 0.0);
    }

    #[test]
    fn column_out_of_range_is_none() {
        let m = Matrix::sequence(2, 3);
        assert_eq!(m.column(1).unwrap().to_vec(), vec![2.0, 5.0]);
        assert!(m.column(3).is_none());
    }

    #[test]
    fn sequence_is_row_major() {
        let m = Matrix::sequence(2, 3);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn random_is_reproducible_with_a_seed() {
        let a = Matrix::random(3, 4, &mut StdRng::seed_from_u64(7));
        let b = Matrix::random(3, 4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.as_slice().iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn columns_uses_one_based_inclusive_bounds() {
        let m = Matrix::sequence(2, 4);
        let sub = m.columns(2, 3).unwrap();
        assert_eq!(sub.to_rows(), vec![vec![2.0, 3.0], vec![6.0, 7.0]]);
        assert!(m.columns(0, 2).is_err());
        assert!(m.columns(3, 2).is_err());
        assert!(m.columns(1, 5).is_err());
    }
}
