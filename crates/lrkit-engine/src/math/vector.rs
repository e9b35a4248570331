use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

/// Ordered, fixed-length sequence of reals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self::new(data)
    }

    pub fn from_elem(len: usize, value: f64) -> Self {
        Vector::from_vec(vec![value; len])
    }

    pub fn zeros(len: usize) -> Self {
        Vector::from_elem(len, 0.0)
    }

    pub fn ones(len: usize) -> Self {
        Vector::from_elem(len, 1.0)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    pub fn mapv<F>(&self, f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        Vector::from_vec(self.data.iter().copied().map(f).collect())
    }

    /// Combine two equal-length vectors position by position.
    ///
    /// Callers check lengths first; the kernels are the only users.
    pub(crate) fn zip_map<F>(&self, other: &Vector, mut f: F) -> Vector
    where
        F: FnMut(f64, f64) -> f64,
    {
        debug_assert_eq!(self.len(), other.len());
        self.iter().zip(other.iter()).map(|(&a, &b)| f(a, b)).collect()
    }

    pub fn select(&self, indices: &[usize]) -> Vector {
        indices.iter().map(|&idx| self.data[idx]).collect()
    }

    pub fn dot(&self, other: &Vector) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }
        Some(dot_slices(self.as_slice(), other.as_slice()))
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }
}

pub(crate) fn dot_slices(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::from_vec(value)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(value: [f64; N]) -> Self {
        Vector::from_vec(value.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
