//! Binary classification metrics from a 2×2 confusion table.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};

/// Counts of predicted-by-actual outcomes.
///
/// Laid out as `[[P1A1, P1A0], [P0A1, P0A0]]`: the first index is the
/// prediction, the second the actual label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionTable {
    pub p1a1: u64,
    pub p1a0: u64,
    pub p0a1: u64,
    pub p0a0: u64,
}

impl ConfusionTable {
    pub fn new(p1a1: u64, p1a0: u64, p0a1: u64, p0a0: u64) -> Self {
        Self {
            p1a1,
            p1a0,
            p0a1,
            p0a0,
        }
    }

    pub fn from_counts(table: [[u64; 2]; 2]) -> Self {
        Self::new(table[0][0], table[0][1], table[1][0], table[1][1])
    }

    /// Tally scores against actual labels. A score `>= threshold` counts as a
    /// positive prediction and an actual label `>= 0.5` as a positive outcome.
    pub fn tally(scores: &[f64], actual: &[f64], threshold: f64) -> Result<Self> {
        if scores.len() != actual.len() {
            return Err(MathError::invalid(format!(
                "tally: {} scores but {} labels",
                scores.len(),
                actual.len()
            )));
        }
        let mut table = ConfusionTable::default();
        for (&score, &label) in scores.iter().zip(actual) {
            match (score >= threshold, label >= 0.5) {
                (true, true) => table.p1a1 += 1,
                (true, false) => table.p1a0 += 1,
                (false, true) => table.p0a1 += 1,
                (false, false) => table.p0a0 += 1,
            }
        }
        Ok(table)
    }

    pub fn total(&self) -> u64 {
        self.p1a1 + self.p1a0 + self.p0a1 + self.p0a0
    }
}

fn ratio(op: &'static str, num: u64, den: u64) -> Result<f64> {
    if den == 0 {
        return Err(MathError::DivisionByZero { op });
    }
    Ok(num as f64 / den as f64)
}

/// `(P1A1 + P0A0) / total`
pub fn accuracy(table: &ConfusionTable) -> Result<f64> {
    ratio("accuracy", table.p1a1 + table.p0a0, table.total())
}

/// `P1A1 / (P1A1 + P1A0)`
pub fn precision(table: &ConfusionTable) -> Result<f64> {
    ratio("precision", table.p1a1, table.p1a1 + table.p1a0)
}

/// `P1A1 / (P1A1 + P0A1)`
pub fn recall(table: &ConfusionTable) -> Result<f64> {
    ratio("recall", table.p1a1, table.p1a1 + table.p0a1)
}

/// Harmonic mean of precision and recall.
pub fn f1_score(table: &ConfusionTable) -> Result<f64> {
    let p = precision(table)?;
    let r = recall(table)?;
    if p + r == 0.0 {
        return Err(MathError::DivisionByZero { op: "f1_score" });
    }
    Ok(2.0 * p * r / (p + r))
}
