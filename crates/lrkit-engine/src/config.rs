use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Hyper-parameters of the batch gradient-descent solver.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Step size α.
    pub learning_rate: f64,
    /// Upper bound on iterations before the solver reports `Exhausted`.
    pub max_iterations: usize,
}

impl SolverConfig {
    pub fn new(learning_rate: f64, max_iterations: usize) -> Self {
        Self {
            learning_rate,
            max_iterations,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_iterations: 1500,
        }
    }
}

/// Column delimiter of a numeric data file.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Tab for `.tsv` files, comma otherwise.
    #[default]
    Auto,
    Comma,
    Tab,
    Semicolon,
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Delimiter::Auto),
            "comma" | "," => Ok(Delimiter::Comma),
            "tab" | "\t" => Ok(Delimiter::Tab),
            "semicolon" | ";" => Ok(Delimiter::Semicolon),
            _ => Err(format!(
                "Unknown delimiter: {}. Expected one of auto, comma, tab, semicolon",
                s
            )),
        }
    }
}

/// Options for reading a delimited numeric file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LoaderConfig {
    pub delimiter: Delimiter,
    /// Skip the first non-blank line.
    pub has_header: bool,
}
