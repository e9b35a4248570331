use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use lrkit_engine::config::{LoaderConfig, SolverConfig};

use crate::util::validate_data_file;

/// Parameters of an `lrkit fit` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    pub data: String,
    /// 0-based column holding the labels; the last column when unset.
    pub label_column: Option<usize>,
    /// Share of rows held out for evaluation.
    pub test_fraction: f64,
    /// Standardize features with statistics from the training rows.
    pub scale: bool,
    /// RNG seed for the train/test split; drawn from entropy when unset.
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub solver: SolverConfig,
    pub loader: LoaderConfig,
}

impl Default for FitConfig {
    fn default() -> Self {
        FitConfig {
            data: String::new(),
            label_column: None,
            test_fraction: 0.2,
            scale: false,
            seed: None,
            output: None,
            solver: SolverConfig::default(),
            loader: LoaderConfig::default(),
        }
    }
}

/// Load a fit configuration from a JSON file.
pub fn load_fit_config<P: AsRef<Path>>(path: P) -> Result<FitConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
    let config: FitConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
    Ok(config)
}

impl FitConfig {
    /// Start from the config file (or defaults) and apply CLI overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => load_fit_config(path)?,
            None => FitConfig::default(),
        };

        if let Some(data) = matches.get_one::<String>("data") {
            config.data = data.clone();
        }
        if let Some(label_column) = matches.get_one::<usize>("label_column") {
            config.label_column = Some(*label_column);
        }
        if let Some(alpha) = matches.get_one::<f64>("alpha") {
            config.solver.learning_rate = *alpha;
        }
        if let Some(iterations) = matches.get_one::<usize>("iterations") {
            config.solver.max_iterations = *iterations;
        }
        if let Some(seed) = matches.get_one::<u64>("seed") {
            config.seed = Some(*seed);
        }
        if let Some(test_fraction) = matches.get_one::<f64>("test_fraction") {
            config.test_fraction = *test_fraction;
        }
        if let Some(delimiter) = matches.get_one::<String>("delimiter") {
            config.loader.delimiter = delimiter.parse().map_err(anyhow::Error::msg)?;
        }
        if matches.get_flag("scale") {
            config.scale = true;
        }
        if matches.get_flag("header") {
            config.loader.has_header = true;
        }
        if let Some(output) = matches.get_one::<String>("output") {
            config.output = Some(output.clone());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.data.is_empty() {
            anyhow::bail!("No data file given");
        }
        validate_data_file(&self.data, self.loader.delimiter)?;
        if !(0.0..1.0).contains(&self.test_fraction) {
            anyhow::bail!("test_fraction must be in [0, 1), got {}", self.test_fraction);
        }
        if !(self.solver.learning_rate > 0.0 && self.solver.learning_rate.is_finite()) {
            anyhow::bail!(
                "learning_rate must be a positive number, got {}",
                self.solver.learning_rate
            );
        }
        Ok(())
    }
}
