//! lrkit-cli: command-line front end for the lrkit engine.
//!
//! `fit` trains a linear regression model on a delimited data file and
//! `describe` prints per-column summary statistics.
pub mod describe;
pub mod fit;
pub mod util;
