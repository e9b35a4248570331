pub mod delimited;

pub use delimited::{read_matrix, read_matrix_with_config, split_features_labels};
