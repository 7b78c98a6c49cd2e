use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while reading the store dataset.
///
/// A malformed row aborts the whole load; rows are never skipped.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read store dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("store dataset row {row} ({name}) has a non-finite coordinate")]
    NonFiniteCoordinate { row: usize, name: String },

    #[error("store dataset contains no stores")]
    Empty,
}
