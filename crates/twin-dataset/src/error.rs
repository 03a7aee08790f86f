//! Error types for twin-dataset.

use thiserror::Error;

/// Errors that can occur when writing the generated dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, DatasetError>`.
pub type DatasetResult<T> = Result<T, DatasetError>;
