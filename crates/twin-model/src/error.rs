//! Error types for twin-model.

use thiserror::Error;

/// Errors from artifact I/O, dataset loading, or training.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset parse error: {0}")]
    Parse(String),

    #[error("invalid dataset row: {0}")]
    InvalidRow(#[from] twin_core::CoreError),

    #[error("model artifact error: {0}")]
    Artifact(String),

    #[error("training error: {0}")]
    Training(String),
}

/// Alias for `Result<T, ModelError>`.
pub type ModelResult<T> = Result<T, ModelError>;
