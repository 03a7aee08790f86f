//! Shared error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.

use thiserror::Error;

/// The error type for `twin-core` validation failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("hour {0} out of range 0..24")]
    HourOutOfRange(u8),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `twin-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
