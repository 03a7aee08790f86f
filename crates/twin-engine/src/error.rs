//! Error types for twin-engine.

use thiserror::Error;

/// Errors surfaced by [`SimulationEngine`][crate::SimulationEngine].
#[derive(Debug, Error)]
pub enum EngineError {
    /// A step was attempted while no predictor is attached.  Never
    /// substituted with a default decision — the caller must re-provision
    /// the artifact before retrying.
    #[error("predictor unavailable: no trained artifact is loaded")]
    PredictorUnavailable,
}

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;
