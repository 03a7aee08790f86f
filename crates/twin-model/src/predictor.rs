//! The `Predictor` trait — the main extension point for classifier code.

use twin_core::{FeatureVector, IrrigationDecision};

/// A pluggable binary irrigation classifier.
///
/// Implement this trait to supply the decision the engine applies each step.
/// The engine makes no assumption about the implementation's internals, only
/// that it is a pure, deterministic function from the fixed-order 4-feature
/// vector to a binary decision: rule-based, learned, or stubbed for tests
/// all satisfy the contract equally.
///
/// # Thread safety
///
/// The request-handling layer may hold a predictor behind a shared handle,
/// so implementations must be `Send + Sync`.  Prediction takes `&self`;
/// a predictor has no mutable state.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysIrrigate;
///
/// impl Predictor for AlwaysIrrigate {
///     fn predict(&self, _features: &FeatureVector) -> IrrigationDecision {
///         IrrigationDecision::Irrigate
///     }
/// }
/// ```
pub trait Predictor: Send + Sync + 'static {
    /// Classify one feature vector.
    fn predict(&self, features: &FeatureVector) -> IrrigationDecision;
}
