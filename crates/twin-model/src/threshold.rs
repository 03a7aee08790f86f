//! The fixed-threshold ground-truth rule.

use twin_core::{FeatureVector, IrrigationDecision};

use crate::Predictor;

/// Default moisture percentage below which the rule irrigates.
pub const DEFAULT_THRESHOLD: f64 = 35.0;

/// A [`Predictor`] that irrigates iff soil moisture is below a fixed
/// threshold.
///
/// This is the rule the dataset generator uses to label training rows; the
/// trained artifact exists to reproduce it from the full feature vector.
/// It also serves as a deterministic stand-in wherever a predictor is
/// needed without a trained artifact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPredictor {
    /// Irrigate when `soil_moisture` is strictly below this value.
    pub threshold: f64,
}

impl ThresholdPredictor {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for ThresholdPredictor {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Predictor for ThresholdPredictor {
    fn predict(&self, features: &FeatureVector) -> IrrigationDecision {
        if features.soil_moisture < self.threshold {
            IrrigationDecision::Irrigate
        } else {
            IrrigationDecision::Hold
        }
    }
}
