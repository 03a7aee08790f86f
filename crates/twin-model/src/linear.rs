//! The trainable linear classifier and its persisted artifact.
//!
//! # Artifact format
//!
//! A single JSON object holding per-feature standardization statistics and
//! the learned hyperplane:
//!
//! ```json
//! {
//!   "means":   [11.5, 18.0, 47.3, -0.8],
//!   "stds":    [6.9, 7.1, 19.2, 7.4],
//!   "weights": [0.01, -0.02, -4.1, -0.3],
//!   "bias":    -2.7
//! }
//! ```
//!
//! Standardization is part of the persisted contract: `predict` first maps
//! each feature to `(x − mean) / std`, then takes the sign of the linear
//! decision value.  Keeping the statistics inside the artifact means the
//! serving side needs no access to the training data.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use twin_core::{FeatureVector, IrrigationDecision};

use crate::{ModelError, ModelResult, Predictor};

/// A standardized linear classifier over the 4-feature contract.
///
/// Produced by [`training::fit`][crate::training::fit] and persisted as a
/// JSON artifact; loaded once at server start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Per-feature training means, contract order.
    pub means: [f64; FeatureVector::LEN],
    /// Per-feature training standard deviations, contract order.  Always
    /// strictly positive (constant features are stored with std 1.0).
    pub stds: [f64; FeatureVector::LEN],
    /// Hyperplane weights in standardized feature space.
    pub weights: [f64; FeatureVector::LEN],
    /// Hyperplane intercept.
    pub bias: f64,
}

impl LinearModel {
    /// The signed distance-like decision value; `>= 0` means irrigate.
    pub fn decision_value(&self, features: &FeatureVector) -> f64 {
        let x = features.to_array();
        let mut z = self.bias;
        for i in 0..FeatureVector::LEN {
            z += self.weights[i] * (x[i] - self.means[i]) / self.stds[i];
        }
        z
    }

    /// Load an artifact from a JSON file and validate it.
    pub fn load(path: &Path) -> ModelResult<Self> {
        let file = File::open(path)?;
        let model: LinearModel = serde_json::from_reader(BufReader::new(file))?;
        model.validate()?;
        Ok(model)
    }

    /// Write the artifact as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> ModelResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Reject artifacts that would produce NaN decisions.
    fn validate(&self) -> ModelResult<()> {
        let all = self
            .means
            .iter()
            .chain(&self.stds)
            .chain(&self.weights)
            .chain(std::iter::once(&self.bias));
        for v in all {
            if !v.is_finite() {
                return Err(ModelError::Artifact("non-finite parameter".into()));
            }
        }
        if self.stds.iter().any(|&s| s <= 0.0) {
            return Err(ModelError::Artifact("non-positive feature std".into()));
        }
        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> IrrigationDecision {
        if self.decision_value(features) >= 0.0 {
            IrrigationDecision::Irrigate
        } else {
            IrrigationDecision::Hold
        }
    }
}
