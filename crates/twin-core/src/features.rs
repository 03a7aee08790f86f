//! Predictor input and output types.
//!
//! The predictor contract is a fixed-order 4-feature vector in, one binary
//! label out.  The order here is load-bearing: the trained artifact's
//! weights are positional, so engine, dataset generator, and trainer must
//! all agree on it.

/// The fixed-order feature tuple consumed by any predictor.
///
/// Field order is the wire order: `(hour, temperature, soil_moisture,
/// moisture_change_last_hour)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureVector {
    /// Wall-clock hour of day, `0.0..=23.0`.
    pub hour: f64,
    /// Air temperature in °C at that hour.
    pub temperature: f64,
    /// Soil moisture percentage *before* this step's update.
    pub soil_moisture: f64,
    /// First difference of soil moisture over the previous hour.
    pub moisture_change_last_hour: f64,
}

impl FeatureVector {
    /// Number of features in the contract.
    pub const LEN: usize = 4;

    /// The features in contract order, for positional (weight-indexed) use.
    #[inline]
    pub fn to_array(self) -> [f64; Self::LEN] {
        [
            self.hour,
            self.temperature,
            self.soil_moisture,
            self.moisture_change_last_hour,
        ]
    }
}

/// A binary irrigation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IrrigationDecision {
    /// Leave the valve closed this hour.
    Hold,
    /// Open the valve — adds the fixed irrigation amount this hour.
    Irrigate,
}

impl IrrigationDecision {
    /// `true` iff the decision is [`Irrigate`][IrrigationDecision::Irrigate].
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, IrrigationDecision::Irrigate)
    }

    /// The `{0, 1}` class label used in training data.
    #[inline]
    pub fn label(self) -> u8 {
        match self {
            IrrigationDecision::Hold => 0,
            IrrigationDecision::Irrigate => 1,
        }
    }

    /// Decode a `{0, 1}` class label; any nonzero value means irrigate.
    #[inline]
    pub fn from_label(label: u8) -> IrrigationDecision {
        if label == 0 {
            IrrigationDecision::Hold
        } else {
            IrrigationDecision::Irrigate
        }
    }
}
