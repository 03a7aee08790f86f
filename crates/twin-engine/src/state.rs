//! Plot state and physical update rules.
//!
//! The same update functions serve the online engine and the offline
//! dataset generator — training-time and inference-time physics cannot
//! drift apart because there is only one implementation.

use twin_core::{Hour, IrrigationDecision};

// ── Physical constants ────────────────────────────────────────────────────────

/// Soil moisture percentage at engine construction and after `reset`.
pub const DEFAULT_MOISTURE: f64 = 80.0;

/// Moisture added by one irrigation event.
pub const IRRIGATION_AMOUNT: f64 = 50.0;

/// Hourly moisture loss during daytime hours `[6, 18)`.
pub const DAY_EVAPORATION_RATE: f64 = 1.5;

/// Hourly moisture loss during nighttime hours.
pub const NIGHT_EVAPORATION_RATE: f64 = 0.5;

/// Temperature above which evaporation accelerates, °C.
pub const TEMP_BASELINE_C: f64 = 23.0;

/// Extra moisture loss per °C of deviation from the baseline.
pub const TEMP_INFLUENCE: f64 = 0.05;

/// Moisture bounds enforced by the final clamp.
pub const MOISTURE_MIN: f64 = 0.0;
pub const MOISTURE_MAX: f64 = 100.0;

// ── Update rules ──────────────────────────────────────────────────────────────

/// Evaporation rate for the given (pre-advance) hour.
#[inline]
pub fn evaporation_rate(hour: Hour) -> f64 {
    if hour.is_daytime() {
        DAY_EVAPORATION_RATE
    } else {
        NIGHT_EVAPORATION_RATE
    }
}

/// Additional moisture loss from the temperature's deviation above the
/// baseline.  Negative below 23 °C — cool hours slow the loss.
#[inline]
pub fn temperature_effect(temperature: f64) -> f64 {
    (temperature - TEMP_BASELINE_C) * TEMP_INFLUENCE
}

/// Apply one hour of plot physics to a moisture value.
///
/// Order of operations is load-bearing: irrigation is added with **no**
/// intermediate clamp, so moisture can transiently exceed 100 and lose
/// extra water to evaporation before the single final clamp.  Reordering
/// changes simulated outcomes.
pub fn apply_hourly_update(
    moisture: f64,
    hour: Hour,
    temperature: f64,
    decision: IrrigationDecision,
) -> f64 {
    let mut m = moisture;
    if decision.is_on() {
        m += IRRIGATION_AMOUNT;
    }
    m -= evaporation_rate(hour) + temperature_effect(temperature);
    m.clamp(MOISTURE_MIN, MOISTURE_MAX)
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// The engine's only persistent entity.
///
/// Invariants: both moisture fields stay in `[0, 100]` (enforced by the
/// final clamp of every update) and `hour` stays in `[0, 23]` (by the
/// `Hour` type).  Mutated exactly once per step; owned exclusively by one
/// [`SimulationEngine`][crate::SimulationEngine].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    /// Wall-clock-of-day cursor; wraps modulo 24 after each step.
    pub hour: Hour,

    /// Soil moisture percentage at the start of the next step.
    pub current_moisture: f64,

    /// Moisture at the *start* of the prior step — used only for the
    /// derivative feature.
    pub previous_moisture: f64,
}

impl SimulationState {
    /// First difference of moisture over the last hour, computed from the
    /// values as they stood before the current step's mutation.
    #[inline]
    pub fn moisture_delta(&self) -> f64 {
        self.current_moisture - self.previous_moisture
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            hour: Hour::MIDNIGHT,
            current_moisture: DEFAULT_MOISTURE,
            previous_moisture: DEFAULT_MOISTURE,
        }
    }
}
