//! The `SimulationEngine` and its step loop.

use twin_core::{temperature_at, FeatureVector};
use twin_model::Predictor;

use crate::state::{apply_hourly_update, SimulationState};
use crate::{EngineError, EngineResult};

/// The environmental state reported after one step.
///
/// `hour` is the hour the step simulated (observed *before* advancing);
/// `temperature` and `soil_moisture` are rounded to 2 decimals at this
/// presentation boundary only — internal state keeps full precision so
/// rounding error never compounds across steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepResult {
    pub hour: u8,
    pub temperature: f64,
    pub soil_moisture: f64,
    pub irrigation_on: bool,
}

/// The single-plot simulation runner.
///
/// Owns all mutable state and the injected predictor.  Single writer:
/// callers must serialize `step`/`reset` invocations — one engine, one
/// logical client at a time.  Each step is atomic (pure arithmetic plus
/// one predictor call) and always runs to completion.
pub struct SimulationEngine {
    /// The persistent plot state.  Public for inspection; external code
    /// must not mutate it between steps.
    pub state: SimulationState,

    /// The decision source.  `None` when the trained artifact failed to
    /// load — every `step` then fails loudly rather than defaulting,
    /// because a silent default would corrupt the irrigation semantics
    /// the whole system exists to compute.
    predictor: Option<Box<dyn Predictor>>,
}

impl SimulationEngine {
    /// Construct an engine with the given predictor and default state.
    pub fn new(predictor: Box<dyn Predictor>) -> Self {
        Self {
            state: SimulationState::default(),
            predictor: Some(predictor),
        }
    }

    /// Construct a degraded engine with no predictor.
    ///
    /// The process may start in this mode when the artifact is missing;
    /// every `step` fails with [`EngineError::PredictorUnavailable`] until
    /// the artifact is re-provisioned and the engine rebuilt.
    pub fn without_predictor() -> Self {
        Self {
            state: SimulationState::default(),
            predictor: None,
        }
    }

    /// `true` when a predictor is attached and `step` can run.
    pub fn predictor_loaded(&self) -> bool {
        self.predictor.is_some()
    }

    /// Unconditionally restore the default state (hour 0, both moisture
    /// fields 80.0).  Idempotent; never fails.
    pub fn reset(&mut self) {
        self.state = SimulationState::default();
    }

    /// Advance the simulation by exactly one hour.
    pub fn step(&mut self) -> EngineResult<StepResult> {
        let predictor = self
            .predictor
            .as_deref()
            .ok_or(EngineError::PredictorUnavailable)?;

        // ── Phase 1: derive features from the pre-step state ──────────────
        let hour = self.state.hour;
        let temperature = temperature_at(hour);
        let features = FeatureVector {
            hour: f64::from(hour.value()),
            temperature,
            soil_moisture: self.state.current_moisture,
            moisture_change_last_hour: self.state.moisture_delta(),
        };

        // ── Phase 2: predict ──────────────────────────────────────────────
        let decision = predictor.predict(&features);

        // ── Phase 3: physics ──────────────────────────────────────────────
        //
        // Snapshot the pre-mutation moisture first; it becomes the
        // "previous" value for the next step's derivative feature.
        let next_previous_moisture = self.state.current_moisture;
        self.state.current_moisture = apply_hourly_update(
            self.state.current_moisture,
            hour,
            temperature,
            decision,
        );
        self.state.previous_moisture = next_previous_moisture;

        // ── Phase 4: report, then advance the clock ───────────────────────
        let result = StepResult {
            hour: hour.value(),
            temperature: round2(temperature),
            soil_moisture: round2(self.state.current_moisture),
            irrigation_on: decision.is_on(),
        };
        self.state.hour = hour.next();

        Ok(result)
    }
}

/// Round to 2 decimals for the outward-facing record.
#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
