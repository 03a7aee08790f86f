//! Unit tests for the simulation state machine.

use std::sync::{Arc, Mutex};

use twin_core::{temperature_at, FeatureVector, Hour, IrrigationDecision};
use twin_model::{Predictor, ThresholdPredictor};

use crate::state::{
    DAY_EVAPORATION_RATE, IRRIGATION_AMOUNT, NIGHT_EVAPORATION_RATE, TEMP_BASELINE_C,
    TEMP_INFLUENCE,
};
use crate::{EngineError, SimulationEngine, SimulationState};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A predictor that irrigates every hour (any moisture beats +∞).
fn always() -> Box<dyn Predictor> {
    Box::new(ThresholdPredictor::new(f64::INFINITY))
}

/// A predictor that never irrigates.
fn never() -> Box<dyn Predictor> {
    Box::new(ThresholdPredictor::new(f64::NEG_INFINITY))
}

/// Records every feature vector it is shown; always holds.
#[derive(Clone, Default)]
struct SpyPredictor {
    seen: Arc<Mutex<Vec<FeatureVector>>>,
}

impl Predictor for SpyPredictor {
    fn predict(&self, features: &FeatureVector) -> IrrigationDecision {
        self.seen.lock().unwrap().push(*features);
        IrrigationDecision::Hold
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn step_without_predictor_fails_loudly() {
        let mut engine = SimulationEngine::without_predictor();
        assert!(!engine.predictor_loaded());
        assert!(matches!(
            engine.step(),
            Err(EngineError::PredictorUnavailable)
        ));
        // The failed step must not mutate state.
        assert_eq!(engine.state, SimulationState::default());
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent() {
        let mut engine = SimulationEngine::new(never());
        for _ in 0..5 {
            engine.step().unwrap();
        }
        assert_ne!(engine.state, SimulationState::default());

        engine.reset();
        let once = engine.state;
        engine.reset();
        assert_eq!(engine.state, once);
        assert_eq!(once, SimulationState::default());
    }
}

// ── Time model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod time_model {
    use super::*;

    #[test]
    fn reported_hours_run_0_through_23_then_wrap() {
        let mut engine = SimulationEngine::new(never());
        let hours: Vec<u8> = (0..24).map(|_| engine.step().unwrap().hour).collect();
        assert_eq!(hours, (0..24u8).collect::<Vec<_>>());
        assert_eq!(engine.state.hour, Hour::MIDNIGHT);
    }

    #[test]
    fn result_hour_is_pre_advance() {
        let mut engine = SimulationEngine::new(never());
        let result = engine.step().unwrap();
        assert_eq!(result.hour, 0);
        assert_eq!(engine.state.hour, Hour::new(1));
    }
}

// ── Physics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod physics {
    use super::*;

    fn round2(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }

    #[test]
    fn moisture_stays_clamped_under_any_step_sequence() {
        for predictor in [always(), never()] {
            let mut engine = SimulationEngine::new(predictor);
            for _ in 0..500 {
                let result = engine.step().unwrap();
                assert!((0.0..=100.0).contains(&result.soil_moisture), "{result:?}");
                assert!((0.0..=100.0).contains(&engine.state.current_moisture));
            }
        }
    }

    #[test]
    fn dry_plot_bottoms_out_at_zero() {
        let mut engine = SimulationEngine::new(never());
        for _ in 0..200 {
            engine.step().unwrap();
        }
        assert_eq!(engine.state.current_moisture, 0.0);
    }

    #[test]
    fn daytime_evaporation_step_matches_formula() {
        let mut engine = SimulationEngine::new(never());
        engine.state.hour = Hour::new(10);

        let temperature = temperature_at(Hour::new(10));
        let expected =
            80.0 - (DAY_EVAPORATION_RATE + (temperature - TEMP_BASELINE_C) * TEMP_INFLUENCE);

        let result = engine.step().unwrap();
        assert_eq!(result.soil_moisture, round2(expected));
        assert_eq!(result.temperature, round2(temperature));
        assert!(!result.irrigation_on);
        // Internal state keeps full precision; only the report is rounded.
        assert_eq!(engine.state.current_moisture, expected);
    }

    #[test]
    fn irrigation_event_from_low_moisture() {
        let mut engine = SimulationEngine::new(always());
        engine.state.current_moisture = 20.0;
        engine.state.previous_moisture = 20.0;

        let temperature = temperature_at(Hour::MIDNIGHT);
        let expected = (20.0 + IRRIGATION_AMOUNT)
            - (NIGHT_EVAPORATION_RATE + (temperature - TEMP_BASELINE_C) * TEMP_INFLUENCE);

        let result = engine.step().unwrap();
        assert!(result.irrigation_on);
        assert_eq!(result.soil_moisture, round2(expected));
    }

    #[test]
    fn transient_overshoot_loses_to_evaporation_then_clamps() {
        // 95 + 50 = 145 transiently; evaporation applies to the unclamped
        // value before the single final clamp to 100.
        let mut engine = SimulationEngine::new(always());
        engine.state.hour = Hour::new(12);
        engine.state.current_moisture = 95.0;
        engine.state.previous_moisture = 95.0;

        let result = engine.step().unwrap();
        assert_eq!(result.soil_moisture, 100.0);
        assert_eq!(engine.state.current_moisture, 100.0);
    }
}

// ── Predictor contract ────────────────────────────────────────────────────────

#[cfg(test)]
mod predictor_contract {
    use super::*;

    #[test]
    fn derivative_feature_reflects_one_step_of_history() {
        let spy = SpyPredictor::default();
        let mut engine = SimulationEngine::new(Box::new(spy.clone()));

        engine.step().unwrap();
        engine.step().unwrap();

        let seen = spy.seen.lock().unwrap();
        assert_eq!(seen[0].moisture_change_last_hour, 0.0);
        assert_eq!(seen[0].soil_moisture, 80.0);

        // After a held midnight step the plot lost 0.5 + temp_effect(0).
        let t0 = temperature_at(Hour::MIDNIGHT);
        let m1 = 80.0 - (NIGHT_EVAPORATION_RATE + (t0 - TEMP_BASELINE_C) * TEMP_INFLUENCE);
        assert_eq!(seen[1].soil_moisture, m1);
        assert_eq!(seen[1].moisture_change_last_hour, m1 - 80.0);
    }

    #[test]
    fn features_arrive_in_contract_order() {
        let spy = SpyPredictor::default();
        let mut engine = SimulationEngine::new(Box::new(spy.clone()));
        engine.state.hour = Hour::new(7);

        engine.step().unwrap();

        let seen = spy.seen.lock().unwrap();
        let expected = [7.0, temperature_at(Hour::new(7)), 80.0, 0.0];
        assert_eq!(seen[0].to_array(), expected);
    }

    #[test]
    fn fixed_predictor_and_call_sequence_is_deterministic() {
        let run = || {
            let mut engine = SimulationEngine::new(Box::new(ThresholdPredictor::default()));
            (0..100).map(|_| engine.step().unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
