//! The ground-truth time-series generator.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use twin_core::{temperature_at, FeatureVector, Hour};
use twin_engine::state::apply_hourly_update;
use twin_model::{Predictor, ThresholdPredictor};

use crate::DatasetRow;

/// Parameters for one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Days to simulate (24 rows each).  Default: 5 years.
    pub num_days: u32,
    /// Moisture at the start of the series.
    pub start_moisture: f64,
    /// Ground-truth rule: irrigate when moisture drops below this.
    pub irrigation_threshold: f64,
    /// Calendar date of the first row (hour 0).
    pub start_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_days: 1825,
            start_moisture: 80.0,
            irrigation_threshold: twin_model::threshold::DEFAULT_THRESHOLD,
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).expect("static date"),
        }
    }
}

/// Generate the full labeled series: `num_days × 24` rows.
///
/// Decisions come from the threshold rule applied to the same feature
/// vector the online predictor sees; physics come from
/// [`twin_engine::state`], so training-time semantics match inference
/// time by construction.
pub fn generate(config: &GeneratorConfig) -> Vec<DatasetRow> {
    let rule = ThresholdPredictor::new(config.irrigation_threshold);
    let start: NaiveDateTime = config.start_date.and_time(NaiveTime::MIN);

    let mut rows = Vec::with_capacity(config.num_days as usize * 24);
    let mut moisture = config.start_moisture;
    let mut previous_recorded: Option<f64> = None;

    for elapsed_hours in 0..u64::from(config.num_days) * 24 {
        let hour = Hour::new((elapsed_hours % 24) as u8);
        let temperature = temperature_at(hour);
        let delta = previous_recorded.map_or(0.0, |prev| moisture - prev);

        let features = FeatureVector {
            hour: f64::from(hour.value()),
            temperature,
            soil_moisture: moisture,
            moisture_change_last_hour: delta,
        };
        let decision = rule.predict(&features);

        rows.push(DatasetRow {
            timestamp: start + Duration::hours(elapsed_hours as i64),
            hour_of_day: hour.value(),
            temperature,
            soil_moisture: moisture,
            irrigation_decision: decision.label(),
            moisture_change_last_hour: delta,
        });

        previous_recorded = Some(moisture);
        moisture = apply_hourly_update(moisture, hour, temperature, decision);
    }

    rows
}
