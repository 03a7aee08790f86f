//! The labeled row type written by the dataset writer.

use chrono::NaiveDateTime;

/// One hour of the ground-truth time series.
///
/// `soil_moisture` is the value *before* that hour's update;
/// `moisture_change_last_hour` is the first difference of the recorded
/// moisture column (0.0 for the first row of the series).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetRow {
    pub timestamp: NaiveDateTime,
    pub hour_of_day: u8,
    pub temperature: f64,
    pub soil_moisture: f64,
    /// `{0, 1}` label from the threshold rule.
    pub irrigation_decision: u8,
    pub moisture_change_last_hour: f64,
}
