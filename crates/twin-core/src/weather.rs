//! Diurnal temperature model.
//!
//! A single smooth sine curve:
//!
//!   temperature(hour) = 18 + 10 · sin((hour − 9) · π / 12)
//!
//! crossing the 18 °C mean at 09:00, peaking near 28 °C at 15:00, and
//! bottoming near 8 °C at 03:00.  The curve is shared by the online engine
//! and the offline dataset generator; both must apply the identical formula
//! so that feature semantics at inference time match training time.

use std::f64::consts::PI;

use crate::Hour;

/// Mean daily temperature in °C.
pub const MEAN_TEMP_C: f64 = 18.0;

/// Half the peak-to-trough swing in °C.
pub const DIURNAL_AMPLITUDE_C: f64 = 10.0;

/// Hour at which the curve crosses the mean on the way up.
pub const MEAN_CROSSING_HOUR: f64 = 9.0;

/// Temperature in °C for an arbitrary integer hour.
///
/// Total over all integers; hours outside `[0, 23]` simply continue the
/// 24-hour period (`diurnal_temperature(h + 24)` ≈ `diurnal_temperature(h)`
/// up to floating-point rounding of the sine argument).
#[inline]
pub fn diurnal_temperature(hour: i64) -> f64 {
    MEAN_TEMP_C
        + DIURNAL_AMPLITUDE_C * ((hour as f64 - MEAN_CROSSING_HOUR) * PI / 12.0).sin()
}

/// Temperature in °C at a wall-clock [`Hour`].
#[inline]
pub fn temperature_at(hour: Hour) -> f64 {
    diurnal_temperature(i64::from(hour.value()))
}
