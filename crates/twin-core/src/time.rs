//! Hour-of-day time model.
//!
//! # Design
//!
//! The twin has no absolute calendar: the only time the physics cares about
//! is the wall-clock hour of day, which drives the diurnal temperature curve
//! and the day/night evaporation split.  `Hour` is therefore a wrap-around
//! cursor in `[0, 23]` rather than a monotonic tick counter.
//!
//! All constructors wrap modulo 24, so an `Hour` value is in range by
//! construction and downstream code never re-validates it.

use std::fmt;

/// Hours in one simulated day.
pub const HOURS_PER_DAY: u8 = 24;

/// First daytime hour (inclusive) for the evaporation regime.
pub const DAY_START_HOUR: u8 = 6;

/// First nighttime hour (exclusive upper bound of daytime).
pub const DAY_END_HOUR: u8 = 18;

/// A wall-clock hour of day in `[0, 23]`.
///
/// The inner value is private so the range invariant cannot be broken from
/// outside; [`Hour::new`] wraps its argument modulo 24.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hour(u8);

impl Hour {
    pub const MIDNIGHT: Hour = Hour(0);

    /// Construct an hour, wrapping modulo 24.
    #[inline]
    pub fn new(raw: u8) -> Hour {
        Hour(raw % HOURS_PER_DAY)
    }

    /// The raw hour value, guaranteed in `[0, 23]`.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// The hour one step later, wrapping 23 → 0.
    #[inline]
    pub fn next(self) -> Hour {
        Hour((self.0 + 1) % HOURS_PER_DAY)
    }

    /// `true` for hours in `[6, 18)` — the high-evaporation regime.
    #[inline]
    pub fn is_daytime(self) -> bool {
        (DAY_START_HOUR..DAY_END_HOUR).contains(&self.0)
    }
}

impl TryFrom<u8> for Hour {
    type Error = crate::CoreError;

    /// Strict conversion — rejects values outside `[0, 23]` instead of
    /// wrapping.  Used when validating external data (e.g. dataset rows).
    fn try_from(raw: u8) -> Result<Hour, Self::Error> {
        if raw < HOURS_PER_DAY {
            Ok(Hour(raw))
        } else {
            Err(crate::CoreError::HourOutOfRange(raw))
        }
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
