//! `twin-core` — foundational types for the soil-moisture digital twin.
//!
//! This crate is a dependency of every other `twin-*` crate.  It intentionally
//! has no `twin-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`time`]     | `Hour` — wrap-around hour-of-day cursor               |
//! | [`weather`]  | Diurnal temperature model                             |
//! | [`features`] | `FeatureVector`, `IrrigationDecision`                 |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod features;
pub mod time;
pub mod weather;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use features::{FeatureVector, IrrigationDecision};
pub use time::Hour;
pub use weather::{diurnal_temperature, temperature_at};
