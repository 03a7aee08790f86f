//! `twin-engine` — the single-plot simulation state machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`state`]  | `SimulationState`, plot physics constants and update fns  |
//! | [`engine`] | `SimulationEngine` (`step`/`reset`), `StepResult`         |
//! | [`error`]  | `EngineError`, `EngineResult<T>`                          |
//!
//! # The step loop
//!
//! ```text
//! step():
//!   ① Features  — derive (hour, temperature, moisture, delta) from the
//!                 state as it stood at the start of the step.
//!   ② Predict   — ask the injected Predictor for a binary decision.
//!   ③ Physics   — irrigation (+50), evaporation, temperature effect,
//!                 final clamp to [0, 100].
//!   ④ Report    — assemble StepResult for the pre-advance hour, then
//!                 advance the hour cursor modulo 24.
//! ```
//!
//! The engine is an explicitly constructed instance with an injected
//! predictor: no globals, so tests run isolated engines side by side and
//! the request-handling layer owns exactly one.

pub mod engine;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::{SimulationEngine, StepResult};
pub use error::{EngineError, EngineResult};
pub use state::SimulationState;
