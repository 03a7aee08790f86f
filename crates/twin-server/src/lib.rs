//! `twin-server` — the HTTP boundary of the soil-moisture digital twin.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`state`]    | `AppState` — the engine behind an async mutex         |
//! | [`router`]   | Route table + CORS/trace middleware                   |
//! | [`handlers`] | The step and reset endpoint handlers                  |
//! | [`error`]    | `ApiError` with an `IntoResponse` impl                |
//!
//! # Endpoints
//!
//! | Method | Path                   | Response                                          |
//! |--------|------------------------|---------------------------------------------------|
//! | `POST` | `/api/simulation_step` | `StepResult` record, or `503` when degraded       |
//! | `POST` | `/api/reset_simulation`| `{"message": ...}` acknowledgement                |
//!
//! The binaries live alongside: `twin-server` (this API),
//! `generate-dataset`, and `train-model`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
