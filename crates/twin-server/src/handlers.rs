//! Endpoint handlers.
//!
//! Both endpoints take no input; all state lives server-side in the
//! engine.  The frontend polls `simulation_step` once per displayed hour.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::debug;

use twin_engine::StepResult;

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/simulation_step` — advance the twin by one hour.
///
/// Returns the [`StepResult`] record, or `503` when no predictor is
/// loaded (a degraded start must fail loudly, never fall back to a
/// default decision).
pub async fn simulation_step(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StepResult>, ApiError> {
    let mut engine = state.engine.lock().await;
    let result = engine.step()?;
    debug!(
        hour = result.hour,
        soil_moisture = result.soil_moisture,
        irrigation_on = result.irrigation_on,
        "step"
    );
    Ok(Json(result))
}

/// `POST /api/reset_simulation` — restore the default state.
pub async fn reset_simulation(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    state.engine.lock().await.reset();
    Json(serde_json::json!({ "message": "Simulation has been reset." }))
}
