//! Shared application state.

use tokio::sync::Mutex;

use twin_engine::SimulationEngine;

/// State shared by all request handlers.
///
/// The engine has a single-writer contract: `previous_moisture` must
/// reflect exactly one step of history, so interleaved step/reset calls
/// are forbidden.  The async mutex serializes them.
pub struct AppState {
    pub engine: Mutex<SimulationEngine>,
}

impl AppState {
    pub fn new(engine: SimulationEngine) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }
}
