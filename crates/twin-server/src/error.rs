//! Error types for the HTTP API.
//!
//! [`ApiError`] unifies handler failures into a single enum that converts
//! into an HTTP response via its [`IntoResponse`] impl.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use twin_engine::EngineError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The simulation engine refused to step (predictor unavailable).
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Engine(e @ EngineError::PredictorUnavailable) => {
                (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
