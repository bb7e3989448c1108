use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The body is always the flat `{"error": "<message>"}` object the web UI
/// renders verbatim, so messages here are user-facing literals.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing user input. Never reaches the upstream API.
    #[error("{0}")]
    Validation(String),

    /// Upstream or transport failure, already carrying its mode-specific
    /// prefix ("Failed to rewrite text: " / "Failed to generate text: ").
    #[error("{0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream failure: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
