use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Request-handling faults surfaced to the client.
///
/// Upstream-data failures never land here -- those degrade inside the
/// handler. What remains is a generic, non-leaky server error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to get time data")]
    TimeData(#[source] holiday_clock_core::CoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::TimeData { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
