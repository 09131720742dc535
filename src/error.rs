// Request errors for the HTTP layer. The engine itself never fails.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("targetPoints must be between 2 and {max}, got {got}")]
    InvalidTargetPoints { got: usize, max: usize },
    #[error("{field} is not an ISO-8601 timestamp: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("range end {end} is before start {start}")]
    InvertedRange { start: String, end: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejected request");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
