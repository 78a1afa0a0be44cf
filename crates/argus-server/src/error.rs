use argus_types::{ScreeningUnavailable, ValidationFailure};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Non-verdict responses. Bodies always carry `error`; the rest depends on the kind.
#[derive(Debug)]
pub enum ApiError {
    Invalid(ValidationFailure),
    Unavailable(ScreeningUnavailable),
    /// Request body could not be read as JSON.
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(f) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": f.reason,
                    "field": f.field,
                    "rule": f.rule,
                })),
            )
                .into_response(),
            ApiError::Unavailable(u) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": u.to_string(),
                    "source": u.source,
                    "kind": u.kind,
                })),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}
