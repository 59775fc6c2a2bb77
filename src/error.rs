use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Terminal request errors. Both map straight to a JSON error body; no
/// retry, no partial mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request payload is missing a non-empty string name or a numeric price.
    #[error("Invalid request body")]
    InvalidBody,

    /// No stored item matches the requested name.
    #[error("Item not found")]
    NotFound,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
