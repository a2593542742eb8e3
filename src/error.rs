//! Service Error Taxonomy
//!
//! Defines the error type shared by the HTTP boundary and the startup path.
//! Each variant maps to a distinct HTTP status code and serializes as a JSON
//! body of the form `{"error": "<message>"}`:
//!
//! - `NotFound` → 404 (lookup miss)
//! - `Validation` → 400 (missing or malformed request values)
//! - `Dependency` → 503 (external resource failure, fatal at startup)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No record matches the requested unique key.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request carries a missing or unrecognized value.
    #[error("invalid request: {0}")]
    Validation(String),

    /// An external dependency (blob storage) could not be reached or
    /// returned unusable data.
    #[error("dependency failure: {0}")]
    Dependency(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Dependency(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
