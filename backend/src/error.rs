//! Error types and error handling for the application
//!
//! Errors convert to HTTP responses through `IntoResponse`, so every failing
//! endpoint answers with the same `{ "error", "status" }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Multipart body could not be parsed
    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    /// Upload request did not contain a `file` part
    #[error("Missing multipart field: {0}")]
    MissingField(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedUpload(_) => StatusCode::BAD_REQUEST,
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
