//! HTTP error handling and response types.
//!
//! Error bodies use the same `{status: "error", message}` shape the
//! computation core produces, so callers see one failure format regardless
//! of whether a request died in the HTTP layer or inside the pipeline.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::astro::AstroError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation or parse error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(json!({ "status": "error", "message": message }))).into_response()
    }
}

impl From<AstroError> for AppError {
    fn from(err: AstroError) -> Self {
        match err {
            AstroError::MissingFields { .. }
            | AstroError::InvalidTimeInput(_)
            | AstroError::InvalidCoordinates(_)
            | AstroError::UnparsableDate(_) => AppError::BadRequest(err.to_string()),
            AstroError::EphemerisUnavailable { .. }
            | AstroError::EphemerisComputation { .. }
            | AstroError::HouseComputation(_) => AppError::Internal(err.to_string()),
        }
    }
}
