//! # API Errors
//!
//! Every failure a client can observe is an [`ApiError`]. Each variant carries the exact
//! message that ends up in the `{"error": ...}` response body, so the wire contract lives
//! in one place.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required body field is absent or empty.
    #[error("{0}")]
    MissingField(String),

    /// A body field is present but has an unacceptable value.
    #[error("{0}")]
    InvalidField(String),

    /// The route identifier does not match any stored record.
    #[error("{0}")]
    NotFound(String),

    /// The request contradicts stored state or the route (id mismatch, status rules).
    #[error("{0}")]
    Conflict(String),

    /// The path exists but does not accept the method.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// The backing actor could not serve the request.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidField(_) | ApiError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
