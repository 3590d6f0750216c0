//! HTTP error mapping for the benchmark API

use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use cipherbench_core::BenchError;

/// Error type returned by API handlers.
///
/// Engine validation failures map to 400, everything else to 500. The
/// response body is always `{"error": message}`, the shape existing
/// clients of this API parse.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// An error surfaced by the benchmark engine
    Engine(BenchError),
    /// A transport-level request problem (e.g. missing upload)
    BadRequest(String),
    /// A transport-level failure (I/O, worker pool)
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Engine(e) => write!(f, "{e}"),
            ApiError::BadRequest(msg) => write!(f, "{msg}"),
            ApiError::Internal(msg) => write!(f, "Internal server error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<BenchError> for ApiError {
    fn from(err: BenchError) -> Self {
        Self::Engine(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            ApiError::Engine(e) if e.is_validation() => actix_web::http::StatusCode::BAD_REQUEST,
            ApiError::Engine(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => actix_web::http::StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("request failed: {self}");
        } else {
            log::warn!("request rejected: {self}");
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
