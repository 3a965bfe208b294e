//! Gateway error types.
//!
//! `GatewayError` covers service lifecycle failures (config, bind, serve);
//! `ApiError` is the per-request failure that renders as a JSON body of the
//! shape `{"detail": <message>}` with the matching HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::config::ConfigError;

/// Service lifecycle errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration rejected
    #[error("invalid gateway configuration: {0}")]
    Config(#[from] ConfigError),

    /// Could not bind the listen address
    #[error("failed to bind {addr}: {message}")]
    Bind {
        /// The requested bind address
        addr: String,
        /// Underlying I/O error
        message: String,
    },

    /// The server loop failed
    #[error("server error: {0}")]
    Serve(String),
}

/// A request-level error with its HTTP status and client-facing detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status to respond with
    pub status: StatusCode,
    /// Message for the `detail` field of the response body
    pub detail: String,
}

impl ApiError {
    /// A 400 with the given detail message.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    /// The generic 500. Internals are logged, never surfaced.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "Internal Server Error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.detail }));
        (self.status, body).into_response()
    }
}
