//! # zc-gateway - HTTP Gateway
//!
//! The web interface of the z-chain conversion service.
//!
//! # Routes
//!
//! | Route | Methods | Purpose |
//! |-------|---------|---------|
//! | `/api/convert` | GET, POST | Validate input, run the transformation, record it |
//! | `/api/history` | GET | Previously recorded conversions |
//! | `/health` | GET | Liveness probe |
//!
//! Input arrives as the `input_string` query parameter (GET) or JSON body
//! field (POST), is trimmed, and must be non-empty, ASCII-only, and at most
//! the configured length before it reaches the transformation core.
//! Validation failures surface as `400 {"detail": ...}`; anything
//! unexpected behind a valid request is a generic `500`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod service;

// Re-exports for public API
pub use domain::config::{ConfigError, CorsConfig, GatewayConfig, LimitsConfig};
pub use domain::error::{ApiError, GatewayError};
pub use domain::types::{ConvertResponse, HistoryResponse};
pub use service::{GatewayService, SharedHistoryStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
