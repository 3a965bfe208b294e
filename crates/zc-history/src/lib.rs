//! # zc-history - Conversion History Store
//!
//! Persistence for `{input, output}` conversion records behind a small
//! storage port, with an in-memory adapter for tests and a file-backed
//! adapter for production.
//!
//! At rest the history can be *sealed*: every record individually
//! RSA-encrypted into a single envelope file while the live store is
//! emptied. The service seals on shutdown and unseals on startup, so the
//! plaintext records only exist while the process runs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod sealing;

// Re-exports
pub use adapters::{FileHistoryStore, InMemoryHistoryStore};
pub use domain::entry::HistoryEntry;
pub use domain::errors::HistoryError;
pub use ports::HistoryStore;
pub use sealing::{seal, unseal};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
