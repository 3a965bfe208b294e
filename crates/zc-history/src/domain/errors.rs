//! History store error types.

use thiserror::Error;
use zc_crypto::CryptoError;

/// Errors produced by the history store and its sealing layer.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Filesystem operation failed
    #[error("History I/O failed: {message}")]
    Io {
        /// Underlying I/O error
        message: String,
    },

    /// A record or envelope could not be encoded/decoded
    #[error("History serialization failed: {0}")]
    Serialization(String),

    /// Sealing or unsealing failed
    #[error("History sealing failed: {0}")]
    Sealing(#[from] CryptoError),
}

impl HistoryError {
    /// Wrap an I/O error.
    pub fn io(e: std::io::Error) -> Self {
        Self::Io {
            message: e.to_string(),
        }
    }
}
