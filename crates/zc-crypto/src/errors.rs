//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Key could not be read from or written to disk
    #[error("Key I/O failed for {path}: {message}")]
    KeyIo {
        /// Path of the offending key file
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// Key material could not be parsed or serialized
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// Ciphertext is not a whole number of OAEP blocks
    #[error("Malformed ciphertext: length {length} is not a multiple of {block_size}")]
    MalformedCiphertext {
        /// Ciphertext length in bytes
        length: usize,
        /// Expected OAEP block size in bytes
        block_size: usize,
    },
}
