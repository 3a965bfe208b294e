//! # zc-crypto - At-Rest Encryption Primitives
//!
//! RSA-OAEP encryption used to seal the conversion history on disk.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `keys` | RSA-2048, e = 65537 | Keypair generation and PEM persistence |
//! | `oaep` | RSA-OAEP with SHA-256 | Sealing/unsealing history records |
//!
//! ## Properties
//!
//! - Private key stored as unencrypted PKCS#8 PEM, public key as SPKI PEM
//! - OAEP payloads are chunked, so records of any length round-trip

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod keys;
pub mod oaep;

// Re-exports
pub use errors::CryptoError;
pub use keys::RsaKeyPair;
pub use oaep::{decrypt, encrypt};
pub use rsa::{RsaPrivateKey, RsaPublicKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
