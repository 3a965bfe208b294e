//! RSA keypair generation and PEM persistence.
//!
//! Keys live as two PEM files on disk: the private key in unencrypted
//! PKCS#8 form, the public key in SPKI form. `load_or_generate` creates
//! both on first run so the service starts without manual key setup.

use std::path::Path;

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::CryptoError;

/// RSA modulus size in bits.
pub const KEY_BITS: usize = 2048;

/// An RSA keypair for sealing and unsealing history records.
pub struct RsaKeyPair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl RsaKeyPair {
    /// Generate a fresh 2048-bit keypair.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::KeyGenerationFailed` if prime generation fails.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut rng = rand::thread_rng();
        let private = RsaPrivateKey::new(&mut rng, KEY_BITS)
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
        let public = RsaPublicKey::from(&private);
        Ok(Self { private, public })
    }

    /// Load a keypair from PEM files.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::KeyIo` if a file cannot be read and
    /// `CryptoError::InvalidKeyMaterial` if the PEM does not parse.
    pub fn load(private_path: &Path, public_path: &Path) -> Result<Self, CryptoError> {
        let private_pem = read_key_file(private_path)?;
        let public_pem = read_key_file(public_path)?;

        let private = RsaPrivateKey::from_pkcs8_pem(&private_pem)
            .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;
        let public = RsaPublicKey::from_public_key_pem(&public_pem)
            .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;

        Ok(Self { private, public })
    }

    /// Write both keys out as PEM files.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeyMaterial` if PEM encoding fails and
    /// `CryptoError::KeyIo` if a file cannot be written.
    pub fn save(&self, private_path: &Path, public_path: &Path) -> Result<(), CryptoError> {
        let private_pem = self
            .private
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;
        let public_pem = self
            .public
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;

        write_key_file(private_path, private_pem.as_bytes())?;
        write_key_file(public_path, public_pem.as_bytes())?;
        Ok(())
    }

    /// Load the keypair from disk, generating and persisting one if either
    /// file is missing.
    ///
    /// # Errors
    ///
    /// Propagates generation, parse, and I/O errors.
    pub fn load_or_generate(private_path: &Path, public_path: &Path) -> Result<Self, CryptoError> {
        if private_path.exists() && public_path.exists() {
            return Self::load(private_path, public_path);
        }

        let pair = Self::generate()?;
        pair.save(private_path, public_path)?;
        Ok(pair)
    }

    /// Private key, used to unseal.
    pub fn private(&self) -> &RsaPrivateKey {
        &self.private
    }

    /// Public key, used to seal.
    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }
}

fn read_key_file(path: &Path) -> Result<String, CryptoError> {
    std::fs::read_to_string(path).map_err(|e| CryptoError::KeyIo {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn write_key_file(path: &Path, pem: &[u8]) -> Result<(), CryptoError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CryptoError::KeyIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    }
    std::fs::write(path, pem).map_err(|e| CryptoError::KeyIo {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
