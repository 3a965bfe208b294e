//! Chunked RSA-OAEP encryption.
//!
//! A single 2048-bit OAEP-SHA256 operation carries at most 190 bytes of
//! plaintext, which is less than one long conversion record. Plaintext is
//! therefore split into maximal chunks and the ciphertext is the
//! concatenation of the resulting modulus-sized blocks. Decryption walks
//! the blocks in order and reassembles the plaintext.

use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::CryptoError;

// OAEP overhead: 2 * SHA-256 digest length + 2.
const OAEP_OVERHEAD: usize = 2 * 32 + 2;

/// Encrypt plaintext of any length under the public key.
///
/// # Errors
///
/// Returns `CryptoError::EncryptionFailed` if an OAEP operation fails.
pub fn encrypt(key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let mut rng = rand::thread_rng();
    let chunk_size = key.size() - OAEP_OVERHEAD;
    let mut ciphertext = Vec::new();

    // An empty plaintext still produces one block so that ciphertext is
    // never empty and decryption stays symmetric.
    let chunks: Vec<&[u8]> = if plaintext.is_empty() {
        vec![&[]]
    } else {
        plaintext.chunks(chunk_size).collect()
    };

    for chunk in chunks {
        let block = key
            .encrypt(&mut rng, Oaep::new::<Sha256>(), chunk)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
        ciphertext.extend_from_slice(&block);
    }

    Ok(ciphertext)
}

/// Decrypt a ciphertext produced by [`encrypt`].
///
/// # Errors
///
/// Returns `CryptoError::MalformedCiphertext` if the input is not a whole
/// number of OAEP blocks and `CryptoError::DecryptionFailed` if a block
/// does not decrypt under this key.
pub fn decrypt(key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let block_size = key.size();
    if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
        return Err(CryptoError::MalformedCiphertext {
            length: ciphertext.len(),
            block_size,
        });
    }

    let mut plaintext = Vec::new();
    for block in ciphertext.chunks(block_size) {
        let chunk = key
            .decrypt(Oaep::new::<Sha256>(), block)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;
        plaintext.extend_from_slice(&chunk);
    }

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RsaKeyPair;

    fn keypair() -> RsaKeyPair {
        RsaKeyPair::generate().unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let pair = keypair();
        let plaintext = br#"{"input":"dz_a_aazzaaa","output":[28,53,1]}"#;

        let ciphertext = encrypt(pair.public(), plaintext).unwrap();
        let decrypted = decrypt(pair.private(), &ciphertext).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_multi_block_roundtrip() {
        let pair = keypair();
        // Larger than one OAEP chunk, so this exercises the block walk.
        let plaintext = vec![0xA5u8; 1000];

        let ciphertext = encrypt(pair.public(), &plaintext).unwrap();
        assert!(ciphertext.len() > pair.public().size());

        let decrypted = decrypt(pair.private(), &ciphertext).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_empty_plaintext_roundtrip() {
        let pair = keypair();
        let ciphertext = encrypt(pair.public(), b"").unwrap();
        let decrypted = decrypt(pair.private(), &ciphertext).unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn test_truncated_ciphertext_rejected() {
        let pair = keypair();
        let mut ciphertext = encrypt(pair.public(), b"hello").unwrap();
        ciphertext.pop();

        assert!(matches!(
            decrypt(pair.private(), &ciphertext),
            Err(CryptoError::MalformedCiphertext { .. })
        ));
    }

    #[test]
    fn test_wrong_key_fails() {
        let pair = keypair();
        let other = keypair();

        let ciphertext = encrypt(pair.public(), b"hello").unwrap();
        assert!(matches!(
            decrypt(other.private(), &ciphertext),
            Err(CryptoError::DecryptionFailed(_))
        ));
    }

    #[test]
    fn test_tampered_block_fails() {
        let pair = keypair();
        let mut ciphertext = encrypt(pair.public(), b"hello").unwrap();
        ciphertext[10] ^= 0xFF;

        assert!(matches!(
            decrypt(pair.private(), &ciphertext),
            Err(CryptoError::DecryptionFailed(_))
        ));
    }
}
