//! At-rest sealing of the history collection.
//!
//! On shutdown every record is individually RSA-encrypted and the lot is
//! written as one envelope file; the live store is then emptied. On startup
//! the envelope is decrypted back into the store and removed. Plaintext
//! records therefore only exist on disk while the service is running.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use zc_crypto::{RsaPrivateKey, RsaPublicKey};

use crate::domain::entry::HistoryEntry;
use crate::domain::errors::HistoryError;
use crate::ports::HistoryStore;

/// The on-disk envelope: one ciphertext per sealed record.
#[derive(Serialize, Deserialize)]
struct SealedHistory {
    entries: Vec<Vec<u8>>,
}

/// Seal the store's records into an envelope file and empty the store.
///
/// # Errors
///
/// Propagates store, crypto, and I/O failures. The store is only emptied
/// after the envelope is durably on disk.
pub fn seal(
    store: &mut dyn HistoryStore,
    key: &RsaPublicKey,
    path: &Path,
) -> Result<usize, HistoryError> {
    let records = store.all()?;

    let mut entries = Vec::with_capacity(records.len());
    for record in &records {
        let json = serde_json::to_vec(record)
            .map_err(|e| HistoryError::Serialization(e.to_string()))?;
        entries.push(zc_crypto::encrypt(key, &json)?);
    }

    let bytes = bincode::serialize(&SealedHistory { entries })
        .map_err(|e| HistoryError::Serialization(e.to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(HistoryError::io)?;
    }
    let temp_path = path.with_extension("tmp");
    let mut file = std::fs::File::create(&temp_path).map_err(HistoryError::io)?;
    file.write_all(&bytes).map_err(HistoryError::io)?;
    file.sync_all().map_err(HistoryError::io)?;
    std::fs::rename(&temp_path, path).map_err(HistoryError::io)?;

    store.replace_all(Vec::new())?;

    info!(records = records.len(), path = %path.display(), "history sealed");
    Ok(records.len())
}

/// Unseal an envelope file back into the store and remove it.
///
/// A missing or empty envelope is a no-op, not an error; there is simply
/// nothing to restore.
///
/// # Errors
///
/// Propagates envelope parse, crypto, and store failures. The envelope file
/// is only removed after the store holds the restored records.
pub fn unseal(
    path: &Path,
    key: &RsaPrivateKey,
    store: &mut dyn HistoryStore,
) -> Result<usize, HistoryError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no sealed history to restore");
            return Ok(0);
        }
        Err(e) => return Err(HistoryError::io(e)),
    };
    if bytes.is_empty() {
        return Ok(0);
    }

    let sealed: SealedHistory = bincode::deserialize(&bytes)
        .map_err(|e| HistoryError::Serialization(e.to_string()))?;

    let mut records = Vec::with_capacity(sealed.entries.len());
    for ciphertext in &sealed.entries {
        let json = zc_crypto::decrypt(key, ciphertext)?;
        let record: HistoryEntry = serde_json::from_slice(&json)
            .map_err(|e| HistoryError::Serialization(e.to_string()))?;
        records.push(record);
    }

    let restored = records.len();
    store.replace_all(records)?;
    std::fs::remove_file(path).map_err(HistoryError::io)?;

    info!(records = restored, path = %path.display(), "history unsealed");
    Ok(restored)
}
