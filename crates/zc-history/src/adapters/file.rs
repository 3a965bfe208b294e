//! File-backed history store.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entry::HistoryEntry;
use crate::domain::errors::HistoryError;
use crate::ports::HistoryStore;

/// File-backed history collection.
///
/// Records live as JSON Lines on disk. The whole file is loaded at open and
/// rewritten atomically (temp file, fsync, rename) on every mutation; the
/// history is small and append rates are human-scale, so a rewrite per
/// mutation is cheaper than a recovery story for partial appends.
pub struct FileHistoryStore {
    entries: Vec<HistoryEntry>,
    path: PathBuf,
}

impl FileHistoryStore {
    /// Open the store at the given path, loading any existing records.
    ///
    /// A missing file is an empty history, not an error.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` if the file exists but cannot be read and
    /// `HistoryError::Serialization` if a line does not parse.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HistoryError> {
        let path = path.as_ref().to_path_buf();

        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let entries = Self::parse(&contents)?;
                info!(path = %path.display(), records = entries.len(), "loaded history file");
                entries
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no existing history file");
                Vec::new()
            }
            Err(e) => return Err(HistoryError::io(e)),
        };

        Ok(Self { entries, path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(contents: &str) -> Result<Vec<HistoryEntry>, HistoryError> {
        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|e| HistoryError::Serialization(e.to_string()))
            })
            .collect()
    }

    fn save(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(HistoryError::io)?;
        }

        let mut bytes = Vec::new();
        for entry in &self.entries {
            serde_json::to_writer(&mut bytes, entry)
                .map_err(|e| HistoryError::Serialization(e.to_string()))?;
            bytes.push(b'\n');
        }

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(HistoryError::io)?;
        file.write_all(&bytes).map_err(HistoryError::io)?;
        file.sync_all().map_err(HistoryError::io)?;

        std::fs::rename(&temp_path, &self.path).map_err(HistoryError::io)
    }
}

impl HistoryStore for FileHistoryStore {
    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.push(entry);
        self.save()
    }

    fn all(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.clone())
    }

    fn replace_all(&mut self, entries: Vec<HistoryEntry>) -> Result<(), HistoryError> {
        self.entries = entries;
        self.save()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
