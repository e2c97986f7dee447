//! File-backed storage emulating browser local storage.
//!
//! The file holds one JSON object mapping keys to string values. Every
//! write rewrites the whole file through a uniquely named temporary
//! sibling, then renames it into place.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use super::{KeyValueStore, StorageError};

/// A store persisted as a JSON object file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            StorageError::Corrupt(format!("{}: {e}", self.path.display()))
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let body = serde_json::to_string_pretty(entries)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(body.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every write.
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(%reason, "Discarding corrupt storage file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)?;
        debug!(bytes = value.len(), "Stored value");
        Ok(())
    }
}
