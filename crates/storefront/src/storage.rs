//! Durable key/value storage.
//!
//! Preferences survive restarts by writing string values under fixed keys,
//! the same shape as browser local storage. Two backends are provided:
//!
//! - [`MemoryStorage`] - a `HashMap`, for tests and ephemeral sessions
//! - [`FileStorage`] - a JSON object on disk, rewritten in full on every change
//!
//! Concurrent writers are not coordinated; the last write wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Storage key for the persisted theme mode.
pub const THEME_KEY: &str = "saranya-theme";

/// Storage key for the persisted custom palette.
pub const CUSTOM_COLORS_KEY: &str = "saranya-custom-colors";

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be serialized.
    #[error("storage serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend refuses writes.
    #[error("storage is read-only")]
    ReadOnly,
}

/// String-keyed persistent storage.
pub trait KeyValueStorage {
    /// Read a value. Missing keys are `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not persist the value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not persist the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Write a value, logging and discarding any failure.
///
/// In-memory state stays authoritative when storage is full or disabled.
pub fn set_best_effort<S: KeyValueStorage + ?Sized>(storage: &mut S, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        warn!(key, error = %e, "Failed to persist value, keeping in-memory state only");
    }
}

/// In-memory storage backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            read_only: false,
        }
    }

    /// Make every subsequent write fail, like a browser with storage disabled.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: a single JSON object of string keys to string values.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    /// Open the storage file, loading any existing entries.
    ///
    /// A missing file starts empty. A file that cannot be read or parsed is
    /// logged and treated as empty; it is overwritten on the next write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Ignoring corrupt storage file");
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read storage file");
                HashMap::new()
            }
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened storage");
        Self { path, entries }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get(THEME_KEY), None);

        storage.set(THEME_KEY, "dark").unwrap();
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));

        storage.remove(THEME_KEY).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let mut storage = MemoryStorage::with_entries([(THEME_KEY, "light")]).read_only();
        assert!(matches!(
            storage.set(THEME_KEY, "dark"),
            Err(StorageError::ReadOnly)
        ));
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_best_effort_swallows_failure() {
        let mut storage = MemoryStorage::new().read_only();
        set_best_effort(&mut storage, THEME_KEY, "dark");
        assert_eq!(storage.get(THEME_KEY), None);
    }

    #[test]
    fn test_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut storage = FileStorage::open(&path);
        storage.set(THEME_KEY, "dark").unwrap();
        storage.set(CUSTOM_COLORS_KEY, "{}").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(reopened.get(CUSTOM_COLORS_KEY).as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_corrupt_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let mut storage = FileStorage::open(&path);
        assert_eq!(storage.get(THEME_KEY), None);

        storage.set(THEME_KEY, "light").unwrap();
        assert_eq!(
            FileStorage::open(&path).get(THEME_KEY).as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_file_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("storage.json");

        let mut storage = FileStorage::open(&path);
        assert!(matches!(
            storage.set(THEME_KEY, "dark"),
            Err(StorageError::Io(_))
        ));
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
