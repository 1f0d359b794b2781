//! File-backed key-value storage
//!
//! Each logical key is a single file under the data directory, holding the
//! raw stored value. The dashboard keeps its whole state under four keys:
//! `exams` (a JSON array), plus the plain-string preference keys
//! `examViewMode`, `hideCompletedExams` and `hasSeenWelcome`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key-value store over a directory of single-value files.
///
/// Cloning is cheap (a path handle), so the exam store and the preference
/// store can share one data directory.
#[derive(Clone)]
pub struct KvStore {
    base_path: PathBuf,
}

impl KvStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("finals"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Create the backing directory if it does not exist yet
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    /// Read the raw value stored under `key`; `None` when absent
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write `value` under `key`, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    /// Remove `key`; removing an absent key is not an error
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (KvStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = KvStore::new(temp_dir.path().to_path_buf());
        store.init().unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_get_missing_key() {
        let (store, _temp) = test_store();
        assert!(store.get("exams").unwrap().is_none());
    }

    #[test]
    fn test_set_and_get() {
        let (store, _temp) = test_store();
        store.set("examViewMode", "grid").unwrap();
        assert_eq!(store.get("examViewMode").unwrap().as_deref(), Some("grid"));
    }

    #[test]
    fn test_set_overwrites() {
        let (store, _temp) = test_store();
        store.set("examViewMode", "grid").unwrap();
        store.set("examViewMode", "list").unwrap();
        assert_eq!(store.get("examViewMode").unwrap().as_deref(), Some("list"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (store, _temp) = test_store();
        store.set("hasSeenWelcome", "true").unwrap();
        store.remove("hasSeenWelcome").unwrap();
        store.remove("hasSeenWelcome").unwrap();
        assert!(store.get("hasSeenWelcome").unwrap().is_none());
    }

    #[test]
    fn test_set_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = KvStore::new(temp_dir.path().join("nested"));
        store.set("exams", "[]").unwrap();
        assert_eq!(store.get("exams").unwrap().as_deref(), Some("[]"));
    }
}
