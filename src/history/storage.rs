//! Single-slot storage capability backing the history store.
//!
//! History lives in exactly one named slot, so the capability is just
//! get/set/remove on that slot. Anything durable can implement it; the
//! store's logic never changes when the backing medium does.

use std::path::PathBuf;
use std::sync::Mutex;

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to create data directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),

    #[error("Failed to remove {0}: {1}")]
    Remove(PathBuf, std::io::Error),
}

/// A durable slot holding one string value.
pub trait Storage {
    /// Read the slot. Absent or unreadable values are `None`.
    fn get(&self) -> Option<String>;

    /// Replace the slot's value.
    fn set(&self, value: &str) -> Result<(), StorageError>;

    /// Delete the slot.
    fn remove(&self) -> Result<(), StorageError>;
}

/// File-backed slot in the OS data directory.
///
/// Writes go through a temp file + rename so a crash mid-write never leaves
/// a half-written slot for the next startup to choke on.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Slot at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The app's default history slot: `<os data dir>/tunegrab/history.json`.
    pub fn default_slot() -> Result<Self, StorageError> {
        let dir = dirs::data_dir()
            .map(|d| d.join("tunegrab"))
            .ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(dir.join("history.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn set(&self, value: &str) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| StorageError::CreateDir(dir.to_path_buf(), e))?;
        }

        // Write atomically (write to temp, then rename)
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, value).map_err(|e| StorageError::Write(temp_path.clone(), e))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| StorageError::Rename(temp_path, self.path.clone(), e))?;
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove(self.path.clone(), e)),
        }
    }
}

/// In-memory slot for tests and the CLI's dry paths.
#[derive(Default)]
pub struct MemoryStorage {
    value: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self) -> Option<String> {
        self.value.lock().expect("storage lock poisoned").clone()
    }

    fn set(&self, value: &str) -> Result<(), StorageError> {
        *self.value.lock().expect("storage lock poisoned") = Some(value.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        *self.value.lock().expect("storage lock poisoned") = None;
        Ok(())
    }
}
