//! Key-value persistence backends and configuration.
//!
//! Progress and profile records are stored as JSON strings under fixed keys,
//! the same way a browser keeps them in `localStorage`. Backends implement
//! [`Storage`] and are handed to the stores explicitly.

mod config;
mod file;
mod sqlite;

pub use config::{Config, StorageBackend, StorageConfig};
pub use file::FileStorage;
pub use sqlite::SqliteStorage;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{ConfigError, StorageError};

/// String key-value storage capability.
pub trait Storage {
    /// Read the value stored under `key`, `None` if never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-process storage, optionally with a per-value size quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value exceeds `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            if value.len() > quota {
                return Err(StorageError::WriteFailed {
                    key: key.to_string(),
                    message: format!("quota of {quota} bytes exceeded ({} bytes)", value.len()),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stand-in for an execution context without persistent storage.
///
/// Every call fails with [`StorageError::Unavailable`].
#[derive(Debug, Clone)]
pub struct UnavailableStorage {
    reason: String,
}

impl UnavailableStorage {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Storage for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

/// Returns the data directory, creating it if needed.
///
/// `RITUAL_RESET_HOME` overrides the location entirely. Otherwise this is
/// `~/.config/ritual-reset/`, or `~/.config/ritual-reset-dev/` when
/// `RITUAL_RESET_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("RITUAL_RESET_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("RITUAL_RESET_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("ritual-reset-dev")
            } else {
                base_dir.join("ritual-reset")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// Open the backend selected in `config`.
///
/// Falls back to [`UnavailableStorage`] when the backend cannot be opened,
/// so callers keep their fail-soft read/write behaviour.
pub fn open_backend(config: &Config) -> Box<dyn Storage> {
    let dir = match config.resolved_data_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(error = %e, "no data directory, progress will not persist");
            return Box::new(UnavailableStorage::new(e.to_string()));
        }
    };

    match config.storage.backend {
        StorageBackend::File => Box::new(FileStorage::new(dir)),
        StorageBackend::Sqlite => match SqliteStorage::open(dir.join(sqlite::DB_FILE_NAME)) {
            Ok(db) => Box::new(db),
            Err(e) => {
                tracing::warn!(error = %e, "failed to open sqlite storage");
                Box::new(UnavailableStorage::new(e.to_string()))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get("k").unwrap().is_none());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.remove("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn memory_storage_quota_rejects_large_values() {
        let mut storage = MemoryStorage::with_quota(4);
        storage.set("k", "1234").unwrap();
        let err = storage.set("k", "12345").unwrap_err();
        assert!(matches!(err, StorageError::WriteFailed { .. }));
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn unavailable_storage_fails_every_call() {
        let mut storage = UnavailableStorage::new("no window");
        assert!(matches!(storage.get("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(storage.set("k", "v"), Err(StorageError::Unavailable(_))));
        assert!(matches!(storage.remove("k"), Err(StorageError::Unavailable(_))));
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut storage: Box<dyn Storage> = Box::new(MemoryStorage::new());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
