//! Core error types for ritual-core.
//!
//! Progress and profile reads/writes are fail-soft and only surface these
//! errors through the `try_*` diagnostics entry points. Configuration and
//! CLI-facing validation propagate them normally.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ritual-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
///
/// A missing backend, an unreadable value and a rejected write are separate
/// variants so diagnostics can report them apart.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No persistent storage in this execution context
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Stored value exists but could not be parsed
    #[error("Stored value for '{key}' is corrupt: {message}")]
    Corrupt { key: String, message: String },

    /// Backend refused the write (quota, permissions, ...)
    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// Backend-level failure while reading
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Challenge id not present in the catalog
    #[error("Unknown challenge: {0}")]
    UnknownChallenge(String),

    /// Day outside the challenge's schedule
    #[error("Day {day} is not part of challenge '{challenge_id}' (1..={total_days})")]
    DayOutOfRange {
        challenge_id: String,
        day: u32,
        total_days: u32,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(inner, _msg)
                if inner.code == rusqlite::ErrorCode::CannotOpen =>
            {
                StorageError::Unavailable(err.to_string())
            }
            _ => StorageError::Backend(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
