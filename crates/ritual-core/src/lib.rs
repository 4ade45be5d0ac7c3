//! # Ritual Core Library
//!
//! Core logic for the 30-Day Reset habit program: a fixed schedule of paired
//! morning and evening rituals, local completion tracking, streaks and
//! progress statistics. The `ritual` CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Challenge catalog**: static day entries and lookups
//! - **Storage**: pluggable key-value backends (memory, JSON files, SQLite)
//!   and TOML-based configuration
//! - **Progress**: fail-soft store, streak engine and the tracker operations
//! - **Clock**: injected time source for the current-day derivation
//!
//! ## Key Components
//!
//! - [`ProgressTracker`]: mark, query and reset challenge progress
//! - [`ProgressStore`]: load/save of every challenge's record
//! - [`Config`]: application configuration management
//! - [`Storage`]: trait for persistence backends

pub mod challenge;
pub mod checkin;
pub mod clock;
pub mod display;
pub mod error;
pub mod profile;
pub mod progress;
pub mod stats;
pub mod storage;

pub use challenge::{
    challenge_by_id, day_entries, total_days, Challenge, DayEntries, DayEntry, RitualType, Step,
    DEFAULT_CHALLENGE_ID,
};
pub use checkin::{CheckinView, RitualSlot};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use profile::{Profile, RitualPreference};
pub use progress::{
    AllProgress, DayCompletion, ProgressDocument, ProgressState, ProgressStore, ProgressTracker,
    RitualProgress, StreakPolicy, Streaks,
};
pub use stats::ChallengeStats;
pub use storage::{Config, FileStorage, MemoryStorage, SqliteStorage, Storage, UnavailableStorage};
