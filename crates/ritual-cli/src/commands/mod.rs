//! Subcommand implementations.

pub mod challenge;
pub mod config;
pub mod diagnostics;
pub mod profile;
pub mod progress;
pub mod stats;

use ritual_core::storage::open_backend;
use ritual_core::{Config, ProgressTracker, RitualType, Storage, ValidationError};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Configuration, resolved challenge id and a tracker over the configured backend.
pub struct Session {
    pub config: Config,
    pub challenge_id: String,
    pub tracker: ProgressTracker<Box<dyn Storage>>,
}

impl Session {
    pub fn open(challenge: Option<String>) -> Self {
        let config = Config::load_or_default();
        let challenge_id = challenge.unwrap_or_else(|| config.challenge_id.clone());
        let tracker = ProgressTracker::new(open_backend(&config)).with_policy(config.streak_policy);
        tracing::debug!(%challenge_id, backend = ?config.storage.backend, "session opened");
        Self {
            config,
            challenge_id,
            tracker,
        }
    }
}

pub fn parse_ritual(value: &str) -> Result<RitualType, ValidationError> {
    value
        .parse()
        .map_err(|message| ValidationError::InvalidValue {
            field: "ritual".into(),
            message,
        })
}
