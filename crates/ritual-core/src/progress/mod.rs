//! Per-challenge progress records.
//!
//! - [`RitualProgress`]: completion flags per day plus cached streaks
//! - [`ProgressStore`]: fail-soft persistence of every record under one key
//! - [`ProgressTracker`]: the operations the presentation layer calls
//!
//! The persisted JSON layout is
//!
//! ```json
//! { "30-day-reset": {
//!     "completed": { "1": { "morning": true, "evening": true }, "2": { "morning": true } },
//!     "morningStreak": 2,
//!     "eveningStreak": 0,
//!     "startedAt": "2025-01-05T08:00:00.000Z"
//! } }
//! ```

mod store;
mod streak;
mod tracker;

pub use store::{ProgressDocument, ProgressStore, PROGRESS_STORAGE_KEY};
pub use streak::{compute_streaks, StreakPolicy, Streaks};
pub use tracker::{day_number, ProgressState, ProgressTracker, PROGRAM_LENGTH_DAYS};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::challenge::RitualType;

/// Completion flags for one day. Missing means not done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCompletion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<bool>,
}

impl DayCompletion {
    pub fn is_done(&self, ritual: RitualType) -> bool {
        match ritual {
            RitualType::Morning => self.morning.unwrap_or(false),
            RitualType::Evening => self.evening.unwrap_or(false),
        }
    }

    pub fn mark(&mut self, ritual: RitualType) {
        match ritual {
            RitualType::Morning => self.morning = Some(true),
            RitualType::Evening => self.evening = Some(true),
        }
    }

    /// Both rituals done.
    pub fn is_perfect(&self) -> bool {
        self.is_done(RitualType::Morning) && self.is_done(RitualType::Evening)
    }
}

/// Mutable state of one challenge for the local user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RitualProgress {
    /// Day number to completion flags; only days with a check-in have a key.
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: BTreeMap<u32, DayCompletion>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub morning_streak: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub evening_streak: u32,
    /// ISO-8601 start instant, kept as text so a malformed value only
    /// affects this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
}

impl RitualProgress {
    /// Empty record started at `now`.
    pub fn started(now: DateTime<Utc>) -> Self {
        Self {
            started_at: Some(format_timestamp(now)),
            ..Self::default()
        }
    }

    pub fn is_completed(&self, day: u32, ritual: RitualType) -> bool {
        self.completed
            .get(&day)
            .is_some_and(|completion| completion.is_done(ritual))
    }

    /// Parsed start instant; `None` when absent or malformed.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.started_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }

    pub fn streak(&self, ritual: RitualType) -> u32 {
        match ritual {
            RitualType::Morning => self.morning_streak,
            RitualType::Evening => self.evening_streak,
        }
    }

    /// Recompute both cached streaks from `completed`.
    pub fn refresh_streaks(&mut self, policy: StreakPolicy) {
        let streaks = compute_streaks(&self.completed, policy);
        self.morning_streak = streaks.morning;
        self.evening_streak = streaks.evening;
    }
}

/// Reads `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Every challenge's progress, keyed by challenge id.
pub type AllProgress = BTreeMap<String, RitualProgress>;

/// Millisecond-precision UTC timestamp, e.g. `2025-01-05T08:00:00.000Z`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
