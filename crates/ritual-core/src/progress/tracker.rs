//! Challenge progress operations over a [`ProgressStore`].

use chrono::{DateTime, Utc};

use super::{ProgressStore, RitualProgress, StreakPolicy};
use crate::challenge::RitualType;
use crate::clock::{Clock, SystemClock};
use crate::stats::ChallengeStats;
use crate::storage::Storage;

/// Upper bound of the derived current day.
pub const PROGRAM_LENGTH_DAYS: u32 = 30;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Whether a challenge has a persisted record.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressState {
    Found(RitualProgress),
    NotStarted,
}

impl ProgressState {
    pub fn is_started(&self) -> bool {
        matches!(self, ProgressState::Found(_))
    }

    pub fn progress(&self) -> Option<&RitualProgress> {
        match self {
            ProgressState::Found(progress) => Some(progress),
            ProgressState::NotStarted => None,
        }
    }
}

/// Program day for an elapsed span: whole days rounded up, between 1 and
/// `program_length`.
///
/// The span is taken as an absolute value, so a start in the future counts
/// forward the same way. A span of exactly zero is day 1, not day 0: the
/// result is always a valid schedule day.
pub fn day_number(started_at: DateTime<Utc>, now: DateTime<Utc>, program_length: u32) -> u32 {
    let elapsed_ms = (now - started_at).num_milliseconds().unsigned_abs();
    let day_ms = DAY_MS as u64;
    let days = elapsed_ms.div_ceil(day_ms);
    let days = u32::try_from(days).unwrap_or(u32::MAX);
    days.clamp(1, program_length.max(1))
}

/// Reads and writes challenge progress.
///
/// Every mutating call loads the full store, changes one record and writes
/// the full store back.
pub struct ProgressTracker<S, C = SystemClock> {
    store: ProgressStore<S>,
    clock: C,
    policy: StreakPolicy,
}

impl<S: Storage> ProgressTracker<S, SystemClock> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> ProgressTracker<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self {
            store: ProgressStore::new(storage),
            clock,
            policy: StreakPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StreakPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> StreakPolicy {
        self.policy
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &ProgressStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProgressStore<S> {
        &mut self.store
    }

    fn default_progress(&self) -> RitualProgress {
        RitualProgress::started(self.clock.now())
    }

    /// Stored record for `challenge_id`, or a fresh default.
    ///
    /// The default is not persisted, and each call stamps it with the current
    /// instant, so day numbers derived from it drift between calls. Use
    /// [`progress_state`](Self::progress_state) to tell the two apart.
    pub fn challenge_progress(&self, challenge_id: &str) -> RitualProgress {
        match self.progress_state(challenge_id) {
            ProgressState::Found(progress) => progress,
            ProgressState::NotStarted => self.default_progress(),
        }
    }

    pub fn progress_state(&self, challenge_id: &str) -> ProgressState {
        match self.store.load().remove(challenge_id) {
            Some(progress) => ProgressState::Found(progress),
            None => ProgressState::NotStarted,
        }
    }

    /// Start `challenge_id` now, replacing any existing record.
    pub fn initialize_challenge(&mut self, challenge_id: &str) -> RitualProgress {
        let mut document = self.store.load_document();
        let progress = self.default_progress();
        document.insert(challenge_id, progress.clone());
        self.store.save_document(&document);
        tracing::info!(challenge_id, started_at = ?progress.started_at, "challenge initialized");
        progress
    }

    /// Mark one ritual done, refresh both streaks and persist.
    ///
    /// Marking an already completed ritual leaves the record unchanged but
    /// still writes it back. A challenge without a readable record is
    /// started now.
    pub fn mark_completed(
        &mut self,
        challenge_id: &str,
        day: u32,
        ritual: RitualType,
    ) -> RitualProgress {
        let mut document = self.store.load_document();
        let now = self.clock.now();
        let progress = document.record_mut(challenge_id, || RitualProgress::started(now));

        progress.completed.entry(day).or_default().mark(ritual);
        progress.refresh_streaks(self.policy);
        let updated = progress.clone();

        self.store.save_document(&document);
        tracing::info!(
            challenge_id,
            day,
            %ritual,
            morning_streak = updated.morning_streak,
            evening_streak = updated.evening_streak,
            "ritual completed"
        );
        updated
    }

    pub fn is_completed(&self, challenge_id: &str, day: u32, ritual: RitualType) -> bool {
        self.challenge_progress(challenge_id).is_completed(day, ritual)
    }

    /// Remove every trace of `challenge_id`.
    pub fn reset_challenge(&mut self, challenge_id: &str) {
        let mut document = self.store.load_document();
        document.remove(challenge_id);
        self.store.save_document(&document);
        tracing::info!(challenge_id, "challenge reset");
    }

    /// Whether any challenge has a stored record.
    pub fn has_started_challenge(&self) -> bool {
        !self.store.load().is_empty()
    }

    pub fn stats(&self, challenge_id: &str) -> ChallengeStats {
        ChallengeStats::from_progress(&self.challenge_progress(challenge_id))
    }

    /// Program day the user is on, from wall-clock time since the start.
    pub fn current_day(&self, challenge_id: &str) -> u32 {
        match self.challenge_progress(challenge_id).started_at() {
            Some(started_at) => day_number(started_at, self.clock.now(), PROGRAM_LENGTH_DAYS),
            None => 1,
        }
    }
}
