//! Check-in view: a day's rituals with their completion state.

use serde::Serialize;

use crate::challenge::{challenge_by_id, DayEntry, RitualType};
use crate::clock::Clock;
use crate::progress::ProgressTracker;
use crate::storage::Storage;

/// One ritual slot of a check-in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RitualSlot<'a> {
    pub entry: &'a DayEntry,
    pub completed: bool,
}

/// Everything the check-in screen shows for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinView<'a> {
    pub challenge_id: &'a str,
    pub challenge_name: &'a str,
    pub day: u32,
    pub total_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning: Option<RitualSlot<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evening: Option<RitualSlot<'a>>,
}

impl<'a> CheckinView<'a> {
    pub fn slot(&self, ritual: RitualType) -> Option<&RitualSlot<'a>> {
        match ritual {
            RitualType::Morning => self.morning.as_ref(),
            RitualType::Evening => self.evening.as_ref(),
        }
    }

    /// Both scheduled rituals of the day are done.
    pub fn is_complete(&self) -> bool {
        [&self.morning, &self.evening]
            .into_iter()
            .flatten()
            .all(|slot| slot.completed)
    }

    /// Show every slot as not yet done, as test mode does.
    pub fn unchecked(mut self) -> Self {
        for slot in [&mut self.morning, &mut self.evening].into_iter().flatten() {
            slot.completed = false;
        }
        self
    }
}

impl<S: Storage, C: Clock> ProgressTracker<S, C> {
    /// Check-in view for `day`; `None` if the challenge or day is unknown.
    pub fn checkin(&self, challenge_id: &str, day: u32) -> Option<CheckinView<'static>> {
        let challenge = challenge_by_id(challenge_id)?;
        let progress = self.challenge_progress(challenge_id);
        let slot = |ritual: RitualType| {
            challenge.entry(day, ritual).map(|entry| RitualSlot {
                entry,
                completed: progress.is_completed(day, ritual),
            })
        };

        let view = CheckinView {
            challenge_id: &challenge.id,
            challenge_name: &challenge.name,
            day,
            total_days: challenge.total_days(),
            morning: slot(RitualType::Morning),
            evening: slot(RitualType::Evening),
        };
        if view.morning.is_none() && view.evening.is_none() {
            return None;
        }
        Some(view)
    }

    /// Check-in view for the current day.
    pub fn today(&self, challenge_id: &str) -> Option<CheckinView<'static>> {
        self.checkin(challenge_id, self.current_day(challenge_id))
    }
}
