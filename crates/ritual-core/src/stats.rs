//! Aggregate statistics over one challenge's progress.

use serde::{Deserialize, Serialize};

use crate::challenge::RitualType;
use crate::display::calculate_percentage;
use crate::progress::RitualProgress;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStats {
    pub total_morning_completed: u32,
    pub total_evening_completed: u32,
    /// Days with both rituals done.
    pub total_days_with_both_completed: u32,
    /// Days with any completion entry.
    pub total_days_started: u32,
    pub morning_streak: u32,
    pub evening_streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
}

impl ChallengeStats {
    pub fn from_progress(progress: &RitualProgress) -> Self {
        let mut stats = ChallengeStats {
            total_days_started: progress.completed.len() as u32,
            morning_streak: progress.morning_streak,
            evening_streak: progress.evening_streak,
            started_at: progress.started_at.clone(),
            ..Default::default()
        };

        for completion in progress.completed.values() {
            if completion.is_done(RitualType::Morning) {
                stats.total_morning_completed += 1;
            }
            if completion.is_done(RitualType::Evening) {
                stats.total_evening_completed += 1;
            }
            if completion.is_perfect() {
                stats.total_days_with_both_completed += 1;
            }
        }
        stats
    }

    /// Percent of all morning and evening check-ins of a `total_days` program.
    pub fn overall_percentage(&self, total_days: u32) -> u32 {
        calculate_percentage(
            self.total_morning_completed + self.total_evening_completed,
            total_days.saturating_mul(2),
        )
    }

    /// Shareable one-line summary.
    pub fn share_message(&self, challenge_name: &str, total_days: u32) -> String {
        format!(
            "I'm {}% through my {challenge_name} journey! 🌱 Morning streak: {} days, Evening streak: {} days.",
            self.overall_percentage(total_days),
            self.morning_streak,
            self.evening_streak
        )
    }

    pub fn total_completed(&self, ritual: RitualType) -> u32 {
        match ritual {
            RitualType::Morning => self.total_morning_completed,
            RitualType::Evening => self.total_evening_completed,
        }
    }
}
