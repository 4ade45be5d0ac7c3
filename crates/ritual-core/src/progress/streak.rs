//! Consecutive-day streaks derived from completion flags.
//!
//! A streak counts back from the highest recorded day and stops at the
//! first day the ritual was not done. There is no grace day.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::DayCompletion;
use crate::challenge::RitualType;

/// How days with no completion entry at all are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// Every day number below the latest recorded day counts; a day that was
    /// never touched breaks the streak.
    #[default]
    Contiguous,
    /// Only recorded days are scanned; untouched days are skipped.
    KeysOnly,
}

/// Morning and evening streak lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streaks {
    pub morning: u32,
    pub evening: u32,
}

pub fn compute_streaks(completed: &BTreeMap<u32, DayCompletion>, policy: StreakPolicy) -> Streaks {
    Streaks {
        morning: streak_for(completed, RitualType::Morning, policy),
        evening: streak_for(completed, RitualType::Evening, policy),
    }
}

fn streak_for(
    completed: &BTreeMap<u32, DayCompletion>,
    ritual: RitualType,
    policy: StreakPolicy,
) -> u32 {
    match policy {
        StreakPolicy::KeysOnly => completed
            .values()
            .rev()
            .take_while(|completion| completion.is_done(ritual))
            .count() as u32,
        StreakPolicy::Contiguous => {
            let Some(&latest) = completed.keys().next_back() else {
                return 0;
            };
            (1..=latest)
                .rev()
                .take_while(|day| {
                    completed
                        .get(day)
                        .is_some_and(|completion| completion.is_done(ritual))
                })
                .count() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn done(morning: bool, evening: bool) -> DayCompletion {
        DayCompletion {
            morning: morning.then_some(true),
            evening: evening.then_some(true),
        }
    }

    fn mornings(days: &[u32]) -> BTreeMap<u32, DayCompletion> {
        days.iter().map(|&d| (d, done(true, false))).collect()
    }

    #[test]
    fn empty_map_has_no_streak() {
        let streaks = compute_streaks(&BTreeMap::new(), StreakPolicy::Contiguous);
        assert_eq!(streaks, Streaks::default());
        let streaks = compute_streaks(&BTreeMap::new(), StreakPolicy::KeysOnly);
        assert_eq!(streaks, Streaks::default());
    }

    #[test]
    fn unbroken_run_counts_every_day() {
        let completed = mornings(&[1, 2, 3, 4, 5]);
        for policy in [StreakPolicy::Contiguous, StreakPolicy::KeysOnly] {
            let streaks = compute_streaks(&completed, policy);
            assert_eq!(streaks.morning, 5);
            assert_eq!(streaks.evening, 0);
        }
    }

    #[test]
    fn untouched_day_breaks_contiguous_streak() {
        let completed = mornings(&[1, 2, 4, 5]);
        assert_eq!(compute_streaks(&completed, StreakPolicy::Contiguous).morning, 2);
    }

    #[test]
    fn untouched_day_is_skipped_by_keys_only_streak() {
        let completed = mornings(&[1, 2, 4, 5]);
        assert_eq!(compute_streaks(&completed, StreakPolicy::KeysOnly).morning, 4);
    }

    #[test]
    fn recorded_day_without_flag_breaks_both_policies() {
        let mut completed = mornings(&[1, 2, 4, 5]);
        completed.insert(3, done(false, true));
        for policy in [StreakPolicy::Contiguous, StreakPolicy::KeysOnly] {
            assert_eq!(compute_streaks(&completed, policy).morning, 2);
        }
    }

    #[test]
    fn latest_day_missing_ritual_means_zero() {
        let mut completed = mornings(&[1, 2, 3]);
        completed.insert(4, done(false, true));
        let streaks = compute_streaks(&completed, StreakPolicy::Contiguous);
        assert_eq!(streaks.morning, 0);
        assert_eq!(streaks.evening, 1);
    }

    proptest! {
        #[test]
        fn contiguous_never_exceeds_keys_only(days in proptest::collection::btree_set(1u32..=30, 0..30)) {
            let completed: BTreeMap<u32, DayCompletion> =
                days.iter().map(|&d| (d, done(true, d % 2 == 0))).collect();
            let strict = compute_streaks(&completed, StreakPolicy::Contiguous);
            let loose = compute_streaks(&completed, StreakPolicy::KeysOnly);
            prop_assert!(strict.morning <= loose.morning);
            prop_assert!(strict.evening <= loose.evening);
            prop_assert!(loose.morning as usize <= completed.len());
        }
    }
}
