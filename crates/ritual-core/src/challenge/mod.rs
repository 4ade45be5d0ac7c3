//! Static challenge definitions and lookups.
//!
//! A challenge is a fixed schedule of numbered days, each with one morning
//! and one evening ritual. The catalog is built once and never mutated.

mod catalog;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub use catalog::{challenges, DEFAULT_CHALLENGE_ID};

/// Time slot of a ritual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RitualType {
    Morning,
    Evening,
}

impl RitualType {
    pub const ALL: [RitualType; 2] = [RitualType::Morning, RitualType::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            RitualType::Morning => "morning",
            RitualType::Evening => "evening",
        }
    }
}

impl fmt::Display for RitualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RitualType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morning" => Ok(RitualType::Morning),
            "evening" => Ok(RitualType::Evening),
            other => Err(format!("unknown ritual '{other}' (expected morning or evening)")),
        }
    }
}

/// One guided step of a richer ritual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_audio: Option<bool>,
    pub tips: String,
    pub why: String,
}

/// One scheduled ritual instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub day: u32,
    pub ritual: RitualType,
    pub title: String,
    pub micro_bite: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

impl DayEntry {
    /// Plain entry with only a title and micro bite.
    pub fn new(day: u32, ritual: RitualType, title: &str, micro_bite: &str) -> Self {
        Self {
            day,
            ritual,
            title: title.to_string(),
            micro_bite: micro_bite.to_string(),
            header_image_url: None,
            action: None,
            action_description: None,
            product: None,
            product_description: None,
            content: None,
            content_description: None,
            steps: Vec::new(),
        }
    }
}

/// A named program of day entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub days: Vec<DayEntry>,
}

impl Challenge {
    /// Entry for a `(day, ritual)` slot, if scheduled.
    pub fn entry(&self, day: u32, ritual: RitualType) -> Option<&DayEntry> {
        self.days
            .iter()
            .find(|entry| entry.day == day && entry.ritual == ritual)
    }

    /// Number of distinct day numbers in the schedule.
    pub fn total_days(&self) -> u32 {
        self.days
            .iter()
            .map(|entry| entry.day)
            .collect::<BTreeSet<_>>()
            .len() as u32
    }
}

/// Morning and evening entries for one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayEntries<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning: Option<&'a DayEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evening: Option<&'a DayEntry>,
}

impl<'a> DayEntries<'a> {
    pub fn get(&self, ritual: RitualType) -> Option<&'a DayEntry> {
        match ritual {
            RitualType::Morning => self.morning,
            RitualType::Evening => self.evening,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_none() && self.evening.is_none()
    }
}

pub fn challenge_by_id(id: &str) -> Option<&'static Challenge> {
    challenges().iter().find(|challenge| challenge.id == id)
}

/// Morning and evening entries for `day`; empty when the challenge or day is unknown.
pub fn day_entries(challenge_id: &str, day: u32) -> DayEntries<'static> {
    match challenge_by_id(challenge_id) {
        Some(challenge) => DayEntries {
            morning: challenge.entry(day, RitualType::Morning),
            evening: challenge.entry(day, RitualType::Evening),
        },
        None => DayEntries::default(),
    }
}

/// Distinct day count of a challenge; 0 for unknown ids.
pub fn total_days(challenge_id: &str) -> u32 {
    challenge_by_id(challenge_id).map_or(0, Challenge::total_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_challenge_has_thirty_days() {
        assert_eq!(total_days(DEFAULT_CHALLENGE_ID), 30);
    }

    #[test]
    fn every_day_has_one_morning_and_one_evening() {
        let challenge = challenge_by_id(DEFAULT_CHALLENGE_ID).unwrap();
        for day in 1..=30 {
            for ritual in RitualType::ALL {
                let count = challenge
                    .days
                    .iter()
                    .filter(|e| e.day == day && e.ritual == ritual)
                    .count();
                assert_eq!(count, 1, "day {day} {ritual}");
            }
        }
    }

    #[test]
    fn day_entries_returns_both_slots() {
        let entries = day_entries(DEFAULT_CHALLENGE_ID, 1);
        assert_eq!(entries.morning.unwrap().title, "Hydration First");
        assert_eq!(entries.evening.unwrap().steps.len(), 3);
        assert_eq!(entries.get(RitualType::Evening).unwrap().day, 1);
    }

    #[test]
    fn unknown_lookups_are_empty() {
        assert!(challenge_by_id("missing").is_none());
        assert!(day_entries("missing", 1).is_empty());
        assert!(day_entries(DEFAULT_CHALLENGE_ID, 31).is_empty());
        assert_eq!(total_days("missing"), 0);
    }

    #[test]
    fn ritual_type_parses_case_insensitively() {
        assert_eq!("Morning".parse::<RitualType>().unwrap(), RitualType::Morning);
        assert_eq!("evening".parse::<RitualType>().unwrap(), RitualType::Evening);
        assert!("noon".parse::<RitualType>().is_err());
    }

    #[test]
    fn day_entry_serializes_camel_case_and_skips_empty() {
        let entry = DayEntry::new(4, RitualType::Morning, "Mindful Start", "bite");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["microBite"], "bite");
        assert_eq!(json["ritual"], "morning");
        assert!(json.get("steps").is_none());
        assert!(json.get("action").is_none());
    }
}
