//! Local user profile collected during onboarding.
//!
//! Holds the user's name, email, ritual preference, chosen health priorities,
//! selected wearables and a set of onboarding flags. Flags such as `apple-health-connected` or
//! `lab-results-uploaded` only record that a screen was passed; nothing is
//! connected or uploaded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::challenge::RitualType;
use crate::error::{StorageError, ValidationError};
use crate::storage::Storage;

/// Storage key holding the serialized profile.
pub const PROFILE_STORAGE_KEY: &str = "30-day-reset-profile";

/// Device ids offered during onboarding.
pub const SUPPORTED_DEVICES: &[&str] = &["apple-health", "oura-ring", "whoop", "garmin"];

/// Which rituals the user chose to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RitualPreference {
    Morning,
    Evening,
    Both,
}

impl RitualPreference {
    pub fn includes(&self, ritual: RitualType) -> bool {
        match self {
            RitualPreference::Both => true,
            RitualPreference::Morning => ritual == RitualType::Morning,
            RitualPreference::Evening => ritual == RitualType::Evening,
        }
    }
}

impl fmt::Display for RitualPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RitualPreference::Morning => "morning",
            RitualPreference::Evening => "evening",
            RitualPreference::Both => "both",
        })
    }
}

impl FromStr for RitualPreference {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morning" => Ok(RitualPreference::Morning),
            "evening" => Ok(RitualPreference::Evening),
            "both" => Ok(RitualPreference::Both),
            _ => Err(ValidationError::InvalidValue {
                field: "ritualPreference".into(),
                message: format!("'{s}' is not one of morning, evening, both"),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ritual_preference: Option<RitualPreference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_priorities: Vec<String>,
    /// Selected wearables, in selection order. Nothing is actually paired.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connected_devices: Vec<String>,
    /// Check-in screens show every ritual as open.
    #[serde(default)]
    pub test_mode: bool,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub flags: BTreeSet<String>,
}

impl Profile {
    /// Set a profile field from text.
    ///
    /// Fields: `name`, `email`, `preference`, `priorities` (comma separated),
    /// `devices` (comma separated ids from [`SUPPORTED_DEVICES`]), `test-mode`.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] for unknown fields or unusable values.
    pub fn apply(&mut self, field: &str, value: &str) -> Result<(), ValidationError> {
        let value = value.trim();
        let invalid = |message: &str| ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.to_string(),
        };

        match field {
            "name" => {
                if value.is_empty() {
                    return Err(invalid("name must not be empty"));
                }
                self.name = Some(value.to_string());
            }
            "email" => {
                let valid = value
                    .split_once('@')
                    .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
                if !valid {
                    return Err(invalid("not an email address"));
                }
                self.email = Some(value.to_string());
            }
            "preference" => self.ritual_preference = Some(value.parse()?),
            "priorities" => {
                self.health_priorities = value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "devices" => {
                let mut devices: Vec<String> = Vec::new();
                for device in value.split(',').map(str::trim).filter(|d| !d.is_empty()) {
                    if !SUPPORTED_DEVICES.iter().any(|known| *known == device) {
                        return Err(ValidationError::InvalidValue {
                            field: field.to_string(),
                            message: format!(
                                "unknown device '{device}' (expected one of {})",
                                SUPPORTED_DEVICES.join(", ")
                            ),
                        });
                    }
                    if !devices.iter().any(|d| d == device) {
                        devices.push(device.to_string());
                    }
                }
                if devices.is_empty() {
                    return Err(invalid("select at least one device"));
                }
                self.connected_devices = devices;
            }
            "test-mode" => {
                self.test_mode = value
                    .parse::<bool>()
                    .map_err(|_| invalid("expected true or false"))?;
            }
            _ => return Err(invalid("unknown profile field")),
        }
        Ok(())
    }

    pub fn set_flag(&mut self, flag: &str, on: bool) {
        if on {
            self.flags.insert(flag.to_string());
        } else {
            self.flags.remove(flag);
        }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }
}

/// Read the stored profile.
///
/// # Errors
/// Returns the storage failure or [`StorageError::Corrupt`].
pub fn try_load_profile<S: Storage + ?Sized>(storage: &S) -> Result<Profile, StorageError> {
    let Some(raw) = storage.get(PROFILE_STORAGE_KEY)? else {
        return Ok(Profile::default());
    };
    serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
        key: PROFILE_STORAGE_KEY.to_string(),
        message: e.to_string(),
    })
}

/// Read the stored profile, or an empty one on any failure.
pub fn load_profile<S: Storage + ?Sized>(storage: &S) -> Profile {
    try_load_profile(storage).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "error loading profile");
        Profile::default()
    })
}

/// Overwrite the stored profile, logging and dropping failures.
pub fn save_profile<S: Storage + ?Sized>(storage: &mut S, profile: &Profile) {
    let result = serde_json::to_string(profile)
        .map_err(|e| StorageError::WriteFailed {
            key: PROFILE_STORAGE_KEY.to_string(),
            message: e.to_string(),
        })
        .and_then(|raw| storage.set(PROFILE_STORAGE_KEY, &raw));
    if let Err(e) = result {
        tracing::warn!(error = %e, "error saving profile");
    }
}
