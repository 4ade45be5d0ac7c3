//! Fail-soft persistence of [`AllProgress`].
//!
//! `load` and `save` never return errors: a missing, corrupt or unavailable
//! store reads as empty and failed writes are logged and dropped. The
//! `try_*` variants expose the underlying [`StorageError`] for diagnostics.
//!
//! Records are decoded one challenge at a time. A record that is valid JSON
//! but not a readable progress record is skipped on read and written back
//! verbatim through [`ProgressDocument`], so other challenges never lose data
//! because of it.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::{AllProgress, RitualProgress};
use crate::error::StorageError;
use crate::storage::Storage;

/// Storage key holding the serialized progress map.
pub const PROGRESS_STORAGE_KEY: &str = "30-day-reset-progress";

/// The stored progress map as read for an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressDocument {
    pub records: AllProgress,
    /// Records that could not be decoded, kept as stored.
    pub unreadable: BTreeMap<String, serde_json::Value>,
}

impl ProgressDocument {
    /// Replace the record for `challenge_id`.
    pub fn insert(&mut self, challenge_id: &str, progress: RitualProgress) {
        self.unreadable.remove(challenge_id);
        self.records.insert(challenge_id.to_string(), progress);
    }

    /// Record for `challenge_id`, created with `default` when missing or unreadable.
    pub fn record_mut(
        &mut self,
        challenge_id: &str,
        default: impl FnOnce() -> RitualProgress,
    ) -> &mut RitualProgress {
        self.unreadable.remove(challenge_id);
        self.records
            .entry(challenge_id.to_string())
            .or_insert_with(default)
    }

    /// Drop `challenge_id`, readable or not.
    pub fn remove(&mut self, challenge_id: &str) {
        self.records.remove(challenge_id);
        self.unreadable.remove(challenge_id);
    }
}

impl From<AllProgress> for ProgressDocument {
    fn from(records: AllProgress) -> Self {
        Self {
            records,
            unreadable: BTreeMap::new(),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum StoredRecord<'a> {
    Readable(&'a RitualProgress),
    Raw(&'a serde_json::Value),
}

impl Serialize for ProgressDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: BTreeMap<&str, StoredRecord<'_>> = self
            .unreadable
            .iter()
            .map(|(id, raw)| (id.as_str(), StoredRecord::Raw(raw)))
            .collect();
        for (id, progress) in &self.records {
            entries.insert(id.as_str(), StoredRecord::Readable(progress));
        }
        entries.serialize(serializer)
    }
}

pub struct ProgressStore<S> {
    storage: S,
}

impl<S: Storage> ProgressStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Read the stored map, separating readable records from the rest.
    ///
    /// # Errors
    /// Returns the storage failure, or [`StorageError::Corrupt`] when the
    /// stored value is not a JSON object.
    pub fn try_load_document(&self) -> Result<ProgressDocument, StorageError> {
        let Some(raw) = self.storage.get(PROGRESS_STORAGE_KEY)? else {
            return Ok(ProgressDocument::default());
        };
        let entries: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                key: PROGRESS_STORAGE_KEY.to_string(),
                message: e.to_string(),
            })?;

        let mut document = ProgressDocument::default();
        for (challenge_id, value) in entries {
            match RitualProgress::deserialize(&value) {
                Ok(progress) => {
                    document.records.insert(challenge_id, progress);
                }
                Err(e) => {
                    tracing::warn!(%challenge_id, error = %e, "skipping unreadable progress record");
                    document.unreadable.insert(challenge_id, value);
                }
            }
        }
        Ok(document)
    }

    /// Read every readable record.
    ///
    /// # Errors
    /// See [`try_load_document`](Self::try_load_document).
    pub fn try_load(&self) -> Result<AllProgress, StorageError> {
        self.try_load_document().map(|document| document.records)
    }

    /// Read the stored map, or an empty one on any failure.
    pub fn load_document(&self) -> ProgressDocument {
        match self.try_load_document() {
            Ok(document) => {
                tracing::debug!(
                    challenges = document.records.len(),
                    unreadable = document.unreadable.len(),
                    "loaded progress"
                );
                document
            }
            Err(e) => {
                tracing::warn!(error = %e, "error loading progress, starting empty");
                ProgressDocument::default()
            }
        }
    }

    /// Read every readable record, or an empty map on any failure.
    pub fn load(&self) -> AllProgress {
        self.load_document().records
    }

    /// Overwrite the stored map, unreadable records included.
    ///
    /// # Errors
    /// Returns the storage failure.
    pub fn try_save_document(&mut self, document: &ProgressDocument) -> Result<(), StorageError> {
        let raw = serde_json::to_string(document).map_err(|e| StorageError::WriteFailed {
            key: PROGRESS_STORAGE_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.storage.set(PROGRESS_STORAGE_KEY, &raw)
    }

    /// Overwrite the stored map, logging and dropping failures.
    pub fn save_document(&mut self, document: &ProgressDocument) {
        match self.try_save_document(document) {
            Ok(()) => tracing::debug!(challenges = document.records.len(), "saved progress"),
            Err(e) => tracing::warn!(error = %e, "error saving progress"),
        }
    }

    /// Overwrite the stored progress map.
    ///
    /// # Errors
    /// Returns the storage failure.
    pub fn try_save(&mut self, all: &AllProgress) -> Result<(), StorageError> {
        self.try_save_document(&ProgressDocument::from(all.clone()))
    }

    /// Overwrite the stored progress map, logging and dropping failures.
    pub fn save(&mut self, all: &AllProgress) {
        self.save_document(&ProgressDocument::from(all.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::RitualProgress;
    use crate::storage::{MemoryStorage, UnavailableStorage};

    const VALID: &str = r#"{"30-day-reset":{"completed":{"1":{"morning":true,"evening":true},"2":{"morning":true}},"morningStreak":2,"eveningStreak":1,"startedAt":"2025-01-05T08:00:00.000Z"}}"#;

    fn store_with(raw: &str) -> ProgressStore<MemoryStorage> {
        let mut storage = MemoryStorage::new();
        storage.set(PROGRESS_STORAGE_KEY, raw).unwrap();
        ProgressStore::new(storage)
    }

    #[test]
    fn missing_value_loads_empty() {
        let store = ProgressStore::new(MemoryStorage::new());
        assert!(store.try_load().unwrap().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_value_loads_empty_but_reports_corrupt() {
        let store = store_with("{not json");
        assert!(matches!(store.try_load(), Err(StorageError::Corrupt { .. })));
        assert!(store.load().is_empty());
    }

    #[test]
    fn unavailable_storage_is_fail_soft() {
        let mut store = ProgressStore::new(UnavailableStorage::new("headless"));
        assert!(store.load().is_empty());
        let mut all = AllProgress::new();
        all.insert("x".into(), RitualProgress::default());
        store.save(&all);
        assert!(matches!(store.try_save(&all), Err(StorageError::Unavailable(_))));
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let mut store = ProgressStore::new(MemoryStorage::with_quota(VALID.len()));
        store.storage_mut().set(PROGRESS_STORAGE_KEY, VALID).unwrap();

        let mut all = store.load();
        all.insert("another-challenge".into(), RitualProgress::default());
        store.save(&all);

        assert_eq!(
            store.storage().get(PROGRESS_STORAGE_KEY).unwrap().as_deref(),
            Some(VALID)
        );
    }

    #[test]
    fn unreadable_record_is_skipped_and_kept() {
        let raw = r#"{"30-day-reset":{"completed":"oops"},"other":{"completed":{"1":{"morning":true}},"morningStreak":1,"eveningStreak":0}}"#;
        let mut store = store_with(raw);

        let mut document = store.try_load_document().unwrap();
        assert_eq!(document.records.len(), 1);
        assert!(document.records["other"].is_completed(1, crate::RitualType::Morning));
        assert!(document.unreadable.contains_key("30-day-reset"));

        document.record_mut("third", RitualProgress::default);
        store.save_document(&document);

        let json: serde_json::Value =
            serde_json::from_str(&store.storage().get(PROGRESS_STORAGE_KEY).unwrap().unwrap())
                .unwrap();
        assert_eq!(json["30-day-reset"]["completed"], "oops");
        assert_eq!(json["other"]["completed"]["1"]["morning"], true);
        assert!(json["third"].is_object());
    }

    #[test]
    fn removing_an_unreadable_record_drops_it() {
        let mut store = store_with(r#"{"30-day-reset":{"morningStreak":"many"}}"#);
        let mut document = store.load_document();
        document.remove("30-day-reset");
        store.save_document(&document);
        assert_eq!(
            store.storage().get(PROGRESS_STORAGE_KEY).unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn non_object_value_is_corrupt() {
        let store = store_with("[1,2,3]");
        assert!(matches!(store.try_load(), Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn save_of_load_is_byte_identical() {
        let mut store = store_with(VALID);
        let all = store.load();
        store.save(&all);
        assert_eq!(
            store.into_inner().get(PROGRESS_STORAGE_KEY).unwrap().as_deref(),
            Some(VALID)
        );
    }
}
