//! Storage health report.

use serde_json::json;

use ritual_core::profile::try_load_profile;
use ritual_core::StorageError;

use super::{CommandResult, Session};

fn describe(result: Result<serde_json::Value, StorageError>) -> serde_json::Value {
    match result {
        Ok(report) => report,
        Err(e) => {
            let kind = match e {
                StorageError::Unavailable(_) => "unavailable",
                StorageError::Corrupt { .. } => "corrupt",
                StorageError::WriteFailed { .. } => "write_failed",
                StorageError::Backend(_) => "backend",
            };
            json!({ "status": kind, "error": e.to_string() })
        }
    }
}

pub fn run() -> CommandResult {
    let session = Session::open(None);
    let store = session.tracker.store();

    let report = json!({
        "version": env!("CARGO_PKG_VERSION"),
        "backend": session.config.storage.backend,
        "dataDir": session
            .config
            .resolved_data_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|e| e.to_string()),
        "streakPolicy": session.config.streak_policy,
        "progress": describe(store.try_load_document().map(|document| {
            let unreadable: Vec<&String> = document.unreadable.keys().collect();
            json!({
                "status": if unreadable.is_empty() { "ok" } else { "partial" },
                "records": document.records.len(),
                "unreadable": unreadable,
            })
        })),
        "profile": describe(
            try_load_profile(store.storage()).map(|_| json!({ "status": "ok", "records": 1 }))
        ),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
