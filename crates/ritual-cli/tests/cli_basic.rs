//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ritual"))
        .args(args)
        .env("RITUAL_RESET_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command {args:?} failed: {stderr}");
    stdout
}

fn run_json(home: &Path, args: &[&str]) -> serde_json::Value {
    let stdout = run_cli_success(home, args);
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_today_before_start() {
    let home = TempDir::new().unwrap();
    let stdout = run_cli_success(home.path(), &["today"]);
    assert!(stdout.contains("has not been started"));
}

#[test]
fn test_start_and_today() {
    let home = TempDir::new().unwrap();
    let stdout = run_cli_success(home.path(), &["start"]);
    assert!(stdout.contains("Started 30-Day Reset"));

    let stdout = run_cli_success(home.path(), &["today"]);
    assert!(stdout.contains("Day 1 of 30"));
    assert!(stdout.contains("Hydration First"));

    let view = run_json(home.path(), &["today", "--json"]);
    assert_eq!(view["day"], 1);
    assert_eq!(view["morning"]["completed"], false);
    assert_eq!(view["evening"]["entry"]["steps"].as_array().unwrap().len(), 3);
}

#[test]
fn test_start_twice_requires_force() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["start"]);
    let (_, stderr, code) = run_cli(home.path(), &["start"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("already started"));
    run_cli_success(home.path(), &["start", "--force"]);
}

#[test]
fn test_check_and_status() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["start"]);

    let stdout = run_cli_success(home.path(), &["check", "morning"]);
    assert!(stdout.contains("Day 1 morning ritual completed"));

    assert_eq!(run_cli_success(home.path(), &["status", "1", "morning"]).trim(), "true");
    assert_eq!(run_cli_success(home.path(), &["status", "1", "evening"]).trim(), "false");

    let view = run_json(home.path(), &["checkin", "1", "--json"]);
    assert_eq!(view["morning"]["completed"], true);
}

#[test]
fn test_check_rejects_bad_input() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["check", "evening", "--day", "31"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Day 31"));

    let (_, stderr, code) = run_cli(home.path(), &["check", "noon"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("noon"));
}

#[test]
fn test_stats_json() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["start"]);
    run_cli_success(home.path(), &["check", "morning", "--day", "1"]);
    run_cli_success(home.path(), &["check", "evening", "--day", "1"]);
    run_cli_success(home.path(), &["check", "morning", "--day", "2"]);

    let stats = run_json(home.path(), &["stats", "--json"]);
    assert_eq!(stats["totalMorningCompleted"], 2);
    assert_eq!(stats["totalEveningCompleted"], 1);
    assert_eq!(stats["totalDaysWithBothCompleted"], 1);
    assert_eq!(stats["totalDaysStarted"], 2);
    assert_eq!(stats["morningStreak"], 2);
    assert_eq!(stats["eveningStreak"], 0);
    assert_eq!(stats["totalDays"], 30);
    assert_eq!(stats["currentDay"], 1);
    assert_eq!(stats["overallPercentage"], 5);

    let text = run_cli_success(home.path(), &["stats"]);
    assert!(text.contains("Perfect days"));
    assert!(text.contains("Overall          5%"));

    let share = run_cli_success(home.path(), &["stats", "--share"]);
    assert_eq!(
        share.trim(),
        "I'm 5% through my 30-Day Reset journey! 🌱 Morning streak: 2 days, Evening streak: 0 days."
    );
}

#[test]
fn test_reset_clears_progress() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["check", "morning", "--day", "3"]);
    assert_eq!(run_cli_success(home.path(), &["status", "3", "morning"]).trim(), "true");

    run_cli_success(home.path(), &["reset"]);
    assert_eq!(run_cli_success(home.path(), &["status", "3", "morning"]).trim(), "false");
}

#[test]
fn test_sqlite_backend() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["config", "set", "storage.backend", "sqlite"]);
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "storage.backend"]).trim(),
        "sqlite"
    );

    run_cli_success(home.path(), &["check", "evening", "--day", "2"]);
    assert!(home.path().join("ritual-reset.db").exists());
    assert_eq!(run_cli_success(home.path(), &["status", "2", "evening"]).trim(), "true");
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "get", "storage.nope"]);
    assert_ne!(code, 0);
    let (_, _, code) = run_cli(home.path(), &["config", "set", "streak_policy", "lenient"]);
    assert_ne!(code, 0);
    run_cli_success(home.path(), &["config", "list"]);
}

#[test]
fn test_profile_test_mode_unchecks_rituals() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["check", "morning", "--day", "1"]);
    run_cli_success(home.path(), &["profile", "set", "test-mode", "true"]);
    run_cli_success(home.path(), &["profile", "flag", "apple-health-connected"]);
    run_cli_success(home.path(), &["profile", "set", "devices", "apple-health,oura-ring"]);

    let view = run_json(home.path(), &["checkin", "1", "--json"]);
    assert_eq!(view["morning"]["completed"], false);

    let profile = run_json(home.path(), &["profile", "show"]);
    assert_eq!(profile["testMode"], true);
    assert_eq!(profile["flags"][0], "apple-health-connected");
    assert_eq!(profile["connectedDevices"][1], "oura-ring");
}

#[test]
fn test_diagnostics_reports_corrupt_store() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("30-day-reset-progress.json"), "{broken").unwrap();

    let report = run_json(home.path(), &["diagnostics"]);
    assert_eq!(report["progress"]["status"], "corrupt");
    assert_eq!(report["profile"]["status"], "ok");

    // Reads stay fail-soft.
    assert_eq!(run_cli_success(home.path(), &["status", "1", "morning"]).trim(), "false");
}

#[test]
fn test_challenge_day_and_completions() {
    let home = TempDir::new().unwrap();
    let entries = run_json(home.path(), &["challenge", "day", "16"]);
    assert_eq!(entries["evening"]["title"], "Box Breathing");

    let (_, _, code) = run_cli(home.path(), &["challenge", "day", "0"]);
    assert_ne!(code, 0);

    let (_, _, code) = run_cli(home.path(), &["--challenge", "missing", "challenge", "show"]);
    assert_ne!(code, 0);

    let script = run_cli_success(home.path(), &["completions", "bash"]);
    assert!(script.contains("ritual"));
}

#[test]
fn test_preference_limits_text_checkin() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["profile", "set", "preference", "evening"]);

    let stdout = run_cli_success(home.path(), &["checkin", "1"]);
    assert!(stdout.contains("Evening:"));
    assert!(!stdout.contains("Hydration First"));

    let (_, _, code) = run_cli(home.path(), &["profile", "set", "preference", "noon"]);
    assert_ne!(code, 0);
}

#[test]
fn test_diagnostics_names_unreadable_records() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("30-day-reset-progress.json"),
        r#"{"old":{"completed":"oops"},"30-day-reset":{"completed":{"1":{"morning":true}}}}"#,
    )
    .unwrap();

    let report = run_json(home.path(), &["diagnostics"]);
    assert_eq!(report["progress"]["status"], "partial");
    assert_eq!(report["progress"]["records"], 1);
    assert_eq!(report["progress"]["unreadable"][0], "old");

    run_cli_success(home.path(), &["check", "evening", "--day", "1"]);
    let raw = std::fs::read_to_string(home.path().join("30-day-reset-progress.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["old"]["completed"], "oops");
    assert_eq!(stored["30-day-reset"]["completed"]["1"]["morning"], true);
    assert_eq!(stored["30-day-reset"]["completed"]["1"]["evening"], true);
}
