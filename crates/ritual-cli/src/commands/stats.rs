use serde::Serialize;

use ritual_core::display::{calculate_percentage, format_date, streak_emoji, streak_message};
use ritual_core::{challenge_by_id, total_days, ChallengeStats, RitualType, ValidationError};

use super::{CommandResult, Session};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport {
    challenge_id: String,
    current_day: u32,
    total_days: u32,
    overall_percentage: u32,
    #[serde(flatten)]
    stats: ChallengeStats,
}

pub fn run(challenge: Option<String>, json: bool, share: bool) -> CommandResult {
    let session = Session::open(challenge);
    let challenge_id = session.challenge_id.as_str();
    let stats = session.tracker.stats(challenge_id);
    let total_days = total_days(challenge_id);
    let report = StatsReport {
        challenge_id: challenge_id.to_string(),
        current_day: session.tracker.current_day(challenge_id),
        total_days,
        overall_percentage: stats.overall_percentage(total_days),
        stats,
    };

    if share {
        let challenge = challenge_by_id(challenge_id)
            .ok_or_else(|| ValidationError::UnknownChallenge(challenge_id.to_string()))?;
        println!("{}", report.stats.share_message(&challenge.name, total_days));
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let stats = &report.stats;
    if let Some(started) = stats.started_at.as_deref().and_then(format_date) {
        println!("Started          {started}");
    }
    println!("Current day      {} / {}", report.current_day, report.total_days);
    println!("Overall          {}%", report.overall_percentage);
    for ritual in RitualType::ALL {
        let done = stats.total_completed(ritual);
        println!(
            "{:<16} {done}/{} ({}%)",
            format!("{} rituals", capitalize(ritual.as_str())),
            report.total_days,
            calculate_percentage(done, report.total_days)
        );
    }
    println!("Perfect days     {}", stats.total_days_with_both_completed);
    println!("Days started     {}", stats.total_days_started);
    for (ritual, streak) in [
        (RitualType::Morning, stats.morning_streak),
        (RitualType::Evening, stats.evening_streak),
    ] {
        println!(
            "{:<16} {streak} {} {}",
            format!("{} streak", capitalize(ritual.as_str())),
            streak_emoji(streak),
            streak_message(streak)
        );
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
