//! Labels and formatting for progress screens.

use chrono::{DateTime, Utc};

/// Whole-number percentage of `completed` out of `total`; 0 when `total` is 0.
pub fn calculate_percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

pub fn streak_emoji(count: u32) -> &'static str {
    match count {
        0..=2 => "🌱",
        3..=6 => "💪",
        7..=13 => "⭐",
        14..=20 => "🔥",
        21..=29 => "💎",
        _ => "🏆",
    }
}

pub fn streak_message(count: u32) -> &'static str {
    match count {
        0 => "Begin your journey!",
        1..=2 => "Great start!",
        3..=6 => "Building the habit!",
        7..=13 => "Great momentum!",
        14..=20 => "Amazing consistency!",
        21..=29 => "You are unstoppable!",
        _ => "Incredible dedication!",
    }
}

/// Long English date of an ISO-8601 timestamp, e.g. `January 5, 2025`.
pub fn format_date(timestamp: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).ok()?;
    Some(parsed.with_timezone(&Utc).format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_and_handles_zero_total() {
        assert_eq!(calculate_percentage(0, 0), 0);
        assert_eq!(calculate_percentage(1, 3), 33);
        assert_eq!(calculate_percentage(2, 3), 67);
        assert_eq!(calculate_percentage(30, 30), 100);
    }

    #[test]
    fn streak_tiers() {
        assert_eq!(streak_emoji(0), "🌱");
        assert_eq!(streak_emoji(3), "💪");
        assert_eq!(streak_emoji(7), "⭐");
        assert_eq!(streak_emoji(20), "🔥");
        assert_eq!(streak_emoji(21), "💎");
        assert_eq!(streak_emoji(31), "🏆");

        assert_eq!(streak_message(0), "Begin your journey!");
        assert_eq!(streak_message(1), "Great start!");
        assert_eq!(streak_message(2), "Great start!");
        assert_eq!(streak_message(14), "Amazing consistency!");
        assert_eq!(streak_message(30), "Incredible dedication!");
    }

    #[test]
    fn formats_iso_dates() {
        assert_eq!(
            format_date("2025-01-05T08:00:00.000Z").as_deref(),
            Some("January 5, 2025")
        );
        assert!(format_date("not a date").is_none());
    }
}
