use ritual_core::display::{format_date, streak_emoji};
use ritual_core::profile::load_profile;
use ritual_core::{
    challenge_by_id, Challenge, CheckinView, RitualSlot, RitualType, ValidationError,
};

use super::{parse_ritual, CommandResult, Session};

fn require_challenge(challenge_id: &str) -> Result<&'static Challenge, ValidationError> {
    challenge_by_id(challenge_id)
        .ok_or_else(|| ValidationError::UnknownChallenge(challenge_id.to_string()))
}

pub fn start(challenge: Option<String>, force: bool) -> CommandResult {
    let mut session = Session::open(challenge);
    let challenge = require_challenge(&session.challenge_id)?;

    if session.tracker.progress_state(&challenge.id).is_started() && !force {
        return Err(format!(
            "{} is already started (use --force to restart)",
            challenge.name
        )
        .into());
    }

    let progress = session.tracker.initialize_challenge(&challenge.id);
    let started = progress
        .started_at
        .as_deref()
        .and_then(format_date)
        .unwrap_or_default();
    println!("Started {} on {started}", challenge.name);
    Ok(())
}

pub fn today(challenge: Option<String>, json: bool) -> CommandResult {
    let session = Session::open(challenge);
    let challenge = require_challenge(&session.challenge_id)?;

    if !session.tracker.progress_state(&challenge.id).is_started() {
        println!("{} has not been started yet. Run `ritual start`.", challenge.name);
        return Ok(());
    }

    let view = session
        .tracker
        .today(&challenge.id)
        .ok_or("Challenge or day not found.")?;
    render(&session, view, json)
}

pub fn checkin(challenge: Option<String>, day: u32, json: bool) -> CommandResult {
    let session = Session::open(challenge);
    let view = session
        .tracker
        .checkin(&session.challenge_id, day)
        .ok_or("Challenge or day not found.")?;
    render(&session, view, json)
}

pub fn check(challenge: Option<String>, ritual: &str, day: Option<u32>) -> CommandResult {
    let ritual = parse_ritual(ritual)?;
    let mut session = Session::open(challenge);
    let challenge = require_challenge(&session.challenge_id)?;

    let total_days = challenge.total_days();
    let day = day.unwrap_or_else(|| session.tracker.current_day(&challenge.id));
    if day == 0 || day > total_days {
        return Err(ValidationError::DayOutOfRange {
            challenge_id: challenge.id.clone(),
            day,
            total_days,
        }
        .into());
    }

    let progress = session.tracker.mark_completed(&challenge.id, day, ritual);
    let streak = progress.streak(ritual);
    println!("Day {day} {ritual} ritual completed. Well done!");
    println!("{ritual} streak: {streak} {}", streak_emoji(streak));
    Ok(())
}

pub fn status(challenge: Option<String>, day: u32, ritual: &str) -> CommandResult {
    let ritual = parse_ritual(ritual)?;
    let session = Session::open(challenge);
    println!(
        "{}",
        session
            .tracker
            .is_completed(&session.challenge_id, day, ritual)
    );
    Ok(())
}

pub fn reset(challenge: Option<String>) -> CommandResult {
    let mut session = Session::open(challenge);
    let challenge_id = session.challenge_id.clone();
    session.tracker.reset_challenge(&challenge_id);
    println!("progress for {challenge_id} reset");
    Ok(())
}

fn render(session: &Session, view: CheckinView<'_>, json: bool) -> CommandResult {
    let profile = load_profile(session.tracker.store().storage());
    let view = if profile.test_mode {
        view.unchecked()
    } else {
        view
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{} - Day {} of {}", view.challenge_name, view.day, view.total_days);
    for ritual in RitualType::ALL {
        let preferred = profile
            .ritual_preference
            .map_or(true, |preference| preference.includes(ritual));
        if let (true, Some(slot)) = (preferred, view.slot(ritual)) {
            print_slot(ritual, slot);
        }
    }
    Ok(())
}

fn print_slot(ritual: RitualType, slot: &RitualSlot<'_>) {
    let label = match ritual {
        RitualType::Morning => "Morning",
        RitualType::Evening => "Evening",
    };
    let mark = if slot.completed { "x" } else { " " };
    let entry = slot.entry;
    println!();
    println!("[{mark}] {label}: {}", entry.title);
    println!("    Today's Focus: {}", entry.micro_bite);

    let details = [
        (&entry.action, &entry.action_description),
        (&entry.product, &entry.product_description),
        (&entry.content, &entry.content_description),
    ];
    for (title, description) in details {
        if let Some(title) = title {
            match description {
                Some(description) => println!("    - {title}: {description}"),
                None => println!("    - {title}"),
            }
        }
    }

    for step in &entry.steps {
        println!("    {}. {} ({})", step.id, step.title, step.duration);
        println!("       {}", step.tips);
    }
}
