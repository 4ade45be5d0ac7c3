use clap::Subcommand;
use serde_json::json;

use ritual_core::{challenge_by_id, day_entries, ValidationError};

use super::{CommandResult, Session};

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Show the challenge summary
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Print the entries scheduled for a day as JSON
    Day { day: u32 },
}

pub fn run(challenge: Option<String>, action: ChallengeAction) -> CommandResult {
    let session = Session::open(challenge);
    let challenge = challenge_by_id(&session.challenge_id)
        .ok_or_else(|| ValidationError::UnknownChallenge(session.challenge_id.clone()))?;

    match action {
        ChallengeAction::Show { json } => {
            if json {
                let summary = json!({
                    "id": challenge.id,
                    "name": challenge.name,
                    "description": challenge.description,
                    "totalDays": challenge.total_days(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} ({})", challenge.name, challenge.id);
                println!("{}", challenge.description);
                println!("{} days, morning and evening rituals", challenge.total_days());
            }
        }
        ChallengeAction::Day { day } => {
            let entries = day_entries(&challenge.id, day);
            if entries.is_empty() {
                return Err(ValidationError::DayOutOfRange {
                    challenge_id: challenge.id.clone(),
                    day,
                    total_days: challenge.total_days(),
                }
                .into());
            }
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}
