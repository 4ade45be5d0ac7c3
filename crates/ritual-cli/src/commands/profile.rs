use clap::Subcommand;
use ritual_core::profile::{load_profile, save_profile};

use super::{CommandResult, Session};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the profile as JSON
    Show,
    /// Set a profile field
    Set {
        /// name, email, preference, priorities, devices or test-mode
        field: String,
        value: String,
    },
    /// Record an onboarding flag (e.g. apple-health-connected)
    Flag {
        name: String,
        /// Clear the flag instead of setting it
        #[arg(long)]
        off: bool,
    },
}

pub fn run(action: ProfileAction) -> CommandResult {
    let mut session = Session::open(None);
    let storage = session.tracker.store_mut().storage_mut();
    let mut profile = load_profile(&*storage);

    match action {
        ProfileAction::Show => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
            return Ok(());
        }
        ProfileAction::Set { field, value } => profile.apply(&field, &value)?,
        ProfileAction::Flag { name, off } => profile.set_flag(&name, !off),
    }

    save_profile(storage, &profile);
    println!("ok");
    Ok(())
}
