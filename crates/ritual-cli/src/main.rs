use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "ritual", version, about = "30-Day Reset CLI")]
struct Cli {
    /// Challenge to operate on (defaults to the configured challenge)
    #[arg(long, global = true)]
    challenge: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse challenge content
    Challenge {
        #[command(subcommand)]
        action: commands::challenge::ChallengeAction,
    },
    /// Start (or restart) the challenge today
    Start {
        /// Replace an existing record
        #[arg(long)]
        force: bool,
    },
    /// Show today's rituals
    Today {
        #[arg(long)]
        json: bool,
    },
    /// Show the rituals of a given day
    Checkin {
        day: u32,
        #[arg(long)]
        json: bool,
    },
    /// Mark a ritual as completed
    Check {
        /// morning or evening
        ritual: String,
        /// Day to mark (defaults to the current day)
        #[arg(long)]
        day: Option<u32>,
    },
    /// Print whether a ritual is completed
    Status { day: u32, ritual: String },
    /// Progress statistics
    Stats {
        #[arg(long, conflicts_with = "share")]
        json: bool,
        /// Print a one-line summary to share
        #[arg(long)]
        share: bool,
    },
    /// Remove all progress of the challenge
    Reset,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Onboarding profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Storage diagnostics
    Diagnostics,
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let challenge = cli.challenge;
    let result = match cli.command {
        Commands::Challenge { action } => commands::challenge::run(challenge, action),
        Commands::Start { force } => commands::progress::start(challenge, force),
        Commands::Today { json } => commands::progress::today(challenge, json),
        Commands::Checkin { day, json } => commands::progress::checkin(challenge, day, json),
        Commands::Check { ritual, day } => commands::progress::check(challenge, &ritual, day),
        Commands::Status { day, ritual } => commands::progress::status(challenge, day, &ritual),
        Commands::Stats { json, share } => commands::stats::run(challenge, json, share),
        Commands::Reset => commands::progress::reset(challenge),
        Commands::Config { action } => commands::config::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Diagnostics => commands::diagnostics::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ritual", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
