use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "questlog")]
#[command(about = "QuestLog - gamified productivity tracking with quests, XP, and streaks")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a completed quest (by id or title) or an ad-hoc action
    Log {
        /// Quest id or title to log
        quest: Option<String>,

        /// Title for an ad-hoc action (used when no quest is given)
        #[arg(long)]
        title: Option<String>,

        /// Point value for an ad-hoc action
        #[arg(long)]
        points: Option<i64>,

        /// Category for an ad-hoc action
        #[arg(long)]
        category: Option<String>,
    },

    /// Show level, XP, streak, and today's progress
    Status,

    /// Manage quest templates
    Quest {
        #[command(subcommand)]
        command: cli::quest::QuestCommand,
    },

    /// Manage profiles
    Profile {
        #[command(subcommand)]
        command: cli::profile::ProfileCommand,
    },

    /// Change settings for the active profile
    Settings {
        #[command(subcommand)]
        command: cli::settings::SettingsCommand,
    },

    /// Show the points leaderboard
    Leaderboard {
        /// Trailing window in calendar days, including today
        #[arg(long, default_value_t = 7)]
        days: u32,

        /// Fetch the shared leaderboard instead of the local one
        #[arg(long)]
        remote: bool,
    },

    /// Run a focus timer and log the session when it completes
    Timer {
        /// Countdown length (defaults to the profile's pomodoro setting)
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Export history as CSV
    Export {
        /// Export every profile instead of only the active one
        #[arg(long)]
        all: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reset the active profile to a fresh record
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Log {
            quest,
            title,
            points,
            category,
        } => {
            cli::log::log_command(quest, title, points, category).await?;
        }
        Commands::Status => {
            cli::status::status_command().await?;
        }
        Commands::Quest { command } => {
            cli::quest::quest_command(command).await?;
        }
        Commands::Profile { command } => {
            cli::profile::profile_command(command).await?;
        }
        Commands::Settings { command } => {
            cli::settings::settings_command(command).await?;
        }
        Commands::Leaderboard { days, remote } => {
            cli::leaderboard::leaderboard_command(days, remote).await?;
        }
        Commands::Timer { minutes } => {
            cli::timer::timer_command(minutes).await?;
        }
        Commands::Export { all, output } => {
            cli::export::export_command(all, output).await?;
        }
        Commands::Reset { yes } => {
            cli::reset::reset_command(yes).await?;
        }
    }

    Ok(())
}
