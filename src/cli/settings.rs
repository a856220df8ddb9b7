//! Settings commands for the active profile

use anyhow::{Result, bail};
use clap::Subcommand;

use questlog::config::AppConfig;
use questlog::domain::Theme;

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show current settings
    Show,
    /// Set the daily point goal
    Goal { points: u32 },
    /// Set timer durations in minutes
    Timer {
        #[arg(long)]
        pomodoro: Option<u32>,
        #[arg(long)]
        short_break: Option<u32>,
        #[arg(long)]
        long_break: Option<u32>,
    },
    /// Set the theme preference (light, dark, or system)
    Theme { theme: String },
}

pub async fn settings_command(command: SettingsCommand) -> Result<()> {
    let config = AppConfig::load()?;
    let name = super::require_active_profile(&config)?;
    let mut store = super::open_store(&config);
    let mut record = store.load(&name)?;

    match command {
        SettingsCommand::Show => {
            let s = &record.settings;
            println!("Daily goal:  {} points", s.daily_goal);
            println!(
                "Timers:      {} min work / {} min short break / {} min long break",
                s.pomodoro_minutes, s.short_break_minutes, s.long_break_minutes
            );
            println!("Theme:       {:?}", s.theme);
            return Ok(());
        }
        SettingsCommand::Goal { points } => {
            record.settings.daily_goal = points;
            println!("Daily goal set to {points} points.");
        }
        SettingsCommand::Timer {
            pomodoro,
            short_break,
            long_break,
        } => {
            if let Some(minutes) = pomodoro {
                record.settings.pomodoro_minutes = minutes;
            }
            if let Some(minutes) = short_break {
                record.settings.short_break_minutes = minutes;
            }
            if let Some(minutes) = long_break {
                record.settings.long_break_minutes = minutes;
            }
            println!(
                "Timers: {} / {} / {} minutes.",
                record.settings.pomodoro_minutes,
                record.settings.short_break_minutes,
                record.settings.long_break_minutes
            );
        }
        SettingsCommand::Theme { theme } => {
            record.settings.theme = match theme.to_lowercase().as_str() {
                "light" => Theme::Light,
                "dark" => Theme::Dark,
                "system" => Theme::System,
                other => bail!("unknown theme '{other}' (expected light, dark, or system)"),
            };
            println!("Theme set to {theme}.");
        }
    }

    store.save(&record)?;
    Ok(())
}
