//! Focus timer command
//!
//! A cooperative countdown: each tick is just a sleep, and the core is
//! only touched once, when the countdown completes and the session is
//! logged as an action. Ctrl-C simply stops the ticks; there is no
//! partial state to clean up.

use std::time::Duration;

use anyhow::Result;

use questlog::config::AppConfig;
use questlog::engine::{ActionInput, apply_action};

/// Run a work countdown, then log it as a focus session worth one point
/// per minute
pub async fn timer_command(minutes: Option<u32>) -> Result<()> {
    let config = AppConfig::load()?;
    let name = super::require_active_profile(&config)?;
    let mut store = super::open_store(&config);
    let mut record = store.load(&name)?;

    let minutes = minutes.unwrap_or(record.settings.pomodoro_minutes);
    println!("Focus timer: {minutes} minutes. Ctrl-C to abandon.");

    for remaining in (1..=minutes).rev() {
        tokio::time::sleep(Duration::from_secs(60)).await;
        if remaining > 1 {
            println!("{} minutes left", remaining - 1);
        }
    }
    println!("Time's up - take a {} minute break.", record.settings.short_break_minutes);

    let mut input = ActionInput::new("Focus session", "Work", i64::from(minutes))?;
    input.icon = Some("⏱️".to_string());

    let events = apply_action(&mut record, input)?;
    store.save(&record)?;

    super::announce_and_sync(&config, &name, &record, &events);
    Ok(())
}
