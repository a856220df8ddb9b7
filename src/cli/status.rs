//! Status command implementation

use anyhow::Result;

use questlog::config::AppConfig;
use questlog::engine::{progress_to_next, threshold, today_string};

/// Show level, XP progress, streak, and today's total against the goal
pub async fn status_command() -> Result<()> {
    let config = AppConfig::load()?;
    let name = super::require_active_profile(&config)?;
    let mut store = super::open_store(&config);
    let record = store.load(&name)?;

    let today = today_string();
    let today_points = record.points_on(&today);

    println!("Profile: {}", record.name);
    println!(
        "Level {} - {}/{} XP ({:.0}%)",
        record.level,
        record.xp,
        threshold(record.level),
        progress_to_next(record.xp, record.level) * 100.0
    );
    match record.streak {
        0 => println!("Streak: none yet"),
        1 => println!("Streak: 1 day"),
        n => println!("Streak: {n} days"),
    }
    println!(
        "Today: {}/{} points{}",
        today_points,
        record.settings.daily_goal,
        if record.last_goal_date.as_deref() == Some(today.as_str()) {
            " - goal met!"
        } else {
            ""
        }
    );
    println!("Week: {} (level resets each ISO week)", record.week_key);

    Ok(())
}
