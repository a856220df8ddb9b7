//! Leaderboard command implementation

use anyhow::Result;
use chrono::Local;

use questlog::config::AppConfig;
use questlog::leaderboard::rank;
use questlog::sync::RemoteClient;

/// Show the points ranking over a trailing window of calendar days
pub async fn leaderboard_command(days: u32, remote: bool) -> Result<()> {
    let config = AppConfig::load()?;

    if remote {
        let Some(endpoint) = &config.remote_endpoint else {
            println!("No remote endpoint configured (set remote_endpoint in config.toml).");
            return Ok(());
        };
        let rows = RemoteClient::new(endpoint.clone()).fetch_leaderboard(days);
        if rows.is_empty() {
            println!("No remote scores (endpoint unreachable or empty).");
            return Ok(());
        }
        println!("Shared leaderboard, last {days} days:\n");
        for (i, row) in rows.iter().enumerate() {
            println!("{:>3}. {:<24} {:>6} pts", i + 1, row.name, row.points);
        }
        return Ok(());
    }

    let mut store = super::open_store(&config);
    let names = store.profile_names()?;
    let rows = rank(&mut store, &names, days, Local::now().date_naive())?;
    if rows.is_empty() {
        println!("No profiles yet. Create one with `questlog profile add <name>`.");
        return Ok(());
    }

    println!("Leaderboard, last {days} days:\n");
    for (i, row) in rows.iter().enumerate() {
        println!("{:>3}. {:<24} {:>6} pts", i + 1, row.name, row.points);
    }

    Ok(())
}
