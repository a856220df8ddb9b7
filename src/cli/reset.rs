//! Reset command implementation

use anyhow::Result;

use questlog::config::AppConfig;

/// Replace the active profile's record with a fresh one
pub async fn reset_command(yes: bool) -> Result<()> {
    let config = AppConfig::load()?;
    let name = super::require_active_profile(&config)?;

    if !yes {
        println!(
            "This permanently clears history, XP, level, streak, and quests for '{name}'."
        );
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    let mut store = super::open_store(&config);
    store.reset(&name)?;
    println!("Profile '{name}' reset to level 1.");
    Ok(())
}
