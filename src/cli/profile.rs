//! Profile management commands

use anyhow::{Result, bail};
use clap::Subcommand;

use questlog::config::AppConfig;

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// List known profiles
    List,
    /// Add a profile and make it active
    Add { name: String },
    /// Switch the active profile
    Use { name: String },
    /// Remove a profile from the list (its stored data is kept and comes
    /// back if the same name is re-added)
    Remove { name: String },
}

pub async fn profile_command(command: ProfileCommand) -> Result<()> {
    let mut config = AppConfig::load()?;
    let mut store = super::open_store(&config);

    match command {
        ProfileCommand::List => {
            let names = store.profile_names()?;
            if names.is_empty() {
                println!("No profiles yet. Create one with `questlog profile add <name>`.");
                return Ok(());
            }
            for name in names {
                if config.active_profile.as_deref() == Some(name.as_str()) {
                    println!("* {name}");
                } else {
                    println!("  {name}");
                }
            }
        }
        ProfileCommand::Add { name } => {
            let added = store.add_profile(&name)?;
            config.active_profile = Some(name.clone());
            config.save()?;
            if added {
                println!("Created profile '{name}' (now active).");
            } else {
                println!("Profile '{name}' already exists (now active).");
            }
        }
        ProfileCommand::Use { name } => {
            let names = store.profile_names()?;
            if !names.iter().any(|n| n == &name) {
                bail!("unknown profile '{name}' - run `questlog profile list`");
            }
            config.active_profile = Some(name.clone());
            config.save()?;
            println!("Active profile: {name}");
        }
        ProfileCommand::Remove { name } => {
            if !store.remove_profile(&name)? {
                bail!("unknown profile '{name}'");
            }
            if config.active_profile.as_deref() == Some(name.as_str()) {
                config.active_profile = None;
                config.save()?;
            }
            println!("Removed '{name}' from the profile list. Its data is kept; re-add the same name to restore it.");
        }
    }

    Ok(())
}
