//! CLI command implementations

pub mod export;
pub mod leaderboard;
pub mod log;
pub mod profile;
pub mod quest;
pub mod reset;
pub mod settings;
pub mod status;
pub mod timer;

use anyhow::Result;

use questlog::config::AppConfig;
use questlog::domain::ProgressionRecord;
use questlog::engine::{InvalidActionError, ProgressionEvent, threshold};
use questlog::store::{FileBackend, ProfileStore};
use questlog::sync::{ActivityUpload, SyncDispatcher};

/// Open the production profile store for the configured data directory
pub fn open_store(config: &AppConfig) -> ProfileStore<FileBackend> {
    ProfileStore::new(FileBackend::new(config.profile_data_dir()))
}

/// Resolve the active profile, or fail with the selection prompt
pub fn require_active_profile(config: &AppConfig) -> Result<String> {
    match &config.active_profile {
        Some(name) => Ok(name.clone()),
        None => Err(InvalidActionError::NoActiveProfile.into()),
    }
}

/// Print what an apply did, then push the committed entry to the remote
/// endpoint. Sync happens after the record is already saved and its
/// failure is never surfaced here.
pub fn announce_and_sync(
    config: &AppConfig,
    name: &str,
    record: &ProgressionRecord,
    events: &[ProgressionEvent],
) {
    let dispatcher = SyncDispatcher::start(config.remote_endpoint.clone());

    for event in events {
        match event {
            ProgressionEvent::EntryLogged { entry } => {
                println!("Logged \"{}\" (+{} points)", entry.title, entry.points);
                dispatcher.submit(ActivityUpload {
                    name: name.to_string(),
                    date: entry.date.clone(),
                    title: entry.title.clone(),
                    category: entry.category.clone(),
                    points: entry.points,
                    timestamp: entry.timestamp,
                });
            }
            ProgressionEvent::LevelUp { from, to } => {
                println!("Level up! {from} -> {to}");
            }
            ProgressionEvent::StreakExtended { length } => {
                println!("Streak extended: {length} days");
            }
            ProgressionEvent::StreakStarted => {
                println!("Streak started: day 1");
            }
        }
    }

    println!(
        "Level {} - {}/{} XP",
        record.level,
        record.xp,
        threshold(record.level)
    );

    dispatcher.finish();
}
