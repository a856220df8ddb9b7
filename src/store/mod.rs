//! Multi-profile persistence
//!
//! Maps profile names to stored progression records through an injected
//! [`StorageBackend`]. The store owns the durable contract: creating fresh
//! records on first use, migrating older stored shapes, running the weekly
//! reset on every load, and keeping the name list sorted for display.

mod backend;
mod migrate;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use migrate::{Migration, migrate};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::domain::ProgressionRecord;
use crate::engine::{current_week_key, reconcile_week, week_key};

/// Storage key for the profile name list
const PROFILES_KEY: &str = "profiles";

fn record_key(name: &str) -> String {
    format!("profile:{name}")
}

/// The profile store: one progression record per known profile name
pub struct ProfileStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ProfileStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Known profile names: ordered, duplicate-free, sorted
    /// case-insensitively for display
    pub fn profile_names(&self) -> Result<Vec<String>> {
        match self.backend.read(PROFILES_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(names) => Ok(names),
                Err(e) => {
                    warn!("profile name list is corrupt, starting empty: {e}");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    fn save_names(&mut self, names: &[String]) -> Result<()> {
        let raw = serde_json::to_string(names).context("Failed to serialize profile list")?;
        self.backend.write(PROFILES_KEY, &raw)
    }

    /// Add a name to the list, creating its backing record if none is
    /// stored. Matching is case-sensitive and exact; adding an existing
    /// name is a no-op. Returns whether the name was newly added.
    pub fn add_profile(&mut self, name: &str) -> Result<bool> {
        let mut names = self.profile_names()?;
        if names.iter().any(|n| n == name) {
            return Ok(false);
        }
        names.push(name.to_string());
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        self.save_names(&names)?;

        // Idempotent: a record left behind by an earlier remove is reused,
        // which is what makes remove + re-add recover history.
        if self.backend.read(&record_key(name))?.is_none() {
            let record = ProgressionRecord::new(name, current_week_key());
            self.save(&record)?;
        }
        Ok(true)
    }

    /// Drop a name from the list. The stored record is retained and comes
    /// back when the same name is re-added. Returns whether it was listed.
    pub fn remove_profile(&mut self, name: &str) -> Result<bool> {
        let mut names = self.profile_names()?;
        let before = names.len();
        names.retain(|n| n != name);
        if names.len() == before {
            return Ok(false);
        }
        self.save_names(&names)?;
        Ok(true)
    }

    /// Load a profile's record as of today. See [`ProfileStore::load_at`].
    pub fn load(&mut self, name: &str) -> Result<ProgressionRecord> {
        self.load_at(name, Local::now().date_naive())
    }

    /// Load a profile's record, creating a fresh one if nothing usable is
    /// stored. Runs schema migration and the weekly reset reconciliation,
    /// and persists the result when either changed the record.
    pub fn load_at(&mut self, name: &str, today: NaiveDate) -> Result<ProgressionRecord> {
        let stored = self.backend.read(&record_key(name))?;
        let (mut record, mut dirty) = match stored {
            Some(raw) => match migrate(&raw, today) {
                Some(migration) => (migration.record, migration.upgraded),
                None => (ProgressionRecord::new(name, week_key(today)), true),
            },
            None => (ProgressionRecord::new(name, week_key(today)), true),
        };

        if record.name != name {
            record.name = name.to_string();
            dirty = true;
        }
        if reconcile_week(&mut record, today) {
            debug!("weekly reset applied to '{name}' ({})", record.week_key);
            dirty = true;
        }
        if dirty {
            self.save(&record)?;
        }
        Ok(record)
    }

    /// Persist a record under its own name
    pub fn save(&mut self, record: &ProgressionRecord) -> Result<()> {
        let raw =
            serde_json::to_string(record).context("Failed to serialize profile record")?;
        self.backend.write(&record_key(&record.name), &raw)
    }

    /// Replace a profile's record with a fresh one. The only destructive
    /// operation in the store, and it requires an explicit user request.
    pub fn reset(&mut self, name: &str) -> Result<ProgressionRecord> {
        let record = ProgressionRecord::new(name, current_week_key());
        self.save(&record)?;
        Ok(record)
    }
}
