//! App-level configuration
//!
//! Per-profile state (goal, timers, theme) lives inside each stored
//! record; this file only holds what the app needs before a profile is
//! loaded: which profile is active, where the data directory is, and the
//! optional remote endpoint. Stored at `~/.questlog/config.toml`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Profile all logging commands act on
    #[serde(default)]
    pub active_profile: Option<String>,

    /// Override for the profile data directory
    /// (defaults to ~/.questlog/profiles)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the shared activity endpoint; unset disables sync
    #[serde(default)]
    pub remote_endpoint: Option<String>,
}

impl AppConfig {
    /// Get the global config directory path (~/.questlog/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".questlog")
    }

    /// Get the global config file path (~/.questlog/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Directory profile records are stored in
    pub fn profile_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("profiles"))
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the global configuration, creating a default file on first run
    pub fn load() -> Result<Self> {
        let path = Self::global_config_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to_file(&path)?;
            return Ok(config);
        }
        Self::from_file(&path)
    }

    /// Save to the global config path
    pub fn save(&self) -> Result<()> {
        self.save_to_file(&Self::global_config_path())
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// An exclusive lock keeps overlapping invocations from interleaving,
    /// and the temp-file + rename keeps a crash from corrupting the file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        // Lock file is separate from the config to survive the rename
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock released when lock_file drops
        Ok(())
    }
}
