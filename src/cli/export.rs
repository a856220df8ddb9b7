//! Export command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};

use questlog::config::AppConfig;
use questlog::export::history_csv;

/// Write history as CSV, for the active profile or all of them
pub async fn export_command(all: bool, output: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load()?;
    let mut store = super::open_store(&config);

    let records = if all {
        let names = store.profile_names()?;
        let mut records = Vec::with_capacity(names.len());
        for name in &names {
            records.push(store.load(name)?);
        }
        records
    } else {
        let name = super::require_active_profile(&config)?;
        vec![store.load(&name)?]
    };

    let csv = history_csv(&records);
    match output {
        Some(path) => {
            std::fs::write(&path, &csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{csv}"),
    }

    Ok(())
}
