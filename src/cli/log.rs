//! Log command implementation

use anyhow::{Result, bail};

use questlog::config::AppConfig;
use questlog::engine::{ActionInput, apply_action};

/// Log a completed quest (by id or title) or an ad-hoc action
pub async fn log_command(
    quest: Option<String>,
    title: Option<String>,
    points: Option<i64>,
    category: Option<String>,
) -> Result<()> {
    let config = AppConfig::load()?;
    let name = super::require_active_profile(&config)?;
    let mut store = super::open_store(&config);
    let mut record = store.load(&name)?;

    let input = match quest {
        Some(query) => {
            let Some(quest) = record.find_quest(&query) else {
                bail!("no quest matching '{query}' - run `questlog quest list`");
            };
            ActionInput::from_quest(quest)
        }
        None => {
            let Some(title) = title else {
                bail!("give a quest to log, or --title together with --points");
            };
            ActionInput::new(
                title,
                category.unwrap_or_else(|| "Personal".to_string()),
                points.unwrap_or(0),
            )?
        }
    };

    let events = apply_action(&mut record, input)?;
    store.save(&record)?;

    super::announce_and_sync(&config, &name, &record, &events);
    Ok(())
}
