//! Quest template management commands

use anyhow::{Result, bail};
use clap::Subcommand;

use questlog::config::AppConfig;
use questlog::domain::Quest;

#[derive(Subcommand)]
pub enum QuestCommand {
    /// List quest templates for the active profile
    List,
    /// Add a quest template
    Add {
        title: String,
        /// Point value, clamped to 0-1000
        #[arg(long, default_value_t = 10)]
        points: u32,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Edit a quest template
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Point value, clamped to 0-1000
        #[arg(long)]
        points: Option<u32>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Remove a quest template. Past history entries that reference it
    /// are kept.
    Remove { id: String },
}

pub async fn quest_command(command: QuestCommand) -> Result<()> {
    let config = AppConfig::load()?;
    let name = super::require_active_profile(&config)?;
    let mut store = super::open_store(&config);
    let mut record = store.load(&name)?;

    match command {
        QuestCommand::List => {
            if record.quests.is_empty() {
                println!("No quests. Add one with `questlog quest add <title>`.");
                return Ok(());
            }
            for quest in &record.quests {
                println!(
                    "{} {:<30} {:>4} pts  [{}]  {}",
                    quest.icon.as_deref().unwrap_or(" "),
                    quest.title,
                    quest.points,
                    quest.category,
                    quest.id,
                );
            }
            return Ok(());
        }
        QuestCommand::Add {
            title,
            points,
            category,
            icon,
        } => {
            let mut quest = Quest::new(
                title,
                points,
                category.unwrap_or_else(|| "Personal".to_string()),
            );
            if let Some(icon) = icon {
                quest.icon = Some(icon);
            }
            println!("Added quest \"{}\" ({} pts).", quest.title, quest.points);
            record.quests.push(quest);
        }
        QuestCommand::Edit {
            id,
            title,
            points,
            category,
            icon,
        } => {
            let Some(quest) = record.find_quest_mut(&id) else {
                bail!("no quest with id '{id}' - run `questlog quest list`");
            };
            if let Some(title) = title {
                quest.title = title;
            }
            if let Some(points) = points {
                quest.set_points(points);
            }
            if let Some(category) = category {
                quest.category = category;
            }
            if let Some(icon) = icon {
                quest.icon = Some(icon);
            }
            println!("Updated quest \"{}\" ({} pts).", quest.title, quest.points);
        }
        QuestCommand::Remove { id } => {
            let before = record.quests.len();
            record.quests.retain(|quest| quest.id != id);
            if record.quests.len() == before {
                bail!("no quest with id '{id}'");
            }
            println!("Removed quest {id}. Logged history is unaffected.");
        }
    }

    store.save(&record)?;
    Ok(())
}
