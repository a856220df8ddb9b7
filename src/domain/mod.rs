//! Core domain types for QuestLog

mod entry;
mod quest;
mod record;
mod settings;

pub use entry::ActionEntry;
pub use quest::{DEFAULT_CATEGORIES, MAX_QUEST_POINTS, Quest, default_icon_for, default_quests};
pub use record::{ProgressionRecord, SCHEMA_VERSION};
pub use settings::{Settings, Theme};
