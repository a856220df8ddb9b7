//! The persisted progression state of one profile

use serde::{Deserialize, Serialize};

use super::{ActionEntry, Quest, Settings, default_quests};

/// Current persisted schema version. `store::migrate` documents the
/// history and upgrades older shapes on load.
pub const SCHEMA_VERSION: u32 = 3;

/// Everything QuestLog knows about one profile.
///
/// The record is the single owner of its history; entries are appended by
/// the progression engine and never edited afterwards. `xp` is progress
/// toward the next level, not a lifetime total - level-ups consume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionRecord {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub settings: Settings,

    /// Quest templates available for logging
    #[serde(default)]
    pub quests: Vec<Quest>,

    /// Append-only history of logged actions, oldest first
    #[serde(default)]
    pub history: Vec<ActionEntry>,

    /// XP accumulated toward the next level, always below the current
    /// level's threshold after level-up resolution
    #[serde(default)]
    pub xp: u32,

    #[serde(default = "default_level")]
    pub level: u32,

    /// Consecutive days the daily goal was met
    #[serde(default)]
    pub streak: u32,

    /// Last local calendar day the daily goal was satisfied, "YYYY-MM-DD"
    #[serde(default)]
    pub last_goal_date: Option<String>,

    /// ISO week key ("YYYY-Www") as of the last weekly-reset evaluation
    pub week_key: String,
}

fn default_version() -> u32 {
    1
}

fn default_level() -> u32 {
    1
}

impl ProgressionRecord {
    /// Fresh record for a newly created (or reset) profile
    pub fn new(name: impl Into<String>, week_key: impl Into<String>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            name: name.into(),
            settings: Settings::default(),
            quests: default_quests(),
            history: Vec::new(),
            xp: 0,
            level: 1,
            streak: 0,
            last_goal_date: None,
            week_key: week_key.into(),
        }
    }

    /// Total points logged on the given local calendar day
    pub fn points_on(&self, date: &str) -> u32 {
        self.history
            .iter()
            .filter(|entry| entry.date == date)
            .map(|entry| entry.points)
            .sum()
    }

    /// Look up a quest template by id, or by case-insensitive title
    pub fn find_quest(&self, query: &str) -> Option<&Quest> {
        self.quests
            .iter()
            .find(|quest| quest.id == query)
            .or_else(|| {
                self.quests
                    .iter()
                    .find(|quest| quest.title.eq_ignore_ascii_case(query))
            })
    }

    /// Look up a quest template mutably by id
    pub fn find_quest_mut(&mut self, id: &str) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|quest| quest.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_record_defaults() {
        let record = ProgressionRecord::new("alice", "2025-W09");
        assert_eq!(record.version, SCHEMA_VERSION);
        assert_eq!(record.level, 1);
        assert_eq!(record.xp, 0);
        assert_eq!(record.streak, 0);
        assert!(record.history.is_empty());
        assert!(!record.quests.is_empty());
        assert_eq!(record.week_key, "2025-W09");
    }

    #[test]
    fn test_points_on_sums_only_that_day() {
        let mut record = ProgressionRecord::new("alice", "2025-W09");
        for (date, points) in [("2025-03-01", 30), ("2025-03-01", 20), ("2025-03-02", 99)] {
            record.history.push(ActionEntry {
                id: format!("e{points}"),
                date: date.to_string(),
                quest_id: None,
                title: "t".to_string(),
                category: "Work".to_string(),
                points,
                icon: None,
                timestamp: 0,
            });
        }
        assert_eq!(record.points_on("2025-03-01"), 50);
        assert_eq!(record.points_on("2025-03-02"), 99);
        assert_eq!(record.points_on("2025-03-03"), 0);
    }

    #[test]
    fn test_find_quest_by_id_then_title() {
        let record = ProgressionRecord::new("alice", "2025-W09");
        let first = record.quests[0].clone();
        assert_eq!(record.find_quest(&first.id).unwrap().id, first.id);
        assert_eq!(
            record.find_quest(&first.title.to_uppercase()).unwrap().id,
            first.id
        );
        assert!(record.find_quest("no such quest").is_none());
    }
}
