//! Reusable action templates

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum point value a quest template (or ad-hoc action) may carry
pub const MAX_QUEST_POINTS: u32 = 1000;

/// Fixed category set used for defaults. Quest categories themselves stay
/// free-form; this list only seeds new quests and picks fallback icons.
pub const DEFAULT_CATEGORIES: &[&str] = &["Work", "Health", "Learning", "Chores", "Personal"];

/// Fallback icons per default category
static CATEGORY_ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Work", "💼"),
        ("Health", "💪"),
        ("Learning", "📚"),
        ("Chores", "🧹"),
        ("Personal", "🌱"),
    ])
});

/// Icon for a category, falling back to a generic star for free-form ones
pub fn default_icon_for(category: &str) -> &'static str {
    CATEGORY_ICONS.get(category).copied().unwrap_or("⭐")
}

/// A reusable action template with a fixed point value.
///
/// Quests have an independent lifecycle from history: deleting a quest
/// does not delete past entries that reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    /// Clamped to `0..=MAX_QUEST_POINTS` on construction and edit
    pub points: u32,
    pub category: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Quest {
    /// Create a quest template. Points outside the allowed range are
    /// clamped rather than rejected, since templates are stored data.
    pub fn new(title: impl Into<String>, points: u32, category: impl Into<String>) -> Self {
        let category = category.into();
        let icon = default_icon_for(&category).to_string();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            points: points.min(MAX_QUEST_POINTS),
            category,
            icon: Some(icon),
        }
    }

    /// Update the point value, clamping to the allowed range
    pub fn set_points(&mut self, points: u32) {
        self.points = points.min(MAX_QUEST_POINTS);
    }
}

/// Starter quests seeded into a fresh profile
pub fn default_quests() -> Vec<Quest> {
    vec![
        Quest::new("Deep work session", 50, "Work"),
        Quest::new("Inbox zero", 20, "Work"),
        Quest::new("Workout", 40, "Health"),
        Quest::new("Drink 2L of water", 10, "Health"),
        Quest::new("Read 20 pages", 30, "Learning"),
        Quest::new("Tidy your desk", 10, "Chores"),
        Quest::new("Journal", 15, "Personal"),
    ]
}
