//! One completed activity logged against a profile

use serde::{Deserialize, Serialize};

/// A single completed activity.
///
/// Entries are immutable once created and owned by the profile's history
/// list; they are only removed when the whole profile is reset. The `date`
/// field is the local calendar day, so all day-level bookkeeping (streaks,
/// leaderboard windows) compares plain `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEntry {
    /// Unique entry id
    pub id: String,
    /// Local calendar day the entry was logged, "YYYY-MM-DD"
    pub date: String,
    /// Source quest template, when logged from one. Deleting the quest
    /// later does not invalidate this reference.
    #[serde(default)]
    pub quest_id: Option<String>,
    pub title: String,
    pub category: String,
    /// Points awarded for this entry
    pub points: u32,
    #[serde(default)]
    pub icon: Option<String>,
    /// Creation instant in epoch milliseconds
    pub timestamp: i64,
}
