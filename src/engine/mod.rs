//! Progression engine: turning logged actions into XP, levels, and streaks
//!
//! The engine is pure computation over a [`ProgressionRecord`]: it mutates
//! the record in memory and reports what happened as [`ProgressionEvent`]s.
//! Persisting the record and notifying the remote endpoint are caller
//! responsibilities, triggered after a successful computation.

mod levels;
mod streak;
mod week;

pub use levels::{progress_to_next, resolve_level_ups, threshold};
pub use streak::{StreakChange, date_string, today_string, update_streak};
pub use week::{
    WEEK_RESET_LEVEL, WEEK_RESET_XP, current_week_key, reconcile_week, week_key,
};

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::domain::{ActionEntry, MAX_QUEST_POINTS, ProgressionRecord, Quest};

/// Largest point value a single action may carry. Ad-hoc actions share the
/// quest template ceiling, but are rejected instead of clamped since the
/// value is user-typed rather than stored data.
pub const MAX_ACTION_POINTS: u32 = MAX_QUEST_POINTS;

/// Validation failures rejected before any state is touched.
///
/// These are precondition violations the user is prompted to correct, not
/// conditions the engine recovers from by guessing.
#[derive(Debug, thiserror::Error)]
pub enum InvalidActionError {
    #[error("no active profile selected - run `questlog profile use <name>` first")]
    NoActiveProfile,

    #[error("action title must not be empty")]
    EmptyTitle,

    #[error("action points must not be negative (got {0})")]
    NegativePoints(i64),

    #[error("action points must be at most {MAX_ACTION_POINTS} (got {0})")]
    PointsTooLarge(i64),
}

/// A request to log one completed action
#[derive(Debug, Clone)]
pub struct ActionInput {
    pub title: String,
    pub category: String,
    pub points: u32,
    pub quest_id: Option<String>,
    pub icon: Option<String>,
}

impl ActionInput {
    /// Validate raw user input. Points arrive as `i64` because CLI and
    /// remote input can be negative; stored templates never are.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        points: i64,
    ) -> Result<Self, InvalidActionError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(InvalidActionError::EmptyTitle);
        }
        if points < 0 {
            return Err(InvalidActionError::NegativePoints(points));
        }
        if points > MAX_ACTION_POINTS as i64 {
            return Err(InvalidActionError::PointsTooLarge(points));
        }
        Ok(Self {
            title,
            category: category.into(),
            points: points as u32,
            quest_id: None,
            icon: None,
        })
    }

    /// Build the input from a stored quest template
    pub fn from_quest(quest: &Quest) -> Self {
        Self {
            title: quest.title.clone(),
            category: quest.category.clone(),
            points: quest.points,
            quest_id: Some(quest.id.clone()),
            icon: quest.icon.clone(),
        }
    }
}

/// What a single [`apply_action`] call did, in order of occurrence
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressionEvent {
    /// The entry was appended to history
    EntryLogged { entry: ActionEntry },
    /// Accumulated XP crossed one or more level thresholds
    LevelUp { from: u32, to: u32 },
    /// The daily goal was met the day after the last qualifying day
    StreakExtended { length: u32 },
    /// The daily goal was met after a gap; the streak restarted at 1
    StreakStarted,
}

/// Current timestamp in milliseconds
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Apply one action to a record, stamped with the current local date and
/// instant. See [`apply_action_at`] for the full contract.
pub fn apply_action(
    record: &mut ProgressionRecord,
    input: ActionInput,
) -> Result<Vec<ProgressionEvent>, InvalidActionError> {
    apply_action_at(record, input, Local::now().date_naive(), now_ms())
}

/// Apply one action at an explicit date and instant.
///
/// Appends an [`ActionEntry`] to history, adds its points to XP, resolves
/// cascading level-ups, then re-evaluates the daily goal and streak for
/// `today`. The record is left untouched when validation fails.
pub fn apply_action_at(
    record: &mut ProgressionRecord,
    input: ActionInput,
    today: NaiveDate,
    timestamp_ms: i64,
) -> Result<Vec<ProgressionEvent>, InvalidActionError> {
    if input.title.trim().is_empty() {
        return Err(InvalidActionError::EmptyTitle);
    }
    if input.points > MAX_ACTION_POINTS {
        return Err(InvalidActionError::PointsTooLarge(input.points as i64));
    }

    let entry = ActionEntry {
        id: Uuid::new_v4().to_string(),
        date: date_string(today),
        quest_id: input.quest_id,
        title: input.title,
        category: input.category,
        points: input.points,
        icon: input.icon,
        timestamp: timestamp_ms,
    };

    let mut events = Vec::new();
    record.history.push(entry.clone());
    events.push(ProgressionEvent::EntryLogged { entry });

    record.xp += input.points;
    let level_before = record.level;
    resolve_level_ups(&mut record.xp, &mut record.level);
    if record.level > level_before {
        events.push(ProgressionEvent::LevelUp {
            from: level_before,
            to: record.level,
        });
    }

    match update_streak(record, today) {
        StreakChange::Extended(length) => {
            events.push(ProgressionEvent::StreakExtended { length })
        }
        StreakChange::Started => events.push(ProgressionEvent::StreakStarted),
        StreakChange::None => {}
    }

    Ok(events)
}
