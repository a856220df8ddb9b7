//! Daily goal evaluation and streak bookkeeping

use chrono::{Local, NaiveDate};

use crate::domain::ProgressionRecord;

/// What happened to the streak after an action was appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Goal not reached yet today, or already counted earlier today
    None,
    /// Goal met the day after the last qualifying day
    Extended(u32),
    /// Goal met after a gap (or for the first time); streak restarts at 1
    Started,
}

/// Format a date the way history entries store it
pub fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's local date as a "YYYY-MM-DD" string
pub fn today_string() -> String {
    date_string(Local::now().date_naive())
}

/// Re-evaluate the daily goal for `today` after history changed.
///
/// The streak counts consecutive calendar days on which the goal was met.
/// A day is counted at most once: once `last_goal_date` is today, further
/// qualifying actions leave the streak alone. Day adjacency is calendar
/// arithmetic on local dates, not elapsed time.
pub fn update_streak(record: &mut ProgressionRecord, today: NaiveDate) -> StreakChange {
    let today_str = date_string(today);

    if record.points_on(&today_str) < record.settings.daily_goal {
        return StreakChange::None;
    }
    if record.last_goal_date.as_deref() == Some(today_str.as_str()) {
        return StreakChange::None;
    }

    let yesterday = today.pred_opt().map(date_string);
    let change = if record.last_goal_date == yesterday && yesterday.is_some() {
        record.streak += 1;
        StreakChange::Extended(record.streak)
    } else {
        record.streak = 1;
        StreakChange::Started
    };
    record.last_goal_date = Some(today_str);
    change
}
