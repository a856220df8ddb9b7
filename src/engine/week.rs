//! ISO week keys and the weekly level reset

use chrono::{Datelike, Local, NaiveDate};

use crate::domain::ProgressionRecord;

/// Level a profile drops back to when a new ISO week starts
pub const WEEK_RESET_LEVEL: u32 = 1;

/// XP a profile drops back to when a new ISO week starts
pub const WEEK_RESET_XP: u32 = 0;

/// ISO week key for a date, e.g. "2025-W09".
///
/// Uses the ISO week-numbering year (Thursday anchoring), so the last days
/// of December can land in week 1 of the next year and the first days of
/// January in week 52/53 of the previous one.
pub fn week_key(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// ISO week key for today's local date
pub fn current_week_key() -> String {
    week_key(Local::now().date_naive())
}

/// Reset level and XP when `today` falls in a different ISO week than the
/// record's stored key, and stamp the new key. History and streak are
/// never touched here; they persist across weeks. Returns whether the
/// record changed.
///
/// Runs on every profile load, not at a fixed reset time, so a profile
/// reopened mid-week-transition is still corrected.
pub fn reconcile_week(record: &mut ProgressionRecord, today: NaiveDate) -> bool {
    let current = week_key(today);
    if record.week_key == current {
        return false;
    }
    record.level = WEEK_RESET_LEVEL;
    record.xp = WEEK_RESET_XP;
    record.week_key = current;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActionEntry;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_week_key_mid_year() {
        assert_eq!(week_key(day("2025-02-25")), "2025-W09");
    }

    #[test]
    fn test_week_key_december_in_next_years_week_one() {
        // 2024-12-30 is a Monday; its week's Thursday is 2025-01-02
        assert_eq!(week_key(day("2024-12-30")), "2025-W01");
    }

    #[test]
    fn test_week_key_january_in_previous_years_week() {
        // 2021-01-01 is a Friday; its week's Thursday is 2020-12-31
        assert_eq!(week_key(day("2021-01-01")), "2020-W53");
    }

    #[test]
    fn test_reconcile_same_week_is_noop() {
        let mut record = ProgressionRecord::new("alice", week_key(day("2025-02-25")));
        record.level = 4;
        record.xp = 80;
        assert!(!reconcile_week(&mut record, day("2025-02-27")));
        assert_eq!(record.level, 4);
        assert_eq!(record.xp, 80);
    }

    #[test]
    fn test_reconcile_new_week_resets_level_and_xp_only() {
        let mut record = ProgressionRecord::new("alice", "2025-W08");
        record.level = 5;
        record.xp = 120;
        record.streak = 12;
        record.history.push(ActionEntry {
            id: "e1".to_string(),
            date: "2025-02-20".to_string(),
            quest_id: None,
            title: "t".to_string(),
            category: "Work".to_string(),
            points: 10,
            icon: None,
            timestamp: 0,
        });

        assert!(reconcile_week(&mut record, day("2025-02-25")));
        assert_eq!(record.level, WEEK_RESET_LEVEL);
        assert_eq!(record.xp, WEEK_RESET_XP);
        assert_eq!(record.week_key, "2025-W09");
        // untouched by the reset
        assert_eq!(record.streak, 12);
        assert_eq!(record.history.len(), 1);
    }
}
