//! Local leaderboard over stored profile histories
//!
//! A read-only derived view: it loads each profile through the store and
//! sums points inside a trailing window of calendar days. No cross-profile
//! locking is needed because nothing here writes.

use anyhow::Result;
use chrono::{Days, NaiveDate};

use crate::engine::date_string;
use crate::store::{ProfileStore, StorageBackend};

/// One ranked row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub name: String,
    pub points: u32,
}

/// Rank profiles by points earned in the trailing window.
///
/// The window is inclusive on both ends by calendar-date string
/// comparison: `window_days = 7` counts an entry dated exactly seven days
/// before `today` and excludes one dated eight days before. Ties keep the
/// input order, which is already sorted for display; an empty name list
/// yields an empty result, not an error.
pub fn rank<B: StorageBackend>(
    store: &mut ProfileStore<B>,
    names: &[String],
    window_days: u32,
    today: NaiveDate,
) -> Result<Vec<LeaderboardRow>> {
    let cutoff = today
        .checked_sub_days(Days::new(window_days as u64))
        .unwrap_or(NaiveDate::MIN);
    let cutoff_str = date_string(cutoff);
    let today_str = date_string(today);

    let mut rows = Vec::with_capacity(names.len());
    for name in names {
        let record = store.load_at(name, today)?;
        let points = record
            .history
            .iter()
            .filter(|entry| {
                entry.date.as_str() >= cutoff_str.as_str()
                    && entry.date.as_str() <= today_str.as_str()
            })
            .map(|entry| entry.points)
            .sum();
        rows.push(LeaderboardRow {
            name: name.clone(),
            points,
        });
    }
    // stable sort: equal totals stay in alphabetical input order
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActionEntry;
    use crate::store::MemoryBackend;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn seed(store: &mut ProfileStore<MemoryBackend>, name: &str, entries: &[(&str, u32)]) {
        store.add_profile(name).unwrap();
        let mut record = store.load_at(name, day("2025-03-10")).unwrap();
        for (date, points) in entries {
            record.history.push(ActionEntry {
                id: format!("{name}-{date}-{points}"),
                date: date.to_string(),
                quest_id: None,
                title: "t".to_string(),
                category: "Work".to_string(),
                points: *points,
                icon: None,
                timestamp: 0,
            });
        }
        store.save(&record).unwrap();
    }

    #[test]
    fn test_empty_profile_list_is_valid() {
        let mut store = ProfileStore::new(MemoryBackend::new());
        let rows = rank(&mut store, &[], 7, day("2025-03-10")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_window_boundary_inclusive_at_exactly_window_days() {
        let mut store = ProfileStore::new(MemoryBackend::new());
        // 2025-03-03 is 7 days before 2025-03-10; 2025-03-02 is 8 days
        seed(&mut store, "alice", &[("2025-03-03", 10), ("2025-03-02", 100)]);
        let rows = rank(
            &mut store,
            &["alice".to_string()],
            7,
            day("2025-03-10"),
        )
        .unwrap();
        assert_eq!(rows[0].points, 10);
    }

    #[test]
    fn test_today_is_included() {
        let mut store = ProfileStore::new(MemoryBackend::new());
        seed(&mut store, "alice", &[("2025-03-10", 25)]);
        let rows = rank(&mut store, &["alice".to_string()], 7, day("2025-03-10")).unwrap();
        assert_eq!(rows[0].points, 25);
    }

    #[test]
    fn test_descending_order_with_alphabetical_ties() {
        let mut store = ProfileStore::new(MemoryBackend::new());
        seed(&mut store, "carol", &[("2025-03-10", 50)]);
        seed(&mut store, "alice", &[("2025-03-10", 30)]);
        seed(&mut store, "bob", &[("2025-03-10", 30)]);

        let names = store.profile_names().unwrap();
        let rows = rank(&mut store, &names, 7, day("2025-03-10")).unwrap();
        let order: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["carol", "alice", "bob"]);
    }
}
