//! Versioned migration of stored profile records
//!
//! Schema history:
//! - v1: flat shape - the daily goal lived at the top level, no timer or
//!   theme settings, quests without icons.
//! - v2: settings object (`dailyGoal`, timer durations, `theme`), quest
//!   icons.
//! - v3 (current): `weekKey` for the weekly level reset.
//!
//! Each step upgrades the raw JSON value one version in place; the final
//! typed decode fills remaining field-level defaults via serde, so new
//! settings fields never clobber old ones. Corrupt data is treated as
//! absent, not as a fatal error.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::warn;

use crate::domain::{
    MAX_QUEST_POINTS, ProgressionRecord, SCHEMA_VERSION, default_icon_for, default_quests,
};
use crate::engine::week_key;

/// A record recovered from storage
pub struct Migration {
    pub record: ProgressionRecord,
    /// Whether anything was upgraded or backfilled; the caller persists
    /// the record again when set
    pub upgraded: bool,
}

/// Parse and migrate a stored record. Returns `None` when the data is
/// corrupt beyond recovery, which callers treat as "no prior data".
pub fn migrate(raw: &str, today: NaiveDate) -> Option<Migration> {
    let mut value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("stored profile is not valid JSON, starting fresh: {e}");
            return None;
        }
    };
    if !value.is_object() {
        warn!("stored profile is not a JSON object, starting fresh");
        return None;
    }

    let version = value
        .get("version")
        .and_then(Value::as_u64)
        .unwrap_or(1) as u32;
    let mut upgraded = version < SCHEMA_VERSION;

    if version < 2 {
        migrate_v1_to_v2(&mut value);
    }
    if version < 3 {
        migrate_v2_to_v3(&mut value, today);
    }
    // A record claiming the current version can still have been stored
    // without the week key; backfill rather than force a downgrade reset.
    if ensure_week_key(&mut value, today) {
        upgraded = true;
    }

    let mut record: ProgressionRecord = match serde_json::from_value(value) {
        Ok(record) => record,
        Err(e) => {
            warn!("stored profile does not match any known schema, starting fresh: {e}");
            return None;
        }
    };
    record.version = SCHEMA_VERSION;

    if backfill_quests(&mut record) {
        upgraded = true;
    }

    Some(Migration { record, upgraded })
}

/// v1 kept the daily goal as a top-level field. v2 folded it into a
/// settings object alongside the timer durations and theme; serde defaults
/// supply the fields v1 never had.
fn migrate_v1_to_v2(value: &mut Value) {
    let Some(obj) = value.as_object_mut() else {
        return;
    };
    if let Some(goal) = obj.remove("dailyGoal") {
        let settings = obj
            .entry("settings")
            .or_insert_with(|| Value::Object(Default::default()));
        if let Some(settings) = settings.as_object_mut() {
            settings.entry("dailyGoal").or_insert(goal);
        }
    }
    obj.insert("version".to_string(), Value::from(2));
}

/// v3 added the ISO week key for the weekly reset policy
fn migrate_v2_to_v3(value: &mut Value, today: NaiveDate) {
    ensure_week_key(value, today);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("version".to_string(), Value::from(3));
    }
}

fn ensure_week_key(value: &mut Value, today: NaiveDate) -> bool {
    let Some(obj) = value.as_object_mut() else {
        return false;
    };
    let missing = !matches!(obj.get("weekKey"), Some(Value::String(_)));
    if missing {
        obj.insert("weekKey".to_string(), Value::String(week_key(today)));
    }
    missing
}

/// Replace an absent/empty quest list with the defaults; otherwise backfill
/// icons and clamp stored point values. Returns whether anything changed.
fn backfill_quests(record: &mut ProgressionRecord) -> bool {
    if record.quests.is_empty() {
        record.quests = default_quests();
        return true;
    }
    let mut changed = false;
    for quest in &mut record.quests {
        if quest.icon.is_none() {
            quest.icon = Some(default_icon_for(&quest.category).to_string());
            changed = true;
        }
        if quest.points > MAX_QUEST_POINTS {
            quest.points = MAX_QUEST_POINTS;
            changed = true;
        }
    }
    changed
}
