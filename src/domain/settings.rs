//! Per-profile settings

use serde::{Deserialize, Serialize};

/// Theme preference persisted for whatever front end renders the profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Per-profile settings.
///
/// Every field carries its own serde default so records written by older
/// versions gain new fields on load without losing the ones they have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Point total that must be reached within one calendar day for the
    /// day to count toward the streak
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,

    /// Work countdown length in minutes
    #[serde(default = "default_pomodoro_minutes")]
    pub pomodoro_minutes: u32,

    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,

    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,

    #[serde(default)]
    pub theme: Theme,
}

fn default_daily_goal() -> u32 {
    100
}

fn default_pomodoro_minutes() -> u32 {
    25
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_goal: default_daily_goal(),
            pomodoro_minutes: default_pomodoro_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            theme: Theme::default(),
        }
    }
}
