//! QuestLog - gamified productivity tracking
//!
//! QuestLog turns logged productivity actions ("quests") into experience
//! points, levels, and daily streaks, kept per profile. The crate is built
//! around a pure progression engine and a small persistence layer:
//!
//! - [`engine`] computes the next progression state for a logged action
//!   (XP, cascading level-ups, streak bookkeeping, weekly reset).
//! - [`store`] persists one record per profile through a pluggable
//!   key-value backend and migrates older stored shapes on load.
//! - [`leaderboard`] ranks stored profiles by points over a trailing
//!   window of calendar days.
//! - [`sync`] pushes committed entries to an optional shared endpoint,
//!   best-effort and never blocking.

pub mod config;
pub mod domain;
pub mod engine;
pub mod export;
pub mod leaderboard;
pub mod store;
pub mod sync;

pub use domain::*;
