//! Profile statistics command

use crate::store::{Profile, Store};

/// Snapshot of the stored profile counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub score: u32,
    pub games_played: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

/// Read the profile counters into a report
pub fn gather_stats<S: Store>(profile: &Profile<S>) -> StatsReport {
    StatsReport {
        score: profile.score(),
        games_played: profile.games_played(),
        current_streak: profile.current_streak(),
        best_streak: profile.best_streak(),
    }
}
