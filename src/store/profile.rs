//! Player profile over a key-value store
//!
//! Owns the key scheme for score, games played, streaks, and per-day daily
//! results. Uses the same keys the browser version wrote to `localStorage`,
//! so the records stay recognizable.

use super::{Store, StoreError};
use crate::core::Region;
use crate::daily::DailyResult;

const KEY_SCORE: &str = "mapitals-score";
const KEY_GAMES_PLAYED: &str = "mapitals-games-played";
const KEY_CURRENT_STREAK: &str = "mapitals-current-streak";
const KEY_BEST_STREAK: &str = "mapitals-best-streak";

fn daily_completed_key(region: Region, date: &str) -> String {
    format!("mapitals-daily-completed-{date}-{region}")
}

fn daily_result_key(region: Region, date: &str) -> String {
    format!("mapitals-daily-result-{date}-{region}")
}

/// Score, streaks, and daily history for one player
pub struct Profile<S: Store> {
    store: S,
}

impl<S: Store> Profile<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn counter(&self, key: &str) -> u32 {
        self.store
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    fn set_counter(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.store.set(key, &value.to_string())
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.counter(KEY_SCORE)
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.counter(KEY_GAMES_PLAYED)
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.counter(KEY_CURRENT_STREAK)
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.counter(KEY_BEST_STREAK)
    }

    /// Record a won game: add its score, extend the streak.
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn record_win(&mut self, score: u32) -> Result<(), StoreError> {
        self.set_counter(KEY_SCORE, self.score() + score)?;
        self.set_counter(KEY_GAMES_PLAYED, self.games_played() + 1)?;
        let streak = self.current_streak() + 1;
        self.set_counter(KEY_CURRENT_STREAK, streak)?;
        if streak > self.best_streak() {
            self.set_counter(KEY_BEST_STREAK, streak)?;
        }
        Ok(())
    }

    /// Record a lost or conceded game: streak resets, best streak stands.
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn record_loss(&mut self) -> Result<(), StoreError> {
        self.set_counter(KEY_GAMES_PLAYED, self.games_played() + 1)?;
        self.set_counter(KEY_CURRENT_STREAK, 0)
    }

    #[must_use]
    pub fn is_daily_completed(&self, region: Region, date: &str) -> bool {
        self.store
            .get(&daily_completed_key(region, date))
            .is_some_and(|v| v == "true")
    }

    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn mark_daily_completed(&mut self, region: Region, date: &str) -> Result<(), StoreError> {
        self.store.set(&daily_completed_key(region, date), "true")
    }

    /// The stored result for a region's daily puzzle, if completed
    #[must_use]
    pub fn daily_result(&self, region: Region, date: &str) -> Option<DailyResult> {
        let saved = self.store.get(&daily_result_key(region, date))?;
        serde_json::from_str(&saved).ok()
    }

    /// # Errors
    ///
    /// Propagates serialization and store write failures.
    pub fn save_daily_result(
        &mut self,
        region: Region,
        date: &str,
        result: &DailyResult,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(result)?;
        self.store.set(&daily_result_key(region, date), &json)
    }

    /// Results for every region on a date, `None` where incomplete
    #[must_use]
    pub fn all_region_results(&self, date: &str) -> Vec<(Region, Option<DailyResult>)> {
        Region::ALL
            .iter()
            .map(|&region| (region, self.daily_result(region, date)))
            .collect()
    }

    #[must_use]
    pub fn are_all_regions_completed(&self, date: &str) -> bool {
        Region::ALL
            .iter()
            .all(|&region| self.is_daily_completed(region, date))
    }
}
