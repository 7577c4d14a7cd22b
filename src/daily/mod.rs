//! Daily puzzle machinery
//!
//! Deterministic per-date capital selection, result records, and share text.

mod seed;
mod select;
pub mod share;

pub use seed::SeededRng;
pub use select::{SEED_NAMESPACE, SelectError, daily_capital, seed_key};
pub use share::{DailyResult, all_regions_share_text, result_squares, share_text, total_score};

use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// How a new puzzle is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// One shared puzzle per region per date
    #[default]
    Daily,
    /// Shuffled-deck cycling with repeat avoidance
    Practice,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Practice => write!(f, "practice"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "practice" => Ok(Self::Practice),
            other => Err(format!(
                "Unknown mode '{other}' (expected 'daily' or 'practice')"
            )),
        }
    }
}

/// Today's local date as `YYYY-MM-DD`
#[must_use]
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Format an ISO date for display, e.g. "Dec 7, 2025".
///
/// Falls back to the raw input if it does not parse as a date.
#[must_use]
pub fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_or_else(|_| date.to_string(), |d| d.format("%b %-d, %Y").to_string())
}

/// Validate a user-supplied `YYYY-MM-DD` date string
///
/// # Errors
///
/// Returns a parse error for anything that is not a real calendar date.
pub fn parse_date(date: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
}
