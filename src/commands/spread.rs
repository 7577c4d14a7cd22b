//! Daily selection audit
//!
//! Replays the daily selection across a run of consecutive dates and
//! reports how the picks spread over the candidate pool. Each date is also
//! selected twice to confirm the draw is reproducible.

use crate::core::{Capital, Region};
use crate::daily::{SelectError, daily_capital};
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;

/// Result of a spread audit
#[derive(Debug)]
pub struct SpreadReport {
    pub region: Region,
    pub start_date: String,
    pub days: u32,
    /// Pick counts per capital, sorted by count descending
    pub counts: Vec<(String, usize)>,
    /// Distinct capitals picked at least once
    pub distinct: usize,
    /// Size of the candidate pool for the region
    pub pool_size: usize,
    /// Whether every date produced the same pick on both draws
    pub deterministic: bool,
}

/// Run the audit over `days` consecutive dates starting at `start`.
///
/// # Errors
///
/// Returns [`SelectError::NoCandidates`] if the region has no candidates.
pub fn run_spread(
    capitals: &[Capital],
    state_capitals: &[Capital],
    region: Region,
    start: NaiveDate,
    days: u32,
) -> Result<SpreadReport, SelectError> {
    let pool_size = match region {
        Region::UsStates => state_capitals.len(),
        Region::World => capitals.len(),
        _ => capitals.iter().filter(|c| c.region() == region).count(),
    };

    let dates: Vec<String> = (0..days)
        .filter_map(|i| start.checked_add_days(Days::new(u64::from(i))))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect();

    let pb = ProgressBar::new(dates.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let picks: Result<Vec<(String, bool)>, SelectError> = dates
        .par_iter()
        .map(|date| {
            let first = daily_capital(capitals, state_capitals, region, date)?;
            let second = daily_capital(capitals, state_capitals, region, date)?;
            pb.inc(1);
            Ok((first.to_string(), first == second))
        })
        .collect();
    pb.finish_and_clear();

    let picks = picks?;
    let deterministic = picks.iter().all(|(_, same)| *same);

    let mut tally: HashMap<String, usize> = HashMap::new();
    for (pick, _) in picks {
        *tally.entry(pick).or_insert(0) += 1;
    }
    let distinct = tally.len();

    let mut counts: Vec<(String, usize)> = tally.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(SpreadReport {
        region,
        start_date: start.format("%Y-%m-%d").to_string(),
        days: dates.len() as u32,
        counts,
        distinct,
        pool_size,
        deterministic,
    })
}
