//! Daily puzzle selection
//!
//! Maps a `(region, date)` pair to exactly one capital, the same one for
//! every player on that date.

use super::seed::SeededRng;
use crate::core::{Capital, Region};
use std::fmt;

/// Namespace tag prefixed to every seed key
pub const SEED_NAMESPACE: &str = "mapitals";

/// Error type for daily selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The region filter matched no capitals
    NoCandidates(Region),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates(region) => {
                write!(f, "No candidate capitals for region '{region}'")
            }
        }
    }
}

impl std::error::Error for SelectError {}

/// The seed key for a region and ISO date (`YYYY-MM-DD`)
#[must_use]
pub fn seed_key(region: Region, date: &str) -> String {
    format!("{SEED_NAMESPACE}-{date}-{region}")
}

/// Pick the daily capital for a region and date.
///
/// `capitals` is the world table, `state_capitals` the 50-entry U.S. table;
/// which one is drawn from depends on the region. Deterministic: the same
/// arguments always return the same entry.
///
/// # Errors
///
/// Returns [`SelectError::NoCandidates`] if the region filter leaves
/// nothing to draw from.
pub fn daily_capital<'a>(
    capitals: &'a [Capital],
    state_capitals: &'a [Capital],
    region: Region,
    date: &str,
) -> Result<&'a Capital, SelectError> {
    let mut rng = SeededRng::from_seed(&seed_key(region, date));

    let candidates: Vec<&Capital> = match region {
        Region::UsStates => state_capitals.iter().collect(),
        Region::World => capitals.iter().collect(),
        _ => capitals.iter().filter(|c| c.region() == region).collect(),
    };

    if candidates.is_empty() {
        return Err(SelectError::NoCandidates(region));
    }

    Ok(candidates[rng.next_index(candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas;
    use crate::atlas::loader::capitals_from_records;

    fn tables() -> (Vec<Capital>, Vec<Capital>) {
        (
            capitals_from_records(atlas::CAPITALS),
            capitals_from_records(atlas::STATE_CAPITALS),
        )
    }

    #[test]
    fn seed_key_format() {
        assert_eq!(
            seed_key(Region::World, "2025-12-08"),
            "mapitals-2025-12-08-World"
        );
        assert_eq!(
            seed_key(Region::UsStates, "2025-12-08"),
            "mapitals-2025-12-08-US States"
        );
    }

    #[test]
    fn same_region_and_date_same_capital() {
        let (capitals, states) = tables();

        let first = daily_capital(&capitals, &states, Region::World, "2025-12-08").unwrap();
        let second = daily_capital(&capitals, &states, Region::World, "2025-12-08").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_dates_usually_differ() {
        let (capitals, states) = tables();

        let a = daily_capital(&capitals, &states, Region::World, "2025-12-08").unwrap();
        let b = daily_capital(&capitals, &states, Region::World, "2025-12-09").unwrap();
        // Statistically overwhelming with a table this large
        assert_ne!(a, b);
    }

    #[test]
    fn different_regions_usually_differ() {
        let (capitals, states) = tables();

        let world = daily_capital(&capitals, &states, Region::World, "2025-12-08").unwrap();
        let europe = daily_capital(&capitals, &states, Region::Europe, "2025-12-08").unwrap();
        assert_ne!(world, europe);
    }

    #[test]
    fn filtered_region_only_yields_matching_entries() {
        let (capitals, states) = tables();

        for date in ["2026-01-01", "2026-01-02", "2026-01-03", "2026-01-04"] {
            let pick = daily_capital(&capitals, &states, Region::Oceania, date).unwrap();
            assert_eq!(pick.region(), Region::Oceania);
        }
    }

    #[test]
    fn us_states_mode_draws_from_state_table() {
        let (capitals, states) = tables();

        let pick = daily_capital(&capitals, &states, Region::UsStates, "2025-12-08").unwrap();
        assert!(states.contains(pick));
        assert_eq!(pick.region(), Region::UsStates);
    }

    #[test]
    fn empty_candidate_list_is_an_explicit_error() {
        let err = daily_capital(&[], &[], Region::Europe, "2025-12-08").unwrap_err();
        assert_eq!(err, SelectError::NoCandidates(Region::Europe));
        assert!(err.to_string().contains("Europe"));
    }

    #[test]
    fn selection_spreads_across_dates() {
        // Thirty consecutive days should not all land on the same entry.
        let (capitals, states) = tables();

        let mut cities = std::collections::HashSet::new();
        for day in 1..=30 {
            let date = format!("2026-03-{day:02}");
            let pick = daily_capital(&capitals, &states, Region::World, &date).unwrap();
            cities.insert(pick.city().to_string());
        }
        assert!(cities.len() > 5, "only {} distinct picks", cities.len());
    }
}
