//! Daily share command
//!
//! Builds share text from stored daily results without ever revealing an
//! unplayed answer.

use crate::core::{MAX_WRONG_GUESSES, Region};
use crate::daily::{all_regions_share_text, share_text};
use crate::store::{Profile, Store};

/// What the share command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutput {
    /// Ready-to-paste share text
    Ready(String),
    /// The daily puzzle for this region and date has no stored result yet
    NotCompleted { region: Region, date: String },
    /// No region has a stored result for this date
    NothingCompleted { date: String },
}

/// Share text for one region's daily puzzle
pub fn daily_share<S: Store>(profile: &Profile<S>, region: Region, date: &str) -> ShareOutput {
    profile.daily_result(region, date).map_or_else(
        || ShareOutput::NotCompleted {
            region,
            date: date.to_string(),
        },
        |result| ShareOutput::Ready(share_text(region, date, &result, MAX_WRONG_GUESSES)),
    )
}

/// Share text summarizing every completed region for a date
pub fn all_regions_share<S: Store>(profile: &Profile<S>, date: &str) -> ShareOutput {
    let results = profile.all_region_results(date);
    if results.iter().all(|(_, r)| r.is_none()) {
        return ShareOutput::NothingCompleted {
            date: date.to_string(),
        };
    }
    ShareOutput::Ready(all_regions_share_text(date, &results, MAX_WRONG_GUESSES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::DailyResult;
    use crate::store::MemoryStore;

    fn profile_with_world_win() -> Profile<MemoryStore> {
        let mut profile = Profile::new(MemoryStore::new());
        profile
            .save_daily_result(
                Region::World,
                "2025-12-08",
                &DailyResult {
                    won: true,
                    wrong_guesses: 1,
                    guessed_letters: vec!['a', 'e', 'i'],
                },
            )
            .unwrap();
        profile
    }

    #[test]
    fn share_for_completed_region() {
        let profile = profile_with_world_win();
        match daily_share(&profile, Region::World, "2025-12-08") {
            ShareOutput::Ready(text) => {
                assert!(text.starts_with("Mapitals Daily - World"));
                assert!(text.contains("1/6"));
            }
            other => panic!("expected share text, got {other:?}"),
        }
    }

    #[test]
    fn share_for_unplayed_region_reports_not_completed() {
        let profile = profile_with_world_win();
        assert_eq!(
            daily_share(&profile, Region::Asia, "2025-12-08"),
            ShareOutput::NotCompleted {
                region: Region::Asia,
                date: "2025-12-08".to_string(),
            }
        );
    }

    #[test]
    fn all_regions_share_with_partial_completion() {
        let profile = profile_with_world_win();
        match all_regions_share(&profile, "2025-12-08") {
            ShareOutput::Ready(text) => {
                assert!(text.contains("All Regions"));
                assert!(text.contains("World:"));
            }
            other => panic!("expected share text, got {other:?}"),
        }
    }

    #[test]
    fn all_regions_share_with_nothing_completed() {
        let profile = Profile::new(MemoryStore::new());
        assert_eq!(
            all_regions_share(&profile, "2025-12-08"),
            ShareOutput::NothingCompleted {
                date: "2025-12-08".to_string(),
            }
        );
    }
}
