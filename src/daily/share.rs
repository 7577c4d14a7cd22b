//! Daily results and share text
//!
//! A finished daily puzzle is recorded as a [`DailyResult`] and can be
//! rendered as Wordle-style share text: one red square per wrong guess,
//! green squares for the headroom that was left.

use super::format_date;
use crate::core::Region;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Link appended to every share text
pub const SHARE_URL: &str = "https://www.mapitals.com";

/// Outcome of one daily puzzle, persisted for sharing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyResult {
    pub won: bool,
    pub wrong_guesses: u32,
    pub guessed_letters: Vec<char>,
}

impl DailyResult {
    /// Score this result contributes: headroom left on a win, zero on a loss
    #[must_use]
    pub const fn score(&self, max_wrong_guesses: u32) -> u32 {
        if self.won {
            max_wrong_guesses.saturating_sub(self.wrong_guesses)
        } else {
            0
        }
    }
}

/// Red squares for wrong guesses, green for the rest
#[must_use]
pub fn result_squares(wrong_guesses: u32, max_wrong_guesses: u32) -> String {
    (0..max_wrong_guesses)
        .map(|i| if i < wrong_guesses { '🟥' } else { '🟩' })
        .collect()
}

fn result_tally(result: &DailyResult) -> String {
    if result.won {
        result.wrong_guesses.to_string()
    } else {
        "X".to_string()
    }
}

/// Share text for a single region's daily puzzle
#[must_use]
pub fn share_text(
    region: Region,
    date: &str,
    result: &DailyResult,
    max_wrong_guesses: u32,
) -> String {
    format!(
        "Mapitals Daily - {region}\n{}\n{} {}/{max_wrong_guesses}\n\n{SHARE_URL}",
        format_date(date),
        result_squares(result.wrong_guesses, max_wrong_guesses),
        result_tally(result),
    )
}

/// Total score across all regions, counting only wins
#[must_use]
pub fn total_score(results: &[(Region, Option<DailyResult>)], max_wrong_guesses: u32) -> u32 {
    results
        .iter()
        .filter_map(|(_, result)| result.as_ref())
        .map(|result| result.score(max_wrong_guesses))
        .sum()
}

/// Share text summarizing every region's daily puzzle for one date
#[must_use]
pub fn all_regions_share_text(
    date: &str,
    results: &[(Region, Option<DailyResult>)],
    max_wrong_guesses: u32,
) -> String {
    let score = total_score(results, max_wrong_guesses);
    let wins = results
        .iter()
        .filter(|(_, r)| r.as_ref().is_some_and(|r| r.won))
        .count();

    let mut text = format!(
        "Mapitals Daily - All Regions\n{}\nScore: {score} | {wins}/{} wins\n\n",
        format_date(date),
        results.len(),
    );

    for (region, result) in results {
        if let Some(result) = result {
            let _ = writeln!(
                text,
                "{region}: {} {}/{max_wrong_guesses}",
                result_squares(result.wrong_guesses, max_wrong_guesses),
                result_tally(result),
            );
        }
    }

    let _ = write!(text, "\n{SHARE_URL}");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(wrong: u32) -> DailyResult {
        DailyResult {
            won: true,
            wrong_guesses: wrong,
            guessed_letters: vec!['p', 'a', 'r'],
        }
    }

    fn loss() -> DailyResult {
        DailyResult {
            won: false,
            wrong_guesses: 6,
            guessed_letters: vec!['z', 'q'],
        }
    }

    #[test]
    fn squares_mark_wrong_guesses_red() {
        assert_eq!(result_squares(0, 6), "🟩🟩🟩🟩🟩🟩");
        assert_eq!(result_squares(2, 6), "🟥🟥🟩🟩🟩🟩");
        assert_eq!(result_squares(6, 6), "🟥🟥🟥🟥🟥🟥");
    }

    #[test]
    fn result_score() {
        assert_eq!(win(0).score(6), 6);
        assert_eq!(win(4).score(6), 2);
        assert_eq!(loss().score(6), 0);
    }

    #[test]
    fn share_text_for_a_win() {
        let text = share_text(Region::World, "2025-12-07", &win(2), 6);
        assert_eq!(
            text,
            "Mapitals Daily - World\nDec 7, 2025\n🟥🟥🟩🟩🟩🟩 2/6\n\nhttps://www.mapitals.com"
        );
    }

    #[test]
    fn share_text_for_a_loss_shows_x() {
        let text = share_text(Region::Europe, "2025-12-07", &loss(), 6);
        assert!(text.contains("🟥🟥🟥🟥🟥🟥 X/6"));
        assert!(text.starts_with("Mapitals Daily - Europe\n"));
    }

    #[test]
    fn total_score_counts_wins_only() {
        let results = vec![
            (Region::World, Some(win(1))),
            (Region::Europe, Some(loss())),
            (Region::Asia, None),
            (Region::Africa, Some(win(3))),
        ];
        assert_eq!(total_score(&results, 6), 5 + 3);
    }

    #[test]
    fn all_regions_share_text_lists_completed_regions() {
        let results = vec![
            (Region::World, Some(win(0))),
            (Region::Europe, None),
            (Region::UsStates, Some(loss())),
        ];
        let text = all_regions_share_text("2025-12-07", &results, 6);

        assert!(text.starts_with("Mapitals Daily - All Regions\nDec 7, 2025\n"));
        assert!(text.contains("Score: 6 | 1/3 wins"));
        assert!(text.contains("World: 🟩🟩🟩🟩🟩🟩 0/6"));
        assert!(text.contains("US States: 🟥🟥🟥🟥🟥🟥 X/6"));
        assert!(!text.contains("Europe:"));
        assert!(text.ends_with(SHARE_URL));
    }

    #[test]
    fn daily_result_json_round_trip() {
        let result = win(2);
        let json = serde_json::to_string(&result).unwrap();
        let parsed: DailyResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);

        // Letters serialize as single-character strings under camelCase keys
        assert!(json.contains("\"guessedLetters\":[\"p\",\"a\",\"r\"]"));
        assert!(json.contains("\"wrongGuesses\":2"));
    }
}
