//! Single-puzzle game state machine
//!
//! Tracks guessed letters and wrong-guess count for one capital, moving
//! through `InProgress` -> `Won`/`Lost`. Terminal states accept no further
//! letters; the caller owns when a new game begins.

use super::capital::Capital;
use super::text::{calculate_score, is_letter_in_text, is_word_complete, mask_text};
use rustc_hash::FxHashSet;

/// Wrong guesses allowed before the game is lost
pub const MAX_WRONG_GUESSES: u32 = 6;

/// Map zoom per wrong-guess count; each miss zooms the view out one step
pub const ADJUSTED_ZOOM_LEVELS: [f64; 7] = [2.0, 2.0, 3.0, 3.5, 4.0, 5.0, 6.0];

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What a single guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter appears in the target but the puzzle is not finished
    Hit,
    /// Letter is absent from the target
    Miss,
    /// The guess completed both the city and the country/state
    Won { score: u32 },
    /// The guess was the last allowed miss
    Lost,
    /// Letter was guessed before; nothing changed
    AlreadyGuessed,
    /// Game already ended; nothing changed
    GameOver,
}

/// One puzzle in play
#[derive(Debug, Clone)]
pub struct Game {
    capital: Capital,
    guessed: FxHashSet<char>,
    wrong_guesses: u32,
    max_wrong_guesses: u32,
    status: GameStatus,
    score: u32,
}

impl Game {
    #[must_use]
    pub fn new(capital: Capital) -> Self {
        Self::with_max_wrong_guesses(capital, MAX_WRONG_GUESSES)
    }

    #[must_use]
    pub fn with_max_wrong_guesses(capital: Capital, max_wrong_guesses: u32) -> Self {
        Self {
            capital,
            guessed: FxHashSet::default(),
            wrong_guesses: 0,
            max_wrong_guesses,
            status: GameStatus::InProgress,
            score: 0,
        }
    }

    /// Apply one guessed letter.
    ///
    /// The letter is case-folded before anything else. Hits and misses both
    /// record the letter (the keyboard shows misses too); repeat guesses and
    /// guesses after a terminal state are no-ops.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.status != GameStatus::InProgress {
            return GuessOutcome::GameOver;
        }

        let letter = letter.to_lowercase().next().unwrap_or(letter);
        if self.guessed.contains(&letter) {
            return GuessOutcome::AlreadyGuessed;
        }
        self.guessed.insert(letter);

        if is_letter_in_text(letter, &self.capital.full_text()) {
            if is_word_complete(self.capital.city(), &self.guessed)
                && is_word_complete(self.capital.region_name(), &self.guessed)
            {
                self.status = GameStatus::Won;
                self.score = calculate_score(self.wrong_guesses, self.max_wrong_guesses);
                GuessOutcome::Won { score: self.score }
            } else {
                GuessOutcome::Hit
            }
        } else {
            self.wrong_guesses += 1;
            if self.wrong_guesses >= self.max_wrong_guesses {
                self.status = GameStatus::Lost;
                GuessOutcome::Lost
            } else {
                GuessOutcome::Miss
            }
        }
    }

    /// Concede the puzzle, ending it as a loss
    pub fn resign(&mut self) {
        if self.status == GameStatus::InProgress {
            self.status = GameStatus::Lost;
        }
    }

    #[must_use]
    pub fn masked_city(&self) -> String {
        mask_text(self.capital.city(), &self.guessed)
    }

    #[must_use]
    pub fn masked_region_name(&self) -> String {
        mask_text(self.capital.region_name(), &self.guessed)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    #[inline]
    #[must_use]
    pub const fn max_wrong_guesses(&self) -> u32 {
        self.max_wrong_guesses
    }

    /// Score earned, nonzero only after a win
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn capital(&self) -> &Capital {
        &self.capital
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        self.guessed.contains(&letter)
    }

    /// Guessed letters in sorted order, for display
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Zoom level for the current wrong-guess count
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        let idx = (self.wrong_guesses as usize).min(ADJUSTED_ZOOM_LEVELS.len() - 1);
        ADJUSTED_ZOOM_LEVELS[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Region;

    fn paris() -> Capital {
        Capital::new("Paris", "France", 48.8566, 2.3522, Region::Europe)
    }

    #[test]
    fn new_game_starts_in_progress() {
        let game = Game::new(paris());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.wrong_guesses(), 0);
        assert!(game.guessed_letters().is_empty());
        assert_eq!(game.masked_city(), "_____");
        assert_eq!(game.masked_region_name(), "______");
    }

    #[test]
    fn hit_records_letter_without_penalty() {
        let mut game = Game::new(paris());
        assert_eq!(game.guess('p'), GuessOutcome::Hit);
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.masked_city(), "P____");
    }

    #[test]
    fn miss_increments_wrong_guesses() {
        let mut game = Game::new(paris());
        assert_eq!(game.guess('z'), GuessOutcome::Miss);
        assert_eq!(game.wrong_guesses(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn miss_counts_letters_only_in_region_name_as_hits() {
        // 'f' is in "France" but not "Paris"
        let mut game = Game::new(paris());
        assert_eq!(game.guess('f'), GuessOutcome::Hit);
        assert_eq!(game.wrong_guesses(), 0);
    }

    #[test]
    fn repeat_guess_is_noop() {
        let mut game = Game::new(paris());
        game.guess('z');
        assert_eq!(game.guess('z'), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.wrong_guesses(), 1);

        game.guess('p');
        assert_eq!(game.guess('P'), GuessOutcome::AlreadyGuessed);
    }

    #[test]
    fn uppercase_guess_normalized() {
        let mut game = Game::new(paris());
        assert_eq!(game.guess('P'), GuessOutcome::Hit);
        assert_eq!(game.masked_city(), "P____");
    }

    #[test]
    fn win_requires_both_words_complete() {
        let mut game = Game::new(paris());
        // All of "Paris" but not all of "France"
        for letter in ['p', 'a', 'r', 'i', 's'] {
            assert_ne!(game.guess(letter), GuessOutcome::Won { score: 6 });
        }
        assert_eq!(game.masked_city(), "Paris");
        assert_eq!(game.status(), GameStatus::InProgress);

        for letter in ['f', 'n', 'c'] {
            game.guess(letter);
        }
        // Final letter completes "France" too
        assert_eq!(game.guess('e'), GuessOutcome::Won { score: 6 });
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.score(), 6);
    }

    #[test]
    fn win_score_reflects_wrong_guesses() {
        let mut game = Game::new(paris());
        game.guess('z');
        game.guess('q');
        for letter in ['p', 'a', 'r', 'i', 's', 'f', 'n', 'c'] {
            game.guess(letter);
        }
        assert_eq!(game.guess('e'), GuessOutcome::Won { score: 4 });
    }

    #[test]
    fn six_misses_lose_the_game() {
        let mut game = Game::new(paris());
        for letter in ['z', 'q', 'x', 'w', 'k'] {
            assert_eq!(game.guess(letter), GuessOutcome::Miss);
        }
        assert_eq!(game.guess('j'), GuessOutcome::Lost);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.wrong_guesses(), 6);
    }

    #[test]
    fn guesses_after_game_over_are_ignored() {
        let mut game = Game::new(paris());
        for letter in ['z', 'q', 'x', 'w', 'k', 'j'] {
            game.guess(letter);
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.guess('p'), GuessOutcome::GameOver);
        assert_eq!(game.masked_city(), "_____");
    }

    #[test]
    fn resign_loses_in_progress_game() {
        let mut game = Game::new(paris());
        game.resign();
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn resign_does_not_overturn_a_win() {
        let mut game = Game::new(paris());
        for letter in ['p', 'a', 'r', 'i', 's', 'f', 'n', 'c', 'e'] {
            game.guess(letter);
        }
        assert_eq!(game.status(), GameStatus::Won);
        game.resign();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn zoom_level_tracks_misses() {
        let mut game = Game::new(paris());
        assert!((game.zoom_level() - 2.0).abs() < f64::EPSILON);
        game.guess('z');
        assert!((game.zoom_level() - 2.0).abs() < f64::EPSILON);
        game.guess('q');
        assert!((game.zoom_level() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn punctuated_names_win_without_guessing_punctuation() {
        let capital = Capital::new("N'Djamena", "Chad", 12.1348, 15.0557, Region::Africa);
        let mut game = Game::new(capital);
        let mut last = GuessOutcome::Hit;
        for letter in ['n', 'd', 'j', 'a', 'm', 'e', 'c', 'h'] {
            last = game.guess(letter);
        }
        assert_eq!(last, GuessOutcome::Won { score: 6 });
    }
}
