//! Letter masking and completion checks
//!
//! Pure string/set operations over the target text. Spaces, periods,
//! hyphens, apostrophes, and commas are always shown and never need to be
//! guessed; everything else is revealed letter by letter.

use rustc_hash::FxHashSet;

/// Characters that display unmasked and count as complete without a guess
const PASS_THROUGH: [char; 5] = [' ', '.', '-', '\'', ','];

/// Whether a character displays without being guessed
#[inline]
#[must_use]
pub fn is_pass_through(c: char) -> bool {
    PASS_THROUGH.contains(&c)
}

#[inline]
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Mask unrevealed letters with underscores.
///
/// Pass-through punctuation is always shown. Revealed letters keep their
/// original case; membership in `guessed` is tested case-folded.
#[must_use]
pub fn mask_text(text: &str, guessed: &FxHashSet<char>) -> String {
    text.chars()
        .map(|c| {
            if is_pass_through(c) || guessed.contains(&fold(c)) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Whether every letter of `text` has been guessed.
///
/// Empty or punctuation-only text is vacuously complete.
#[must_use]
pub fn is_word_complete(text: &str, guessed: &FxHashSet<char>) -> bool {
    text.chars()
        .all(|c| is_pass_through(c) || guessed.contains(&fold(c)))
}

/// Case-insensitive membership test of a letter in the full target text
#[must_use]
pub fn is_letter_in_text(letter: char, full_text: &str) -> bool {
    let letter = fold(letter);
    full_text.chars().any(|c| fold(c) == letter)
}

/// Score for a won game: unused wrong guesses are the reward
#[must_use]
pub const fn calculate_score(wrong_guesses: u32, max_wrong_guesses: u32) -> u32 {
    max_wrong_guesses.saturating_sub(wrong_guesses)
}
