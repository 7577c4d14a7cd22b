//! Formatting utilities for terminal output

/// QWERTY rows for the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Space out masked text so underscores read as separate slots.
///
/// Word gaps widen to three spaces to stay visible.
#[must_use]
pub fn spaced(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        if c == ' ' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Wrong-guess meter: one filled slot per miss
#[must_use]
pub fn miss_meter(wrong_guesses: u32, max_wrong_guesses: u32) -> String {
    (0..max_wrong_guesses)
        .map(|i| if i < wrong_guesses { "✖" } else { "·" })
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_single_word() {
        assert_eq!(spaced("___"), "_ _ _");
        assert_eq!(spaced("Pa___"), "P a _ _ _");
    }

    #[test]
    fn spaced_widens_word_gaps() {
        assert_eq!(spaced("__ __"), "_ _   _ _");
    }

    #[test]
    fn spaced_empty() {
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn miss_meter_marks_misses() {
        assert_eq!(miss_meter(0, 6), "· · · · · ·");
        assert_eq!(miss_meter(2, 6), "✖ ✖ · · · ·");
        assert_eq!(miss_meter(6, 6), "✖ ✖ ✖ ✖ ✖ ✖");
    }

    #[test]
    fn keyboard_rows_cover_the_alphabet() {
        let letters: String = KEYBOARD_ROWS.concat();
        assert_eq!(letters.len(), 26);
        for c in 'A'..='Z' {
            assert!(letters.contains(c), "missing {c}");
        }
    }
}
