//! Formatting utilities for terminal output

use crate::core::{Guess, TileState};
use colored::Colorize;

/// Render a guess as coloured letter tiles
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .tiles()
        .iter()
        .map(|tile| {
            let letter = format!(" {} ", char::from(tile.letter().to_ascii_uppercase()));
            match tile.state() {
                TileState::Correct => letter.black().on_green().bold(),
                TileState::Present => letter.black().on_yellow().bold(),
                TileState::Absent => letter.white().on_bright_black(),
            }
            .to_string()
        })
        .collect()
}

/// Render a guess as its word followed by emoji tiles
#[must_use]
pub fn guess_to_emoji(guess: &Guess) -> String {
    format!("{} {}", guess.word().text().to_uppercase(), guess.to_emoji())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn guess(word: &str, pattern: &str) -> Guess {
        Guess::from_pattern(&Word::new(word).unwrap(), pattern).unwrap()
    }

    #[test]
    fn colored_guess_shows_every_letter() {
        let rendered = colored_guess(&guess("trace", "-YGG-"));
        for letter in ["T", "R", "A", "C", "E"] {
            assert!(rendered.contains(letter));
        }
    }

    #[test]
    fn emoji_line() {
        assert_eq!(guess_to_emoji(&guess("trace", "GY---")), "TRACE 🟩🟨⬜⬜⬜");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
