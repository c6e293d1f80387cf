//! Feedback scoring
//!
//! Reproduces the game's colouring of a guess against a known target,
//! including duplicate letters. Used for offline self-play and tests.

use super::tile::{Guess, TileState};
use super::word::{WORD_LENGTH, Word};
use crate::error::WordleError;

impl Guess {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches are `Correct` and consume one
    ///    occurrence from the target's letter pool; the rest start `Absent`
    /// 2. Second pass, left to right: an `Absent` tile whose letter is still
    ///    in the pool becomes `Present` and consumes one occurrence
    ///
    /// A repeated guess letter is therefore coloured at most as many times as
    /// it occurs in the target.
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut states = [TileState::Absent; WORD_LENGTH];
        let mut available = target.char_counts();

        for (i, state) in states.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                *state = TileState::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, state) in states.iter_mut().enumerate() {
            if *state != TileState::Absent {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *state = TileState::Present;
                *count -= 1;
            }
        }

        Self::from_states(guess, states)
    }
}

/// Compute the feedback the game would show for `guess` when the answer is `target`
///
/// Both words are case-insensitive and must be exactly five ASCII letters.
///
/// # Errors
/// Returns `WordleError::InvalidWord` if either word is invalid; nothing is
/// evaluated in that case.
///
/// # Examples
/// ```
/// use wordle_alarm::core::evaluate_guess;
///
/// let feedback = evaluate_guess("trace", "CRATE").unwrap();
/// assert_eq!(feedback.pattern(), "YGGYG");
/// ```
pub fn evaluate_guess(guess: &str, target: &str) -> Result<Guess, WordleError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(Guess::evaluate(&guess, &target))
}
