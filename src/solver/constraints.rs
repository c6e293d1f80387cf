//! Constraint derivation
//!
//! Turns the feedback recorded in a game state into letter-position and
//! letter-membership rules, and checks candidate words against them.

use crate::core::{GameState, TileState, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Rules implied by every guess made so far
///
/// Recomputed from the game state each turn; never stored between turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    correct_positions: [Option<u8>; WORD_LENGTH],
    present_letters: FxHashSet<u8>,
    wrong_positions: FxHashMap<u8, FxHashSet<usize>>,
    absent_letters: FxHashSet<u8>,
    guessed_words: FxHashSet<Word>,
}

impl ConstraintSet {
    /// Derive the constraints of `state`
    ///
    /// Correct and present tiles of every guess are collected before any
    /// absent tile is considered, so a letter greyed out in one slot but
    /// matched by another occurrence (in the same or another guess) is never
    /// banned outright.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let mut constraints = Self::default();

        for (_, guess) in state.guesses() {
            constraints.guessed_words.insert(guess.word().clone());

            for tile in guess.tiles() {
                match tile.state() {
                    TileState::Correct => {
                        constraints.correct_positions[tile.index()] = Some(tile.letter());
                    }
                    TileState::Present => {
                        constraints.present_letters.insert(tile.letter());
                        constraints
                            .wrong_positions
                            .entry(tile.letter())
                            .or_default()
                            .insert(tile.index());
                    }
                    TileState::Absent => {}
                }
            }
        }

        for (_, guess) in state.guesses() {
            for tile in guess.tiles() {
                if tile.state() == TileState::Absent && !constraints.is_known_letter(tile.letter()) {
                    constraints.absent_letters.insert(tile.letter());
                }
            }
        }

        constraints
    }

    fn is_known_letter(&self, letter: u8) -> bool {
        self.present_letters.contains(&letter) || self.correct_positions.contains(&Some(letter))
    }

    /// No guesses contributed any rule
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guessed_words.is_empty()
    }

    /// Whether `word` is consistent with every rule
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if self.guessed_words.contains(word) {
            return false;
        }

        let letters = word.chars();

        let correct_ok = self
            .correct_positions
            .iter()
            .zip(letters)
            .all(|(expected, &actual)| expected.is_none_or(|l| l == actual));
        if !correct_ok {
            return false;
        }

        let wrong_ok = self.wrong_positions.iter().all(|(&letter, positions)| {
            word.has_letter(letter) && positions.iter().all(|&p| letters[p] != letter)
        });
        if !wrong_ok {
            return false;
        }

        if !self.present_letters.iter().all(|&l| word.has_letter(l)) {
            return false;
        }

        !self.absent_letters.iter().any(|&l| word.has_letter(l))
    }

    /// Letter fixed at a 0-based index, if known
    #[must_use]
    pub fn correct_at(&self, index: usize) -> Option<u8> {
        self.correct_positions.get(index).copied().flatten()
    }

    #[must_use]
    pub const fn present_letters(&self) -> &FxHashSet<u8> {
        &self.present_letters
    }

    /// 0-based indices where a present letter is known not to be
    #[must_use]
    pub fn wrong_positions(&self, letter: u8) -> Option<&FxHashSet<usize>> {
        self.wrong_positions.get(&letter)
    }

    #[must_use]
    pub const fn absent_letters(&self) -> &FxHashSet<u8> {
        &self.absent_letters
    }

    #[must_use]
    pub const fn guessed_words(&self) -> &FxHashSet<Word> {
        &self.guessed_words
    }
}
