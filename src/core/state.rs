//! Game-state tracking
//!
//! Records up to six guesses for one puzzle attempt. Each slot is written at
//! most once; nothing is removed or rewritten.

use super::tile::Guess;
use crate::error::WordleError;
use std::fmt;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// Ordinal of a guess, 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuessIndex(u8);

impl GuessIndex {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(MAX_GUESSES as u8);

    /// # Errors
    /// Returns `WordleError::InvalidGuessIndex` outside 1..=6.
    pub fn new(number: usize) -> Result<Self, WordleError> {
        if (1..=MAX_GUESSES).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(WordleError::InvalidGuessIndex(number))
        }
    }

    /// 1-based guess number
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Iterate all indices in chronological order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_GUESSES as u8).map(Self)
    }

    const fn slot(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for GuessIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse lifecycle of one game, derived from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No guess made yet
    New,
    InProgress,
    /// Some guess was all correct
    Solved,
    /// Six guesses made, none all correct
    Failed,
}

/// The guesses and feedback of one puzzle attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    guesses: [Option<Guess>; MAX_GUESSES],
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from guesses in chronological order (e.g. rows read off a board)
    ///
    /// # Errors
    /// Fails like [`GameState::push`] on the first guess that cannot be recorded.
    pub fn from_guesses(guesses: impl IntoIterator<Item = Guess>) -> Result<Self, WordleError> {
        let mut state = Self::new();
        for guess in guesses {
            state.push(guess)?;
        }
        Ok(state)
    }

    #[must_use]
    pub fn get(&self, index: GuessIndex) -> Option<&Guess> {
        self.guesses[index.slot()].as_ref()
    }

    /// Record the feedback of guess `index`
    ///
    /// # Errors
    /// - `WordleError::GuessAlreadyRecorded` if the slot is already filled
    /// - `WordleError::GameOver` if the game has already been solved
    pub fn record(&mut self, index: GuessIndex, guess: Guess) -> Result<(), WordleError> {
        if self.is_solved() {
            return Err(WordleError::GameOver);
        }
        let slot = &mut self.guesses[index.slot()];
        if slot.is_some() {
            return Err(WordleError::GuessAlreadyRecorded(index));
        }
        *slot = Some(guess);
        Ok(())
    }

    /// Record `guess` at the first unfilled index and return that index
    ///
    /// # Errors
    /// Returns `WordleError::GameOver` if the game is solved or all six slots are used.
    pub fn push(&mut self, guess: Guess) -> Result<GuessIndex, WordleError> {
        let index = self.next_index().ok_or(WordleError::GameOver)?;
        self.record(index, guess)?;
        Ok(index)
    }

    /// First index without a guess, `None` when all six are used
    #[must_use]
    pub fn next_index(&self) -> Option<GuessIndex> {
        GuessIndex::all().find(|&index| self.get(index).is_none())
    }

    /// Populated guesses in chronological order
    pub fn guesses(&self) -> impl Iterator<Item = (GuessIndex, &Guess)> {
        GuessIndex::all().filter_map(|index| self.get(index).map(|g| (index, g)))
    }

    /// Most recent populated guess
    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.guesses.iter().rev().find_map(Option::as_ref)
    }

    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.iter().filter(|g| g.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_guesses() == 0
    }

    /// Index of the all-correct guess, if any
    #[must_use]
    pub fn solved_at(&self) -> Option<GuessIndex> {
        self.guesses().find(|(_, g)| g.is_solved()).map(|(i, _)| i)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_at().is_some()
    }

    /// All six guesses used without a solve
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.num_guesses() >= MAX_GUESSES && !self.is_solved()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.is_solved() {
            GamePhase::Solved
        } else if self.is_exhausted() {
            GamePhase::Failed
        } else if self.is_empty() {
            GamePhase::New
        } else {
            GamePhase::InProgress
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .guesses()
            .map(|(index, guess)| format!("{index}:{}", guess.pattern()))
            .collect();
        let words: Vec<&str> = self.guesses().map(|(_, g)| g.word().text()).collect();
        write!(f, "[{}] ({})", words.join(", "), rows.join(" "))
    }
}
