//! Core domain types for Wordle
//!
//! Words, tiles, guesses and the game state, plus the feedback evaluator.
//! Everything here is pure and free of I/O.

mod evaluate;
mod state;
mod tile;
mod word;

pub use evaluate::evaluate_guess;
pub use state::{GamePhase, GameState, GuessIndex, MAX_GUESSES};
pub use tile::{Guess, Tile, TileState};
pub use word::{WORD_LENGTH, Word, WordError};
