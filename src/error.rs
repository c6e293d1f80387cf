//! Error types
//!
//! `WordleError` covers malformed input to the domain types. `SolveError` is
//! the reason a solve stopped; it always travels inside a `SolveFailure`
//! together with the state reached so far.

use crate::core::{GameState, GuessIndex, WordError};
use thiserror::Error;

/// Error raised by an injected collaborator (page driver, terminal, ...)
pub type UpstreamError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid input to words, tiles, guesses or the game state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordleError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("tile position must be between 1 and 5, got {0}")]
    InvalidPosition(u8),
    #[error("tile letter must be an ASCII letter, got {0:?}")]
    InvalidLetter(char),
    #[error("unknown tile state {0:?}")]
    UnknownTileState(String),
    #[error("a guess needs exactly 5 tiles, got {0}")]
    TileCount(usize),
    #[error("tiles out of order: expected position {expected}, found {found}")]
    TileOrder { expected: u8, found: u8 },
    #[error("invalid feedback pattern {0:?} (use 5 of G, Y, -)")]
    InvalidPattern(String),
    #[error("guess number must be between 1 and 6, got {0}")]
    InvalidGuessIndex(usize),
    #[error("guess {0} has already been recorded")]
    GuessAlreadyRecorded(GuessIndex),
    #[error("the game is already over")]
    GameOver,
}

/// Why a solve attempt stopped without a win
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    InvalidInput(#[from] WordleError),
    /// The constraint filter left nothing to guess; the feedback is inconsistent
    #[error("no candidate words remain")]
    NoCandidatesRemaining,
    /// Six guesses made, none all correct
    #[error("failed to solve in 6 guesses")]
    SolveExhausted,
    /// Feedback came back for a different word than the one submitted
    #[error("submitted {submitted:?} but feedback was for {received:?}")]
    FeedbackMismatch { submitted: String, received: String },
    #[error("collaborator failed")]
    Upstream(#[source] UpstreamError),
}

/// A failed solve, carrying the partial game state
#[derive(Debug, Error)]
#[error("solve stopped after {} guess(es)", .state.num_guesses())]
pub struct SolveFailure {
    #[source]
    pub reason: SolveError,
    pub state: GameState,
}

impl SolveFailure {
    #[must_use]
    pub const fn new(reason: SolveError, state: GameState) -> Self {
        Self { reason, state }
    }
}
