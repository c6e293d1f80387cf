//! Next-guess suggestion
//!
//! Reports what the solver would play from a given board, without playing it.

use crate::core::{GamePhase, GameState, Word};
use crate::solver::{Solver, filter_possible_words};
use crate::wordlists::Candidate;

/// What the solver would do next from a board
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub state: GameState,
    pub phase: GamePhase,
    /// Number of corpus words consistent with the board
    pub remaining: usize,
    /// The word the solver would play; `None` once the game is over or nothing fits
    pub next_guess: Option<Word>,
    /// Most frequent surviving candidates, best first
    pub top: Vec<Candidate>,
}

/// Build a suggestion listing at most `top` surviving candidates
#[must_use]
pub fn suggest(solver: &Solver, state: GameState, top: usize) -> Suggestion {
    let survivors = filter_possible_words(&state, solver.corpus());
    let phase = state.phase();

    let next_guess = match phase {
        GamePhase::Solved | GamePhase::Failed => None,
        GamePhase::New | GamePhase::InProgress => solver.next_guess(&state).ok().cloned(),
    };

    Suggestion {
        remaining: survivors.len(),
        top: survivors.into_iter().take(top).cloned().collect(),
        next_guess,
        phase,
        state,
    }
}
