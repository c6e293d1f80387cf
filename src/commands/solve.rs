//! Word solving command
//!
//! Solves a known target offline and returns the solution path.

use crate::core::{GameState, Guess, Word};
use crate::error::{SolveError, WordleError};
use crate::solver::{Solver, filter_possible_words};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub opening: Option<Word>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            opening: None,
        }
    }
}

/// Result of solving a word
pub struct SolveReport {
    pub target: String,
    pub steps: Vec<GuessStep>,
    /// Winning guess number, or why the solve stopped
    pub result: Result<usize, SolveError>,
}

impl SolveReport {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.result.is_ok()
    }
}

/// A single guess in the solution
pub struct GuessStep {
    pub guess: Guess,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.target` by self-play
///
/// # Errors
///
/// Returns an error only if the target is not a 5-letter word. A solve that
/// runs out of candidates or guesses is reported in `SolveReport::result`.
pub fn solve_word(config: SolveConfig, solver: &Solver) -> Result<SolveReport, WordleError> {
    let target = Word::new(&config.target)?;

    let solver = match config.opening {
        Some(opening) => solver.clone().with_opening(opening),
        None => solver.clone(),
    };

    let (result, state) = match solver.solve_for_target(target.text()) {
        Ok(outcome) => (Ok(outcome.guess_count), outcome.state),
        Err(failure) => (Err(failure.reason), failure.state),
    };

    Ok(SolveReport {
        target: target.text().to_string(),
        steps: trace_steps(&solver, &state),
        result,
    })
}

/// Replay `state` guess by guess, counting candidates around each guess
fn trace_steps(solver: &Solver, state: &GameState) -> Vec<GuessStep> {
    let corpus = solver.corpus();
    let mut replay = GameState::new();
    let mut before = filter_possible_words(&replay, corpus).len();
    let mut steps = Vec::new();

    for (index, guess) in state.guesses() {
        if replay.record(index, guess.clone()).is_err() {
            break;
        }
        let after = filter_possible_words(&replay, corpus).len();
        steps.push(GuessStep {
            guess: guess.clone(),
            candidates_before: before,
            candidates_after: after,
        });
        before = after;
    }

    steps
}
