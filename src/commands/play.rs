//! Live play at the terminal
//!
//! The person at the keyboard stands in for the game page: the solver prints
//! each word to type, and the tile colours are read back as a pattern.

use crate::core::{GameState, Guess, Word};
use crate::error::{SolveError, SolveFailure, UpstreamError};
use crate::output::formatters::colored_guess;
use crate::solver::{
    FeedbackSource, GuessSink, Progress, SolveOutcome, Solver, filter_possible_words,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// The player asked to stop; raised by [`TerminalFeedback`]
#[derive(Debug, Error)]
#[error("cancelled by the player")]
pub struct Cancelled;

/// How an interactive game ended
#[derive(Debug)]
pub enum PlayEnd {
    Solved(SolveOutcome),
    /// Stopped between guesses; the state holds every guess recorded so far
    Cancelled(GameState),
}

/// Shows each chosen word to the player
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> GuessSink for TerminalSink<W> {
    fn submit_guess(&mut self, guess: &Word) -> Result<(), UpstreamError> {
        writeln!(
            self.out,
            "\n📝 Type this guess: {}",
            guess.text().to_uppercase()
        )?;
        Ok(())
    }
}

/// Reads the tile colours the player saw for each guess
pub struct TerminalFeedback<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> TerminalFeedback<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    fn prompt(&mut self, word: &Word) -> io::Result<Option<String>> {
        write!(
            self.out,
            "Feedback for {} (G/Y/-, 'win', or 'quit'): ",
            word.text().to_uppercase()
        )?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> FeedbackSource for TerminalFeedback<R, W> {
    fn read_feedback(&mut self, guess: &Word) -> Result<Guess, UpstreamError> {
        loop {
            let Some(input) = self.prompt(guess)? else {
                return Err(Box::new(Cancelled));
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Err(Box::new(Cancelled)),
                "win" | "correct" | "solved" => return Ok(Guess::from_pattern(guess, "GGGGG")?),
                pattern => match Guess::from_pattern(guess, pattern) {
                    Ok(feedback) => return Ok(feedback),
                    Err(e) => writeln!(self.out, "❌ {e}")?,
                },
            }
        }
    }
}

/// Play interactively until the game is won, fails, or the player quits
///
/// Starts from `initial`, so a game already under way resumes at its first
/// unfilled guess instead of re-opening.
///
/// # Errors
///
/// Returns a `SolveFailure` with the partial state if the solve fails for
/// any reason other than the player cancelling.
pub fn run_play<F, G>(
    solver: &Solver,
    initial: GameState,
    feedback: &mut F,
    sink: &mut G,
) -> Result<PlayEnd, SolveFailure>
where
    F: FeedbackSource + ?Sized,
    G: GuessSink + ?Sized,
{
    let mut state = initial;

    if !state.is_empty() {
        println!("\n🔄 Continuing today's game:");
        for (index, guess) in state.guesses() {
            println!("  {index}. {}", colored_guess(guess));
        }
    }

    loop {
        if let Some(index) = state.next_index()
            && !state.is_solved()
        {
            let remaining = filter_possible_words(&state, solver.corpus()).len();
            println!("\n── Guess {index}: {remaining} candidates remaining");
        }

        match solver.step(&mut state, feedback, sink) {
            Ok(Progress::Continue) => {
                if let Some(guess) = state.last_guess() {
                    println!("  {}", colored_guess(guess));
                }
            }
            Ok(Progress::Solved(guess_count)) => {
                return Ok(PlayEnd::Solved(SolveOutcome { guess_count, state }));
            }
            Err(SolveError::Upstream(e)) if e.is::<Cancelled>() => {
                return Ok(PlayEnd::Cancelled(state));
            }
            Err(reason) => return Err(SolveFailure::new(reason, state)),
        }
    }
}
