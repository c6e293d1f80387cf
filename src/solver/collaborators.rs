//! Injected I/O capabilities of the solve loop
//!
//! The loop never talks to a page or terminal itself. A `GuessSink` types the
//! chosen word into the game and a `FeedbackSource` reads back the tiles.

use crate::core::{Guess, Word};
use crate::error::UpstreamError;

/// Submits a guess to the game
pub trait GuessSink {
    /// # Errors
    /// Any failure of the underlying driver; it is passed to the caller unchanged.
    fn submit_guess(&mut self, guess: &Word) -> Result<(), UpstreamError>;
}

/// Reads the feedback the game shows for the guess just submitted
pub trait FeedbackSource {
    /// # Errors
    /// Any failure of the underlying driver; it is passed to the caller unchanged.
    fn read_feedback(&mut self, guess: &Word) -> Result<Guess, UpstreamError>;
}

impl<F> GuessSink for F
where
    F: FnMut(&Word) -> Result<(), UpstreamError>,
{
    fn submit_guess(&mut self, guess: &Word) -> Result<(), UpstreamError> {
        self(guess)
    }
}

impl<F> FeedbackSource for F
where
    F: FnMut(&Word) -> Result<Guess, UpstreamError>,
{
    fn read_feedback(&mut self, guess: &Word) -> Result<Guess, UpstreamError> {
        self(guess)
    }
}

/// Offline feedback: scores every guess against a known target
#[derive(Debug, Clone)]
pub struct EvaluatorFeedback {
    target: Word,
}

impl EvaluatorFeedback {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl FeedbackSource for EvaluatorFeedback {
    fn read_feedback(&mut self, guess: &Word) -> Result<Guess, UpstreamError> {
        Ok(Guess::evaluate(guess, &self.target))
    }
}

/// Offline sink: remembers submitted words and never fails
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    submitted: Vec<Word>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Words submitted so far, in order
    #[must_use]
    pub fn submitted(&self) -> &[Word] {
        &self.submitted
    }
}

impl GuessSink for RecordingSink {
    fn submit_guess(&mut self, guess: &Word) -> Result<(), UpstreamError> {
        self.submitted.push(guess.clone());
        Ok(())
    }
}
