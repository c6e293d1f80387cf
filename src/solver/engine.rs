//! Solve loop
//!
//! Repeatedly guesses the most frequent word still possible, records the
//! feedback and stops on a win, on exhaustion or on the first error.

use super::collaborators::{EvaluatorFeedback, FeedbackSource, GuessSink, RecordingSink};
use super::filter::filter_possible_words;
use crate::core::{GameState, Word};
use crate::error::{SolveError, SolveFailure};
use crate::wordlists::Corpus;

/// First word of a fresh game
pub const DEFAULT_OPENING: &str = "trace";

/// A won game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Number of the winning guess (1..=6)
    pub guess_count: usize,
    pub state: GameState,
}

/// Result of a single [`Solver::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A guess was recorded and the game goes on
    Continue,
    /// The game is won on the given guess number
    Solved(usize),
}

/// Word-elimination solver over a shared, read-only corpus
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    corpus: &'a Corpus,
    opening: Word,
}

impl<'a> Solver<'a> {
    /// Create a solver opening with [`DEFAULT_OPENING`]
    ///
    /// # Panics
    /// Will not panic - the default opening is a valid constant word.
    #[must_use]
    pub fn new(corpus: &'a Corpus) -> Self {
        let opening = Word::new(DEFAULT_OPENING).expect("default opening is a 5-letter word");
        Self { corpus, opening }
    }

    /// Replace the opening guess used for fresh games
    #[must_use]
    pub fn with_opening(mut self, opening: Word) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn opening(&self) -> &Word {
        &self.opening
    }

    /// The word to play next
    ///
    /// A fresh game gets the opening guess; otherwise the most frequent word
    /// consistent with the feedback so far.
    ///
    /// # Errors
    /// Returns `SolveError::NoCandidatesRemaining` if no word fits the feedback.
    pub fn next_guess(&self, state: &GameState) -> Result<&Word, SolveError> {
        if state.is_empty() {
            return Ok(&self.opening);
        }

        filter_possible_words(state, self.corpus)
            .first()
            .map(|candidate| candidate.word())
            .ok_or(SolveError::NoCandidatesRemaining)
    }

    /// Make one guess: choose, submit, read feedback, record
    ///
    /// `state` only changes once the full feedback has been read, so a host
    /// can stop between steps without leaving it half-written.
    ///
    /// # Errors
    /// - `SolveError::SolveExhausted` if all six guesses are already used
    ///   (or this step used the last one without winning)
    /// - `SolveError::NoCandidatesRemaining` if nothing fits the feedback
    /// - `SolveError::Upstream` if a collaborator fails
    /// - `SolveError::FeedbackMismatch` if the feedback spells another word
    /// - `SolveError::InvalidInput` if the state refuses the guess
    pub fn step<F, G>(
        &self,
        state: &mut GameState,
        feedback: &mut F,
        sink: &mut G,
    ) -> Result<Progress, SolveError>
    where
        F: FeedbackSource + ?Sized,
        G: GuessSink + ?Sized,
    {
        if let Some(index) = state.solved_at() {
            return Ok(Progress::Solved(index.get()));
        }
        let index = state.next_index().ok_or(SolveError::SolveExhausted)?;

        let guess = self.next_guess(state)?;
        log::info!("Guess {index}: {guess}");

        sink.submit_guess(guess).map_err(SolveError::Upstream)?;
        let tiles = feedback.read_feedback(guess).map_err(SolveError::Upstream)?;

        if tiles.word() != guess {
            return Err(SolveError::FeedbackMismatch {
                submitted: guess.text().to_string(),
                received: tiles.word().text().to_string(),
            });
        }

        let solved = tiles.is_solved();
        log::debug!("Feedback {index}: {}", tiles.pattern());
        state.record(index, tiles)?;

        if solved {
            log::info!("Won in {index} guesses!");
            Ok(Progress::Solved(index.get()))
        } else if state.is_exhausted() {
            Err(SolveError::SolveExhausted)
        } else {
            Ok(Progress::Continue)
        }
    }

    /// Play from `initial` until the game is won or fails
    ///
    /// A fresh state opens with the opening guess; a partially played state
    /// resumes at its first unfilled guess.
    ///
    /// # Errors
    /// Returns a `SolveFailure` holding the reason (see [`Solver::step`]) and
    /// the state reached, which includes every guess recorded before the failure.
    pub fn solve<F, G>(
        &self,
        initial: GameState,
        feedback: &mut F,
        sink: &mut G,
    ) -> Result<SolveOutcome, SolveFailure>
    where
        F: FeedbackSource + ?Sized,
        G: GuessSink + ?Sized,
    {
        let mut state = initial;
        if !state.is_empty() {
            log::info!("Resuming game state {state}");
        }

        loop {
            match self.step(&mut state, feedback, sink) {
                Ok(Progress::Continue) => {}
                Ok(Progress::Solved(guess_count)) => {
                    return Ok(SolveOutcome { guess_count, state });
                }
                Err(reason) => {
                    log::warn!("Solve failed: {reason} ({state})");
                    return Err(SolveFailure::new(reason, state));
                }
            }
        }
    }

    /// Self-play against a known target, no external I/O
    ///
    /// # Errors
    /// Returns `SolveError::InvalidInput` (with an empty state) if `target` is
    /// not a 5-letter word, otherwise fails like [`Solver::solve`].
    ///
    /// # Examples
    /// ```
    /// use wordle_alarm::solver::Solver;
    /// use wordle_alarm::wordlists::Corpus;
    ///
    /// let corpus = Corpus::embedded();
    /// let outcome = Solver::new(&corpus).solve_for_target("crate").unwrap();
    /// assert!(outcome.guess_count <= 6);
    /// assert!(outcome.state.is_solved());
    /// ```
    pub fn solve_for_target(&self, target: &str) -> Result<SolveOutcome, SolveFailure> {
        let target = Word::new(target).map_err(|e| {
            SolveFailure::new(SolveError::InvalidInput(e.into()), GameState::new())
        })?;

        let mut feedback = EvaluatorFeedback::new(target);
        let mut sink = RecordingSink::new();
        self.solve(GameState::new(), &mut feedback, &mut sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guess;
    use crate::error::UpstreamError;
    use crate::wordlists::Candidate;

    fn small_corpus() -> Corpus {
        Corpus::from_pairs(&[
            ("trace", 50.0),
            ("brace", 45.0),
            ("crate", 40.0),
            ("grace", 40.0),
            ("round", 30.0),
        ])
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn next_guess_opens_fresh_game() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus).with_opening(word("round"));
        assert_eq!(solver.next_guess(&GameState::new()).unwrap().text(), "round");
    }

    #[test]
    fn next_guess_takes_most_frequent_survivor() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus);
        let state = GameState::from_guesses([Guess::evaluate(&word("trace"), &word("grace"))])
            .unwrap();
        assert_eq!(solver.next_guess(&state).unwrap().text(), "brace");
    }

    #[test]
    fn step_records_one_guess() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus);
        let mut state = GameState::new();
        let mut feedback = EvaluatorFeedback::new(word("grace"));
        let mut sink = RecordingSink::new();

        let progress = solver.step(&mut state, &mut feedback, &mut sink).unwrap();
        assert_eq!(progress, Progress::Continue);
        assert_eq!(state.num_guesses(), 1);
        assert_eq!(sink.submitted(), &[word("trace")]);
    }

    #[test]
    fn solve_walks_frequency_order() {
        let corpus = small_corpus();
        let outcome = Solver::new(&corpus).solve_for_target("grace").unwrap();
        let words: Vec<&str> = outcome
            .state
            .guesses()
            .map(|(_, g)| g.word().text())
            .collect();
        assert_eq!(words, vec!["trace", "brace", "grace"]);
        assert_eq!(outcome.guess_count, 3);
    }

    #[test]
    fn solve_for_invalid_target_fails_fast() {
        let corpus = small_corpus();
        let failure = Solver::new(&corpus).solve_for_target("gracious").unwrap_err();
        assert!(matches!(failure.reason, SolveError::InvalidInput(_)));
        assert!(failure.state.is_empty());
    }

    #[test]
    fn target_outside_corpus_runs_out_of_candidates() {
        let corpus = small_corpus();
        let failure = Solver::new(&corpus).solve_for_target("lousy").unwrap_err();
        assert!(matches!(failure.reason, SolveError::NoCandidatesRemaining));
        assert_eq!(failure.state.num_guesses(), 1);
    }

    #[test]
    fn mismatched_feedback_is_rejected() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus);
        let mut feedback = |_: &Word| -> Result<Guess, UpstreamError> {
            Ok(Guess::evaluate(&word("crate"), &word("grace")))
        };
        let mut sink = RecordingSink::new();

        let failure = solver
            .solve(GameState::new(), &mut feedback, &mut sink)
            .unwrap_err();
        assert!(matches!(
            failure.reason,
            SolveError::FeedbackMismatch { ref submitted, ref received }
                if submitted == "trace" && received == "crate"
        ));
        assert!(failure.state.is_empty());
    }

    #[test]
    fn solver_is_shareable_across_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<Corpus>();
        assert_sync::<Candidate>();
        assert_sync::<GameState>();
        assert_sync::<Solver<'static>>();
    }
}
