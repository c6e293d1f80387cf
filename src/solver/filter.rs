//! Candidate filtering
//!
//! Narrows the corpus to the words consistent with a game state, most
//! frequent first.

use super::constraints::ConstraintSet;
use crate::core::GameState;
use crate::wordlists::{Candidate, Corpus, by_frequency_desc};

/// Filter any ordered candidate sequence by the constraints of `state`
///
/// Survivors are sorted by descending frequency. The sort is stable, so
/// candidates with equal scores keep their input order. With no guesses made
/// every candidate survives.
pub fn filter_candidates<'a, I>(state: &GameState, candidates: I) -> Vec<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let constraints = ConstraintSet::from_state(state);

    let mut survivors: Vec<&'a Candidate> = candidates
        .into_iter()
        .filter(|c| constraints.admits(c.word()))
        .collect();
    survivors.sort_by(|a, b| by_frequency_desc(a, b));

    survivors
}

/// Words of `corpus` still possible given `state`, most frequent first
///
/// # Examples
/// ```
/// use wordle_alarm::core::{GameState, evaluate_guess};
/// use wordle_alarm::solver::filter_possible_words;
/// use wordle_alarm::wordlists::Corpus;
///
/// let corpus = Corpus::embedded();
/// let mut state = GameState::new();
/// state.push(evaluate_guess("trace", "crate").unwrap()).unwrap();
///
/// let possible = filter_possible_words(&state, &corpus);
/// assert!(possible.iter().any(|c| c.word().text() == "crate"));
/// assert!(possible.iter().all(|c| c.word().text() != "trace"));
/// ```
#[must_use]
pub fn filter_possible_words<'a>(state: &GameState, corpus: &'a Corpus) -> Vec<&'a Candidate> {
    let survivors = filter_candidates(state, corpus);
    log::debug!(
        "Filtered {} of {} words after {} guess(es)",
        survivors.len(),
        corpus.len(),
        state.num_guesses()
    );
    survivors
}
