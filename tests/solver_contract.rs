//! End-to-end behaviour of the solve loop through the public API

use wordle_alarm::core::{GameState, Guess, MAX_GUESSES, Word};
use wordle_alarm::solver::{
    EvaluatorFeedback, RecordingSink, Solver, filter_candidates, filter_possible_words,
};
use wordle_alarm::wordlists::Corpus;
use wordle_alarm::{SolveError, UpstreamError};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

/// Words that differ only in the first letter, most frequent first
fn ight_corpus() -> Corpus {
    Corpus::from_pairs(&[
        ("fight", 9.0),
        ("light", 8.0),
        ("might", 7.0),
        ("night", 6.0),
        ("right", 5.0),
        ("sight", 4.0),
        ("tight", 3.0),
        ("wight", 2.0),
    ])
}

#[test]
fn six_misses_exhaust_the_game() {
    let corpus = ight_corpus();
    let solver = Solver::new(&corpus).with_opening(word("fight"));

    let failure = solver.solve_for_target("wight").unwrap_err();
    assert!(matches!(failure.reason, SolveError::SolveExhausted));
    assert_eq!(failure.state.num_guesses(), MAX_GUESSES);
    assert!(failure.state.is_exhausted());
    assert!(!failure.state.is_solved());
}

#[test]
fn full_board_is_left_untouched() {
    let corpus = ight_corpus();
    let solver = Solver::new(&corpus);
    let target = word("wight");
    let initial = GameState::from_guesses(
        ["fight", "light", "might", "night", "right", "sight"]
            .into_iter()
            .map(|w| Guess::evaluate(&word(w), &target)),
    )
    .unwrap();

    let mut feedback = EvaluatorFeedback::new(target);
    let mut sink = RecordingSink::new();
    let failure = solver
        .solve(initial.clone(), &mut feedback, &mut sink)
        .unwrap_err();

    assert!(matches!(failure.reason, SolveError::SolveExhausted));
    assert_eq!(failure.state, initial);
    assert!(sink.submitted().is_empty());
}

#[test]
fn opening_with_the_target_wins_at_once() {
    let corpus = Corpus::embedded();
    for candidate in &corpus {
        let solver = Solver::new(&corpus).with_opening(candidate.word().clone());
        let outcome = solver.solve_for_target(candidate.word().text()).unwrap();
        assert_eq!(outcome.guess_count, 1, "{}", candidate.word());
    }
}

#[test]
fn target_survives_every_filter() {
    let corpus = Corpus::embedded();
    let solver = Solver::new(&corpus);

    for candidate in corpus.iter().take(150) {
        let target = candidate.word();
        let played = match solver.solve_for_target(target.text()) {
            Ok(outcome) => outcome.state,
            Err(failure) => failure.state,
        };

        let mut replay = GameState::new();
        for (_, guess) in played.guesses() {
            if guess.is_solved() {
                break;
            }
            replay.push(guess.clone()).unwrap();
            let survivors = filter_possible_words(&replay, &corpus);
            assert!(
                survivors.iter().any(|c| c.word() == target),
                "{target} filtered out after {replay}"
            );
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let corpus = Corpus::embedded();
    let first = Guess::evaluate(&word("trace"), &word("grace"));
    let state = GameState::from_guesses([first]).unwrap();

    let once = filter_possible_words(&state, &corpus);
    let twice = filter_candidates(&state, once.iter().copied());
    assert_eq!(once, twice);
}

#[test]
fn more_feedback_never_grows_the_candidates() {
    let corpus = Corpus::embedded();
    let target = word("eerie");
    let mut state = GameState::new();
    let mut previous = filter_possible_words(&state, &corpus);

    for guess in ["trace", "crepe", "sheep"] {
        state.push(Guess::evaluate(&word(guess), &target)).unwrap();
        let current = filter_possible_words(&state, &corpus);
        assert!(current.len() <= previous.len());
        assert!(current.iter().all(|c| previous.contains(c)));
        previous = current;
    }
}

#[test]
fn resumes_from_first_unfilled_guess() {
    let corpus = Corpus::embedded();
    let solver = Solver::new(&corpus);
    let target = word("grace");
    let initial = GameState::from_guesses([Guess::evaluate(&word("crate"), &target)]).unwrap();

    let mut feedback = EvaluatorFeedback::new(target.clone());
    let mut sink = RecordingSink::new();
    let outcome = solver.solve(initial, &mut feedback, &mut sink).unwrap();

    assert!(outcome.state.is_solved());
    assert_eq!(outcome.state.guesses().next().unwrap().1.word().text(), "crate");
    assert!(!sink.submitted().iter().any(|w| w.text() == "trace"));
    assert_eq!(outcome.guess_count, outcome.state.num_guesses());
    assert_eq!(sink.submitted().len(), outcome.guess_count - 1);
    assert_eq!(sink.submitted().last(), Some(&target));
}

#[test]
fn closures_can_stand_in_for_the_page() {
    let corpus = Corpus::embedded();
    let solver = Solver::new(&corpus);
    let target = word("crate");

    let mut typed = Vec::new();
    let mut sink = |guess: &Word| -> Result<(), UpstreamError> {
        typed.push(guess.text().to_string());
        Ok(())
    };
    let mut feedback =
        |guess: &Word| -> Result<Guess, UpstreamError> { Ok(Guess::evaluate(guess, &target)) };

    let outcome = solver
        .solve(GameState::new(), &mut feedback, &mut sink)
        .unwrap();
    assert_eq!(typed.len(), outcome.guess_count);
    assert_eq!(typed.first().map(String::as_str), Some("trace"));
    assert_eq!(typed.last().map(String::as_str), Some("crate"));
}

#[test]
fn feedback_failure_is_passed_through() {
    let corpus = Corpus::embedded();
    let solver = Solver::new(&corpus);
    let mut feedback =
        |_: &Word| -> Result<Guess, UpstreamError> { Err("board never rendered".into()) };
    let mut sink = RecordingSink::new();

    let failure = solver
        .solve(GameState::new(), &mut feedback, &mut sink)
        .unwrap_err();
    match failure.reason {
        SolveError::Upstream(e) => assert_eq!(e.to_string(), "board never rendered"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(failure.state.is_empty());
    assert_eq!(sink.submitted(), &[word("trace")]);
}

#[test]
fn sink_failure_keeps_earlier_guesses() {
    let corpus = Corpus::embedded();
    let solver = Solver::new(&corpus);
    let target = word("sheep");

    let mut calls = 0;
    let mut sink = |_: &Word| -> Result<(), UpstreamError> {
        calls += 1;
        if calls > 1 {
            return Err("keyboard detached".into());
        }
        Ok(())
    };
    let mut feedback = EvaluatorFeedback::new(target);

    let failure = solver
        .solve(GameState::new(), &mut feedback, &mut sink)
        .unwrap_err();
    assert!(matches!(failure.reason, SolveError::Upstream(_)));
    assert_eq!(failure.state.num_guesses(), 1);
    assert_eq!(failure.state.last_guess().unwrap().word().text(), "trace");
}
