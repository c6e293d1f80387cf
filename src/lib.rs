//! Wordle Alarm
//!
//! A Wordle solver that narrows a frequency-ranked answer corpus using the
//! tile feedback seen so far and always guesses the most common word left.
//! Guesses go out and feedback comes back through injected collaborators,
//! so the same loop drives offline self-play, a terminal session or a
//! browser automation layer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_alarm::core::{GameState, Guess, Word};
//! use wordle_alarm::solver::{Solver, filter_possible_words};
//! use wordle_alarm::wordlists::Corpus;
//!
//! let corpus = Corpus::embedded();
//!
//! // Feedback for one guess
//! let guess = Guess::evaluate(&Word::new("trace").unwrap(), &Word::new("crate").unwrap());
//! assert_eq!(guess.pattern(), "YGGYG");
//!
//! // Words still possible after it
//! let state = GameState::from_guesses([guess]).unwrap();
//! assert!(filter_possible_words(&state, &corpus).len() < corpus.len());
//!
//! // Full self-play
//! let outcome = Solver::new(&corpus).solve_for_target("crate").unwrap();
//! assert!(outcome.state.is_solved());
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Filtering and the solve loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{SolveError, SolveFailure, UpstreamError, WordleError};
