//! Word-elimination solver
//!
//! Derives constraints from the feedback so far, filters the corpus and
//! drives the guess/feedback loop through injected collaborators.

pub mod collaborators;
pub mod constraints;
mod engine;
mod filter;

pub use collaborators::{EvaluatorFeedback, FeedbackSource, GuessSink, RecordingSink};
pub use constraints::ConstraintSet;
pub use engine::{DEFAULT_OPENING, Progress, SolveOutcome, Solver};
pub use filter::{filter_candidates, filter_possible_words};
