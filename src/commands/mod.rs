//! Command implementations

pub mod play;
pub mod simulate;
pub mod solve;
pub mod suggest;

pub use play::{Cancelled, PlayEnd, TerminalFeedback, TerminalSink, run_play};
pub use simulate::{
    RunOutcome, SimulationConfig, SimulationStatistics, print_simulation_statistics,
    run_simulation, select_targets,
};
pub use solve::{GuessStep, SolveConfig, SolveReport, solve_word};
pub use suggest::{Suggestion, suggest};
