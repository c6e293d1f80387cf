//! Wordle Alarm - CLI
//!
//! Frequency-ranked word-elimination solver with offline, batch and live
//! terminal modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_alarm::{
    commands::{
        PlayEnd, SimulationConfig, SolveConfig, TerminalFeedback, TerminalSink,
        print_simulation_statistics, run_play, run_simulation, select_targets, solve_word,
        suggest,
    },
    core::{GameState, Guess, Word, evaluate_guess},
    output::{print_board, print_evaluation, print_solve_report, print_suggestion},
    solver::Solver,
    wordlists::Corpus,
};

#[derive(Parser)]
#[command(
    name = "wordle-alarm",
    about = "Wordle solver that always guesses the most frequent word still possible",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Answer table as CSV with `word` and `frequency` columns (default: bundled table)
    #[arg(short, long, global = true, env = "WORDLE_CORPUS")]
    corpus: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a known target word offline
    Solve {
        /// The target word to solve
        target: String,

        /// Override the opening guess (default: TRACE)
        #[arg(short, long)]
        opening: Option<String>,

        /// Show candidate counts after each guess
        #[arg(long)]
        counts: bool,
    },

    /// Self-play against many corpus words and report statistics
    Simulate {
        /// Test only the N most frequent words
        #[arg(short, long, conflicts_with = "sample")]
        limit: Option<usize>,

        /// Test N words drawn at random
        #[arg(short, long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Override the opening guess (default: TRACE)
        #[arg(short, long)]
        opening: Option<String>,
    },

    /// Play live: type each suggested word into the game and report the colours
    Play {
        /// Guesses already on the board, as WORD:PATTERN (e.g. trace:-YG--)
        #[arg(short, long = "guess", value_name = "WORD:PATTERN")]
        guesses: Vec<Guess>,

        /// Override the opening guess (default: TRACE)
        #[arg(short, long)]
        opening: Option<String>,
    },

    /// Show the next guess and the best candidates for a board
    Suggest {
        /// Guesses on the board, as WORD:PATTERN (e.g. trace:-YG--)
        #[arg(short, long = "guess", value_name = "WORD:PATTERN")]
        guesses: Vec<Guess>,

        /// How many candidates to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Show the feedback a guess gets against a target
    Evaluate {
        guess: String,
        target: String,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn load_corpus(path: Option<&PathBuf>) -> Result<Corpus> {
    match path {
        Some(path) => Corpus::load(path)
            .with_context(|| format!("failed to load corpus from {}", path.display())),
        None => Ok(Corpus::embedded()),
    }
}

fn build_solver<'a>(corpus: &'a Corpus, opening: Option<&str>) -> Result<Solver<'a>> {
    let solver = Solver::new(corpus);
    match opening {
        Some(text) => {
            let word = Word::new(text).with_context(|| format!("invalid opening {text:?}"))?;
            Ok(solver.with_opening(word))
        }
        None => Ok(solver),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let corpus = load_corpus(cli.corpus.as_ref())?;
    log::info!("Loaded {} candidate words", corpus.len());

    match cli.command {
        Commands::Solve {
            target,
            opening,
            counts,
        } => run_solve_command(&corpus, target, opening.as_deref(), counts),
        Commands::Simulate {
            limit,
            sample,
            seed,
            opening,
        } => {
            let config = SimulationConfig {
                limit,
                sample,
                seed,
                show_progress: true,
            };
            run_simulate_command(&corpus, &config, opening.as_deref())
        }
        Commands::Play { guesses, opening } => {
            run_play_command(&corpus, guesses, opening.as_deref())
        }
        Commands::Suggest { guesses, top } => run_suggest_command(&corpus, guesses, top),
        Commands::Evaluate { guess, target } => {
            let feedback = evaluate_guess(&guess, &target)?;
            print_evaluation(&feedback, &target);
            Ok(())
        }
    }
}

fn run_solve_command(
    corpus: &Corpus,
    target: String,
    opening: Option<&str>,
    counts: bool,
) -> Result<()> {
    let solver = build_solver(corpus, None)?;
    let mut config = SolveConfig::new(target);
    config.opening = opening
        .map(Word::new)
        .transpose()
        .context("invalid opening")?;

    let report = solve_word(config, &solver)?;
    print_solve_report(&report, counts);
    Ok(())
}

fn run_simulate_command(
    corpus: &Corpus,
    config: &SimulationConfig,
    opening: Option<&str>,
) -> Result<()> {
    let solver = build_solver(corpus, opening)?;
    let targets = select_targets(corpus, config);

    println!("\n{}", "═".repeat(70));
    println!(" Wordle Solver Self-Play ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting {} of {} words, opening with {}",
        targets.len(),
        corpus.len(),
        solver.opening().text().to_uppercase()
    );
    println!();

    let stats = run_simulation(&solver, &targets, config.show_progress);
    print_simulation_statistics(&stats);
    Ok(())
}

fn run_play_command(corpus: &Corpus, guesses: Vec<Guess>, opening: Option<&str>) -> Result<()> {
    let solver = build_solver(corpus, opening)?;
    let initial = GameState::from_guesses(guesses).context("invalid board")?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Alarm - Live Play                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type each suggested word into the game, then enter the colours:");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if it was right, 'quit' to stop");

    let mut feedback = TerminalFeedback::new(io::stdin().lock(), io::stdout());
    let mut sink = TerminalSink::new(io::stdout());

    match run_play(&solver, initial, &mut feedback, &mut sink) {
        Ok(PlayEnd::Solved(outcome)) => {
            println!("\n🎉 Solved in {} guesses!", outcome.guess_count);
            print_board(&outcome.state);
            Ok(())
        }
        Ok(PlayEnd::Cancelled(state)) => {
            println!("\n👋 Stopped. Board so far:");
            print_board(&state);
            Ok(())
        }
        Err(failure) => {
            println!("\nBoard reached:");
            print_board(&failure.state);
            Err(failure.into())
        }
    }
}

fn run_suggest_command(corpus: &Corpus, guesses: Vec<Guess>, top: usize) -> Result<()> {
    let solver = build_solver(corpus, None)?;
    let state = GameState::from_guesses(guesses).context("invalid board")?;
    print_suggestion(&suggest(&solver, state, top));
    Ok(())
}
