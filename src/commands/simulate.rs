//! Batch self-play
//!
//! Runs the solver against many corpus words in parallel and gathers
//! statistics. Every run must end solved or exhausted within six guesses.

use crate::core::Word;
use crate::error::SolveError;
use crate::solver::Solver;
use crate::wordlists::Corpus;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which corpus words to play against
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationConfig {
    /// Take only the first `limit` words (most frequent first)
    pub limit: Option<usize>,
    /// Draw this many words at random instead
    pub sample: Option<usize>,
    /// Seed for `sample`, so runs are reproducible
    pub seed: u64,
    pub show_progress: bool,
}

/// How one simulated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Solved(usize),
    Exhausted,
    NoCandidates,
    /// Any other error; not expected in self-play against corpus words
    Error,
}

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub outcome: RunOutcome,
}

/// Statistics from a batch run
#[derive(Debug)]
pub struct SimulationStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub no_candidates: usize,
    pub errors: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

/// Pick the target words for a batch run
#[must_use]
pub fn select_targets<'a>(corpus: &'a Corpus, config: &SimulationConfig) -> Vec<&'a Word> {
    if let Some(n) = config.sample {
        let mut rng = StdRng::seed_from_u64(config.seed);
        return corpus
            .as_slice()
            .choose_multiple(&mut rng, n)
            .map(|c| c.word())
            .collect();
    }

    corpus
        .iter()
        .take(config.limit.unwrap_or(corpus.len()))
        .map(|c| c.word())
        .collect()
}

/// Play one offline game against `target`
#[must_use]
pub fn simulate_word(solver: &Solver, target: &Word) -> WordTestResult {
    let (outcome, state) = match solver.solve_for_target(target.text()) {
        Ok(outcome) => (RunOutcome::Solved(outcome.guess_count), outcome.state),
        Err(failure) => {
            let outcome = match failure.reason {
                SolveError::SolveExhausted => RunOutcome::Exhausted,
                SolveError::NoCandidatesRemaining => RunOutcome::NoCandidates,
                _ => RunOutcome::Error,
            };
            (outcome, failure.state)
        }
    };

    WordTestResult {
        word: target.text().to_string(),
        guesses: state
            .guesses()
            .map(|(_, g)| g.word().text().to_string())
            .collect(),
        outcome,
    }
}

/// Run the solver against every target, in parallel
///
/// The corpus is shared read-only between worker threads; each game owns its state.
#[must_use]
pub fn run_simulation(
    solver: &Solver,
    targets: &[&Word],
    show_progress: bool,
) -> SimulationStatistics {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<WordTestResult> = targets
        .par_iter()
        .map(|target| {
            let result = simulate_word(solver, target);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(&results, start.elapsed())
}

fn summarize(results: &[WordTestResult], total_time: Duration) -> SimulationStatistics {
    let mut guess_distribution = BTreeMap::new();
    let mut exhausted = 0;
    let mut no_candidates = 0;
    let mut errors = 0;
    let mut failed_words = Vec::new();

    for result in results {
        match result.outcome {
            RunOutcome::Solved(n) => *guess_distribution.entry(n).or_insert(0) += 1,
            RunOutcome::Exhausted => exhausted += 1,
            RunOutcome::NoCandidates => no_candidates += 1,
            RunOutcome::Error => errors += 1,
        }
        if !matches!(result.outcome, RunOutcome::Solved(_)) {
            failed_words.push(result.word.clone());
        }
    }

    let solved: usize = guess_distribution.values().sum();
    let total_guesses: usize = guess_distribution.iter().map(|(n, count)| n * count).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut worst_words: Vec<(String, usize)> = results
        .iter()
        .filter_map(|r| match r.outcome {
            RunOutcome::Solved(n) if n >= 5 => Some((r.word.clone(), n)),
            _ => None,
        })
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    SimulationStatistics {
        total_words: results.len(),
        solved,
        exhausted,
        no_candidates,
        errors,
        max_guesses: guess_distribution.keys().next_back().copied().unwrap_or(0),
        guess_distribution,
        total_time,
        average_guesses,
        worst_words,
        failed_words,
    }
}

/// Print batch statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    let pct = |n: usize| {
        if stats.total_words == 0 {
            0.0
        } else {
            n as f64 / stats.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", pct(stats.solved)).green()
    );
    if stats.exhausted > 0 {
        println!(
            "  Out of guesses:      {} {}",
            stats.exhausted,
            format!("({:.1}%)", pct(stats.exhausted)).red()
        );
    }
    if stats.no_candidates > 0 {
        println!(
            "  No candidates left:  {} {}",
            stats.no_candidates,
            format!("({:.1}%)", pct(stats.no_candidates)).red()
        );
    }
    if stats.errors > 0 {
        println!(
            "  Errors:              {} {}",
            stats.errors,
            format!("({:.1}%)", pct(stats.errors)).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=6 {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses} guesses: {bar} {count:4} ({:5.1}%)", pct(count));
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5-6 guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_corpus_word_terminates_within_six_guesses() {
        let corpus = Corpus::embedded();
        let solver = Solver::new(&corpus);
        let targets = select_targets(&corpus, &SimulationConfig::default());
        assert_eq!(targets.len(), corpus.len());

        let stats = run_simulation(&solver, &targets, false);
        assert_eq!(stats.total_words, corpus.len());
        assert_eq!(stats.solved + stats.exhausted, stats.total_words);
        assert_eq!(stats.no_candidates, 0);
        assert_eq!(stats.errors, 0);
        assert!(stats.max_guesses <= 6);
    }

    #[test]
    fn every_run_makes_at_most_six_guesses() {
        let corpus = Corpus::embedded();
        let solver = Solver::new(&corpus);
        let config = SimulationConfig {
            limit: Some(100),
            ..Default::default()
        };
        for target in select_targets(&corpus, &config) {
            let result = simulate_word(&solver, target);
            assert!(!result.guesses.is_empty());
            assert!(
                result.guesses.len() <= 6,
                "{} took {:?}",
                result.word,
                result.guesses
            );
            assert_eq!(result.guesses[0], "trace");
            match result.outcome {
                RunOutcome::Solved(n) => {
                    assert_eq!(n, result.guesses.len());
                    assert_eq!(result.guesses.last(), Some(&result.word));
                }
                RunOutcome::Exhausted => assert_eq!(result.guesses.len(), 6),
                other => panic!("{} ended with {other:?}", result.word),
            }
        }
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let corpus = Corpus::embedded();
        let config = SimulationConfig {
            sample: Some(25),
            seed: 7,
            ..Default::default()
        };
        let first = select_targets(&corpus, &config);
        let second = select_targets(&corpus, &config);
        assert_eq!(first.len(), 25);
        assert_eq!(first, second);
    }

    #[test]
    fn limit_takes_most_frequent_words() {
        let corpus = Corpus::embedded();
        let config = SimulationConfig {
            limit: Some(3),
            ..Default::default()
        };
        let targets = select_targets(&corpus, &config);
        let expected: Vec<&Word> = corpus.iter().take(3).map(|c| c.word()).collect();
        assert_eq!(targets, expected);
    }

    #[test]
    fn distribution_sums_to_solved() {
        let corpus = Corpus::embedded();
        let solver = Solver::new(&corpus);
        let targets = select_targets(
            &corpus,
            &SimulationConfig {
                limit: Some(40),
                ..Default::default()
            },
        );
        let stats = run_simulation(&solver, &targets, false);
        let sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(sum, stats.solved);
        for &n in stats.guess_distribution.keys() {
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn empty_batch() {
        let corpus = Corpus::embedded();
        let solver = Solver::new(&corpus);
        let stats = run_simulation(&solver, &[], false);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.solved, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }
}
