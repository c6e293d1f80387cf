//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, guess_to_emoji};
use crate::commands::{SolveReport, Suggestion};
use crate::core::{GamePhase, GameState, Guess};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colored_guess(&step.guess),
            step.guess.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match &report.result {
        Ok(guess_count) => println!(
            "{}",
            format!("✅ Solved in {guess_count} guesses!").green().bold()
        ),
        Err(reason) => println!(
            "{}",
            format!(
                "❌ Failed after {} guesses: {reason}",
                report.steps.len()
            )
            .red()
            .bold()
        ),
    }
}

/// Print every guess on a board
pub fn print_board(state: &GameState) {
    if state.is_empty() {
        println!("  (no guesses yet)");
        return;
    }
    for (index, guess) in state.guesses() {
        println!("  {index}. {}", colored_guess(guess));
    }
}

/// Print what the solver would play next
pub fn print_suggestion(suggestion: &Suggestion) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "NEXT GUESS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!();
    print_board(&suggestion.state);

    match suggestion.phase {
        GamePhase::Solved => {
            println!("\n{}", "✅ Already solved!".green().bold());
            return;
        }
        GamePhase::Failed => {
            println!("\n{}", "❌ All six guesses used".red().bold());
            return;
        }
        GamePhase::New | GamePhase::InProgress => {}
    }

    println!("\n📊 {} candidates remaining", suggestion.remaining);
    match &suggestion.next_guess {
        Some(word) => println!(
            "   Suggested guess: {}",
            word.text().to_uppercase().bright_yellow().bold()
        ),
        None => {
            println!(
                "{}",
                "   No word fits this feedback. Check the tile colours.".red()
            );
            return;
        }
    }

    let max = suggestion
        .top
        .first()
        .map_or(0.0, |candidate| candidate.frequency());
    if !suggestion.top.is_empty() {
        println!("\n📈 {}", "Most frequent candidates:".bright_cyan().bold());
        for candidate in &suggestion.top {
            println!(
                "   {} [{}] {:.1}",
                candidate.word().text().to_uppercase(),
                create_progress_bar(candidate.frequency(), max, 20).green(),
                candidate.frequency()
            );
        }
    }
}

/// Print the feedback a guess would get
pub fn print_evaluation(guess: &Guess, target: &str) {
    println!(
        "{} against {}: {}",
        colored_guess(guess),
        target.to_uppercase().bright_yellow(),
        guess_to_emoji(guess)
    );
    println!("Pattern: {}", guess.pattern());
}
