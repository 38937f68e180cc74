//! Display functions for command results

use super::formatters::{attempt_line, count_of, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print every step of an automated session
pub fn print_solve_result(result: &SolveResult) {
    let boards = result.solved.len();
    println!("\n{}", "─".repeat(60).cyan());
    let secrets: Vec<String> = result
        .secrets
        .iter()
        .map(|s| s.as_deref().unwrap_or("?????").to_uppercase())
        .collect();
    println!("Solving: {}", secrets.join(", ").bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, step.guess.to_uppercase().bold());
        for (board, outcome) in step.results.iter().enumerate() {
            let line = match outcome {
                Some(statuses) => attempt_line(&step.guess, statuses),
                None => "done".bright_black().to_string(),
            };
            if boards > 1 {
                println!("  #{}  {line}", board + 1);
            } else {
                println!("  {line}");
            }
        }
    }

    println!();
    let turns = result.steps.len();
    if result.all_solved() {
        println!(
            "{}",
            format!("✅ Solved in {}!", count_of(turns, "guess", "guesses"))
                .green()
                .bold()
        );
    } else {
        let solved = result.solved.iter().filter(|&&s| s).count();
        println!(
            "{}",
            format!(
                "❌ Solved {solved} of {boards} after {}",
                count_of(turns, "guess", "guesses")
            )
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failed.is_empty() {
        let mut failed = result.failed.clone();
        failed.sort();
        println!(
            "\n{} {}",
            format!("Failed ({}):", failed.len()).red().bold(),
            failed.join(", ")
        );
    }
}
