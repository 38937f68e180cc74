//! Benchmark command
//!
//! Auto-solves many answers in parallel and reports the guess distribution.

use super::solve::solve_word;
use crate::puzzle::PuzzleOptions;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Answers that ran out of attempts or hints
    pub failed: Vec<String>,
    /// Guess counts of the solved answers
    pub distribution: FxHashMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Outcome of one answer
enum Run {
    Solved(usize),
    Failed,
}

/// Auto-solve every word of `answers` as the secret of its own puzzle
///
/// `template` supplies the dictionary, filters and attempt limit; its secret
/// is replaced by each answer in turn.
#[must_use]
pub fn run_benchmark(
    template: &PuzzleOptions,
    answers: &[String],
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();
    progress.set_length(answers.len() as u64);

    let runs: Vec<(&String, Run)> = answers
        .par_iter()
        .map(|answer| {
            let run = match solve_word(template.clone().with_answer(answer.as_str())) {
                Ok(result) if result.all_solved() => Run::Solved(result.steps.len()),
                Ok(_) => Run::Failed,
                Err(err) => {
                    debug!("benchmark \"{answer}\": {err}");
                    Run::Failed
                }
            };
            progress.inc(1);
            (answer, run)
        })
        .collect();
    progress.finish_and_clear();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failed = Vec::new();
    for (answer, run) in runs {
        match run {
            Run::Solved(guesses) => *distribution.entry(guesses).or_insert(0) += 1,
            Run::Failed => failed.push(answer.clone()),
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(g, n)| g * n).sum();
    let duration = start.elapsed();

    BenchmarkResult {
        total_words: answers.len(),
        solved,
        failed,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        duration,
        words_per_second: answers.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Progress bar styled for benchmark runs
#[must_use]
pub fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {elapsed}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}
