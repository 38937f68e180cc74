//! Wordle Hints - CLI
//!
//! Play Wordle in the terminal with optional hints, let the hint engine play
//! by itself, or get help with a puzzle played elsewhere.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use wordle_hints::{
    commands::{progress_bar, run_assist, run_benchmark, solve_puzzles},
    config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_NUM_PUZZLES, DEFAULT_SOLVE_SPEED, GameConfig},
    core::{Filters, filter::with_length},
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_solve_result},
    puzzle::{DEFAULT_WORD_LENGTH, Puzzle},
    wordlists::{self, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle in the terminal, with a hint engine that can help or play by itself",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file with one word per line (default: embedded English list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(PlayArgs),

    /// Auto-solve fixed or random answers and print every step
    Solve(SolveArgs),

    /// Line-mode helper for a puzzle played elsewhere
    Assist(AssistArgs),

    /// Auto-solve many answers in parallel and report the guess distribution
    Benchmark(BenchmarkArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Pinned answers, one per puzzle
    #[arg(short, long, value_delimiter = ',')]
    answer: Vec<String>,

    /// Words attempted before the game starts
    #[arg(long, value_delimiter = ',')]
    attempts: Vec<String>,

    /// Report the results of a puzzle played elsewhere
    #[arg(long)]
    helper: bool,

    /// Show hints
    #[arg(long)]
    hints: bool,

    /// Maximum number of attempts
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Number of puzzles played at once
    #[arg(short, long, default_value_t = DEFAULT_NUM_PUZZLES)]
    num_wordles: usize,

    /// Let the hint engine play
    #[arg(long)]
    solve: bool,

    /// Auto-solve pace in letters per second, 1 to 10
    #[arg(long, default_value_t = DEFAULT_SOLVE_SPEED)]
    solve_speed: u32,

    /// Length of the words
    #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Seed for random answers
    #[arg(long)]
    seed: Option<u64>,
}

impl From<PlayArgs> for GameConfig {
    fn from(args: PlayArgs) -> Self {
        Self {
            answers: args.answer,
            attempts: args.attempts,
            helper: args.helper,
            hints: args.hints,
            max_attempts: args.max_attempts,
            num_puzzles: args.num_wordles,
            solve: args.solve,
            solve_speed: args.solve_speed,
            word_length: args.word_length,
            seed: args.seed,
        }
    }
}

#[derive(Args)]
struct SolveArgs {
    /// Answers to solve, one per puzzle; random when omitted
    #[arg(short, long, value_delimiter = ',')]
    answer: Vec<String>,

    /// Words attempted before the engine takes over
    #[arg(long, value_delimiter = ',')]
    attempts: Vec<String>,

    /// Maximum number of attempts
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Number of puzzles solved at once
    #[arg(short, long, default_value_t = DEFAULT_NUM_PUZZLES)]
    num_wordles: usize,

    /// Length of the words
    #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Seed for random answers
    #[arg(long)]
    seed: Option<u64>,
}

impl From<SolveArgs> for GameConfig {
    fn from(args: SolveArgs) -> Self {
        Self {
            answers: args.answer,
            attempts: args.attempts,
            max_attempts: args.max_attempts,
            num_puzzles: args.num_wordles,
            solve: true,
            word_length: args.word_length,
            seed: args.seed,
            ..Self::default()
        }
    }
}

#[derive(Args)]
struct AssistArgs {
    /// Maximum number of attempts
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Length of the words
    #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,
}

#[derive(Args)]
struct BenchmarkArgs {
    /// Number of answers to solve
    #[arg(short = 'n', long, default_value = "100")]
    count: usize,

    /// Maximum number of attempts per answer
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Length of the words
    #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Pick random answers instead of the first ones of the pool
    #[arg(short, long)]
    random: bool,

    /// Seed for the random picks
    #[arg(long)]
    seed: Option<u64>,
}

fn load_dictionary(path: Option<&PathBuf>) -> Result<Arc<[String]>> {
    match path {
        None => Ok(wordlists::english()),
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("cannot read dictionary {}", path.display()))?;
            info!("loaded {} words from {}", words.len(), path.display());
            Ok(words.into())
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(cli.dictionary.as_ref())?;

    match cli.command {
        // Default to Play mode if no command given
        None => run_play_command(GameConfig::default(), &dictionary),
        Some(Commands::Play(args)) => run_play_command(args.into(), &dictionary),
        Some(Commands::Solve(args)) => run_solve_command(args.into(), &dictionary),
        Some(Commands::Assist(args)) => run_assist_command(&args, &dictionary),
        Some(Commands::Benchmark(args)) => run_benchmark_command(&args, &dictionary),
    }
}

fn run_play_command(config: GameConfig, dictionary: &Arc<[String]>) -> Result<()> {
    let app = App::new(config.validate()?, dictionary)?;
    run_tui(app)
}

fn run_solve_command(config: GameConfig, dictionary: &Arc<[String]>) -> Result<()> {
    let config = config.validate()?;
    let mut puzzles = (0..config.num_puzzles)
        .map(|index| Puzzle::new(config.puzzle_options(index, dictionary)))
        .collect::<Result<Vec<_>, _>>()?;

    let result = solve_puzzles(&mut puzzles, &config.attempts)?;
    print_solve_result(&result);
    Ok(())
}

fn run_assist_command(args: &AssistArgs, dictionary: &Arc<[String]>) -> Result<()> {
    let config = GameConfig {
        helper: true,
        max_attempts: args.max_attempts,
        word_length: args.word_length,
        ..GameConfig::default()
    }
    .validate()?;

    let summary = run_assist(config.puzzle_options(0, dictionary))?;
    info!("assist session: {} solved out of {}", summary.solved, summary.games);
    Ok(())
}

fn run_benchmark_command(args: &BenchmarkArgs, dictionary: &Arc<[String]>) -> Result<()> {
    let config = GameConfig {
        max_attempts: args.max_attempts,
        word_length: args.word_length,
        ..GameConfig::default()
    }
    .validate()?;

    let pool = Filters::new(vec![with_length(config.word_length)]).apply(&dictionary[..]);
    let answers: Vec<String> = if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        pool.choose_multiple(&mut rng, args.count).cloned().collect()
    } else {
        pool.iter().take(args.count).cloned().collect()
    };

    println!(
        "Running benchmark on {} {}-letter words ({} in the pool)...",
        answers.len(),
        config.word_length,
        pool.len()
    );

    let template = config.puzzle_options(0, dictionary);
    let result = run_benchmark(&template, &answers, &progress_bar());
    print_benchmark_result(&result);
    Ok(())
}
