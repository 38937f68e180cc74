//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod solve;

pub use assist::{AssistSummary, assist_session, run_assist};
pub use benchmark::{BenchmarkResult, progress_bar, run_benchmark};
pub use solve::{SolveResult, SolveStep, solve_puzzles, solve_word};
