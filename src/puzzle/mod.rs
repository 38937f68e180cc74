//! A single puzzle: secret, attempts, knowledge and hints

mod options;
mod state;

pub use options::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, PuzzleOptions, SecretMode};
pub use state::{Puzzle, PuzzleStatus, Secret};
