//! Error types for puzzle construction, guess validation and automated play

use thiserror::Error;

/// Fatal problems with how a puzzle or game was configured
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no dictionary word passes the configured filters")]
    EmptyCandidatePool,
    #[error("max attempts must be at least 1")]
    ZeroMaxAttempts,
    #[error("a hidden answer must have a length of at least 1")]
    InvalidSecretLength,
    #[error("word length must be between {min} and {max}, got {length}")]
    InvalidWordLength { length: usize, min: usize, max: usize },
    #[error("all answers must have the same length, found {first} and {other}")]
    MismatchedAnswerLengths { first: usize, other: usize },
    #[error("pre-set attempt \"{word}\" does not have {expected} letters")]
    AttemptLengthMismatch { word: String, expected: usize },
    #[error("--helper and --solve cannot be used together")]
    ConflictingModes,
}

/// A rejected guess; the puzzle is left untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"{guess}\" has {actual} letters, expected {expected}")]
    LengthMismatch {
        guess: String,
        expected: usize,
        actual: usize,
    },
    #[error("\"{0}\" was already attempted")]
    AlreadyAttempted(String),
    #[error("\"{0}\" is not in the dictionary")]
    NotInDictionary(String),
    #[error("\"{0}\" contains characters other than letters")]
    InvalidCharacters(String),
    #[error("the answer is hidden, a result must be supplied with the guess")]
    MissingResult,
    #[error("result has {actual} statuses, expected {expected}")]
    ResultLengthMismatch { expected: usize, actual: usize },
    #[error("result at position {position} is unknown")]
    UnknownStatus { position: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failures of an automated solving session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("no hint left to try after {attempts} attempts")]
    Exhausted { attempts: usize },
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

impl From<ValidationError> for SolveError {
    fn from(err: ValidationError) -> Self {
        Self::Puzzle(err.into())
    }
}

impl From<ConfigError> for SolveError {
    fn from(err: ConfigError) -> Self {
        Self::Puzzle(err.into())
    }
}
