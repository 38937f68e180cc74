//! Game configuration for the command-line front end
//!
//! Raw flag values are collected into a `GameConfig`, checked once with
//! [`GameConfig::validate`] and then turned into per-puzzle options.

use crate::core::filter::with_length;
use crate::error::ConfigError;
use crate::puzzle::{DEFAULT_WORD_LENGTH, PuzzleOptions};
use std::ops::RangeInclusive;
use std::sync::Arc;

pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
pub const DEFAULT_NUM_PUZZLES: usize = 1;
pub const DEFAULT_SOLVE_SPEED: u32 = 4;
pub const SOLVE_SPEED_RANGE: RangeInclusive<u32> = 1..=10;
pub const WORD_LENGTH_RANGE: RangeInclusive<usize> = 3..=10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Pinned answers, one per puzzle; puzzles beyond these get random ones
    pub answers: Vec<String>,
    /// Words attempted automatically before the player takes over
    pub attempts: Vec<String>,
    /// Help with a puzzle played elsewhere: the player reports every result
    pub helper: bool,
    pub hints: bool,
    pub max_attempts: usize,
    pub num_puzzles: usize,
    /// Let the hint engine play by itself
    pub solve: bool,
    /// Auto-solve pace, letters per second
    pub solve_speed: u32,
    pub word_length: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            answers: Vec::new(),
            attempts: Vec::new(),
            helper: false,
            hints: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            num_puzzles: DEFAULT_NUM_PUZZLES,
            solve: false,
            solve_speed: DEFAULT_SOLVE_SPEED,
            word_length: DEFAULT_WORD_LENGTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Normalize and check the configuration
    ///
    /// Helper and solve modes both imply hints, and pinned answers decide the
    /// word length. An out-of-range solve speed falls back to the default.
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - helper and solve mode are both requested
    /// - pinned answers differ in length
    /// - the word length is outside 3..=10
    /// - a pre-set attempt does not have the word length
    /// - max attempts is zero
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.helper && self.solve {
            return Err(ConfigError::ConflictingModes);
        }
        if self.helper || self.solve {
            self.hints = true;
        }
        if !SOLVE_SPEED_RANGE.contains(&self.solve_speed) {
            self.solve_speed = DEFAULT_SOLVE_SPEED;
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        self.num_puzzles = self.num_puzzles.max(1);

        self.answers = normalize(self.answers);
        self.attempts = normalize(self.attempts);

        if let Some(first) = self.answers.first() {
            let first = first.len();
            if let Some(other) = self.answers.iter().map(String::len).find(|&l| l != first) {
                return Err(ConfigError::MismatchedAnswerLengths { first, other });
            }
            self.word_length = first;
        }
        if !WORD_LENGTH_RANGE.contains(&self.word_length) {
            return Err(ConfigError::InvalidWordLength {
                length: self.word_length,
                min: *WORD_LENGTH_RANGE.start(),
                max: *WORD_LENGTH_RANGE.end(),
            });
        }
        if let Some(word) = self.attempts.iter().find(|w| w.len() != self.word_length) {
            return Err(ConfigError::AttemptLengthMismatch {
                word: word.clone(),
                expected: self.word_length,
            });
        }
        Ok(self)
    }

    /// Options for the puzzle at `index`
    #[must_use]
    pub fn puzzle_options(&self, index: usize, dictionary: &Arc<[String]>) -> PuzzleOptions {
        let mut options = PuzzleOptions::new()
            .with_dictionary(Arc::clone(dictionary))
            .with_max_attempts(self.max_attempts)
            .with_word_filters(vec![with_length(self.word_length)]);
        if self.helper {
            options = options.with_unknown_answer(self.word_length);
        } else if let Some(answer) = self.answers.get(index) {
            options = options.with_answer(answer.as_str());
        }
        if let Some(seed) = self.seed {
            options = options.with_seed(seed.wrapping_add(index as u64));
        }
        options
    }
}

fn normalize(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
