//! Puzzle configuration
//!
//! `PuzzleOptions` is a plain value built with chained `with_*` calls and
//! handed to [`Puzzle::new`](super::Puzzle::new). A puzzle keeps its options
//! so that [`reset`](super::Puzzle::reset) can rebuild it.

use crate::core::filter::{with_length, with_no_repeating_characters};
use crate::core::Filters;
use crate::wordlists;
use std::sync::Arc;

/// Default number of attempts per puzzle
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Default word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// How the secret word is chosen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SecretMode {
    /// Pick a random word from the candidate pool on every (re)start
    #[default]
    Random,
    /// Always use this word
    Fixed(String),
    /// The secret is unknown to the engine; results come from the caller
    Hidden { length: usize },
}

#[derive(Debug, Clone)]
pub struct PuzzleOptions {
    pub(crate) dictionary: Arc<[String]>,
    pub(crate) max_attempts: usize,
    pub(crate) filters: Filters,
    pub(crate) secret: SecretMode,
    pub(crate) seed: Option<u64>,
}

impl Default for PuzzleOptions {
    /// Embedded English dictionary, 5 attempts, five-letter words without
    /// repeated letters, random secret
    fn default() -> Self {
        Self {
            dictionary: wordlists::english(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            filters: Filters::new(vec![
                with_length(DEFAULT_WORD_LENGTH),
                with_no_repeating_characters(),
            ]),
            secret: SecretMode::Random,
            seed: None,
        }
    }
}

impl PuzzleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dictionary(mut self, dictionary: impl Into<Arc<[String]>>) -> Self {
        self.dictionary = dictionary.into();
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Replace the filter pipeline used to build the candidate pool
    #[must_use]
    pub fn with_word_filters(mut self, filters: impl Into<Filters>) -> Self {
        self.filters = filters.into();
        self
    }

    /// Pin the secret; an empty answer keeps random selection
    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        let answer = answer.into().trim().to_lowercase();
        self.secret = if answer.is_empty() {
            SecretMode::Random
        } else {
            SecretMode::Fixed(answer)
        };
        self
    }

    /// Play against a secret the engine never sees
    #[must_use]
    pub fn with_unknown_answer(mut self, length: usize) -> Self {
        self.secret = SecretMode::Hidden { length };
        self
    }

    /// Seed random secret selection for reproducible puzzles
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn secret_mode(&self) -> &SecretMode {
        &self.secret
    }

    #[must_use]
    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::with_length_range;

    #[test]
    fn defaults() {
        let options = PuzzleOptions::default();
        assert_eq!(options.max_attempts(), 5);
        assert_eq!(options.secret_mode(), &SecretMode::Random);
        assert_eq!(options.filters.len(), 2);
        assert!(options.filters.allows("crane"));
        assert!(!options.filters.allows("geese"));
        assert!(!options.filters.allows("cranes"));
        assert!(!options.dictionary().is_empty());
    }

    #[test]
    fn answer_selection() {
        let options = PuzzleOptions::new().with_answer(" Train ");
        assert_eq!(options.secret_mode(), &SecretMode::Fixed("train".into()));

        let options = options.with_answer("");
        assert_eq!(options.secret_mode(), &SecretMode::Random);

        let options = options.with_unknown_answer(6);
        assert_eq!(options.secret_mode(), &SecretMode::Hidden { length: 6 });
    }

    #[test]
    fn builder_replaces_values() {
        let dictionary: Vec<String> = vec!["foo".into(), "bar".into()];
        let options = PuzzleOptions::new()
            .with_dictionary(dictionary)
            .with_max_attempts(9)
            .with_word_filters(vec![with_length_range(3, 4)])
            .with_seed(7);
        assert_eq!(options.dictionary(), ["foo", "bar"]);
        assert_eq!(options.max_attempts(), 9);
        assert_eq!(options.filters.len(), 1);
        assert_eq!(options.seed, Some(7));
    }
}
