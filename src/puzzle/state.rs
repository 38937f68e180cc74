//! Puzzle state machine
//!
//! A `Puzzle` owns its candidate pool, attempt log and alphabet knowledge.
//! It is in progress until it is solved or every attempt has been used;
//! after that further attempts are no-ops.

use super::options::{PuzzleOptions, SecretMode};
use crate::core::{AlphabetKnowledge, Attempt, CharacterStatus};
use crate::error::{ConfigError, PuzzleError, ValidationError};
use crate::hints::generate_hints;
use log::{debug, info, warn};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The secret as far as the engine knows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Secret {
    Known(String),
    /// Played elsewhere; only the length is known
    Hidden { length: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleStatus {
    InProgress,
    Solved,
    /// Every attempt used without finding the secret
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    options: PuzzleOptions,
    candidates: Vec<String>,
    secret: Secret,
    attempts: Vec<Attempt>,
    knowledge: AlphabetKnowledge,
    solved: bool,
    rng: StdRng,
}

impl Puzzle {
    /// Build a puzzle and pick its secret
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - no dictionary word passes the filters
    /// - `max_attempts` is zero
    /// - a hidden secret has length zero
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::puzzle::{Puzzle, PuzzleOptions};
    ///
    /// let puzzle = Puzzle::new(PuzzleOptions::new().with_answer("train")).unwrap();
    /// assert_eq!(puzzle.secret(), Some("train"));
    /// assert_eq!(puzzle.max_attempts(), 5);
    /// ```
    pub fn new(options: PuzzleOptions) -> Result<Self, ConfigError> {
        if options.max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        let candidates = options.filters.apply(&options.dictionary);
        if candidates.is_empty() {
            return Err(ConfigError::EmptyCandidatePool);
        }

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let secret = select_secret(&options.secret, &candidates, &mut rng)?;
        info!(
            "new puzzle: {} candidates, {} attempts, {}",
            candidates.len(),
            options.max_attempts,
            describe(&secret)
        );

        Ok(Self {
            attempts: Vec::with_capacity(options.max_attempts),
            options,
            candidates,
            secret,
            knowledge: AlphabetKnowledge::new(),
            solved: false,
            rng,
        })
    }

    /// Try `guess`
    ///
    /// `result` is the feedback reported for a hidden secret; it is ignored
    /// when the engine knows the secret. Once the puzzle is over the last
    /// attempt is returned and nothing changes.
    ///
    /// # Errors
    /// Returns `PuzzleError::Validation` when the guess is rejected; the
    /// puzzle is left untouched.
    pub fn attempt(
        &mut self,
        guess: &str,
        result: Option<&[CharacterStatus]>,
    ) -> Result<&Attempt, PuzzleError> {
        if self.is_over() && !self.attempts.is_empty() {
            let last = self.attempts.len() - 1;
            return Ok(&self.attempts[last]);
        }

        let guess = guess.trim().to_lowercase();
        self.validate_guess(&guess)?;

        let attempt = match &self.secret {
            Secret::Known(secret) => {
                if result.is_some() {
                    warn!("ignoring reported result for \"{guess}\", the answer is known");
                }
                if !self.dictionary_has(&guess) {
                    return Err(ValidationError::NotInDictionary(guess).into());
                }
                Attempt::scored(&guess, secret)
            }
            Secret::Hidden { length } => {
                let result = validate_result(result, *length)?;
                Attempt::with_result(&guess, result.to_vec())
            }
        };

        self.knowledge.record(&attempt);
        self.solved = match &self.secret {
            Secret::Known(secret) => attempt.guess() == secret,
            Secret::Hidden { .. } => attempt.is_correct(),
        };
        debug!(
            "attempt {}/{}: {attempt}",
            self.attempts.len() + 1,
            self.max_attempts()
        );

        let idx = self.attempts.len();
        self.attempts.push(attempt);
        Ok(&self.attempts[idx])
    }

    fn validate_guess(&self, guess: &str) -> Result<(), ValidationError> {
        if !guess.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ValidationError::InvalidCharacters(guess.to_string()));
        }
        let expected = self.word_length();
        if guess.len() != expected {
            return Err(ValidationError::LengthMismatch {
                guess: guess.to_string(),
                expected,
                actual: guess.len(),
            });
        }
        if self.attempts.iter().any(|a| a.guess() == guess) {
            return Err(ValidationError::AlreadyAttempted(guess.to_string()));
        }
        Ok(())
    }

    /// Ranked suggestions for the next guess, empty once solved
    #[must_use]
    pub fn hints(&self) -> Vec<String> {
        if self.solved {
            return Vec::new();
        }
        generate_hints(&self.candidates, &self.attempts, &self.knowledge)
    }

    /// Start over with no attempts; a random secret is drawn again
    ///
    /// # Errors
    /// Returns `ConfigError` if a new secret cannot be selected.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.secret = select_secret(&self.options.secret, &self.candidates, &mut self.rng)?;
        self.attempts.clear();
        self.knowledge.clear();
        self.solved = false;
        info!("puzzle reset, {}", describe(&self.secret));
        Ok(())
    }

    /// The secret, `None` when it is hidden
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        match &self.secret {
            Secret::Known(secret) => Some(secret),
            Secret::Hidden { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_secret_hidden(&self) -> bool {
        matches!(self.secret, Secret::Hidden { .. })
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.options.max_attempts
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Solved, or every attempt used
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.solved || self.attempts.len() >= self.max_attempts()
    }

    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        if self.solved {
            PuzzleStatus::Solved
        } else if self.is_over() {
            PuzzleStatus::Exhausted
        } else {
            PuzzleStatus::InProgress
        }
    }

    #[must_use]
    pub const fn knowledge(&self) -> &AlphabetKnowledge {
        &self.knowledge
    }

    /// The filtered pool secrets and hints are drawn from
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn dictionary(&self) -> &[String] {
        self.options.dictionary()
    }

    #[must_use]
    pub fn dictionary_has(&self, word: &str) -> bool {
        self.dictionary().iter().any(|w| w == word)
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        match &self.secret {
            Secret::Known(secret) => secret.len(),
            Secret::Hidden { length } => *length,
        }
    }

    pub fn increment_max_attempts(&mut self) {
        self.options.max_attempts = self.options.max_attempts.saturating_add(1);
    }

    /// Whether one attempt slot can be removed while keeping a free one
    #[must_use]
    pub fn can_decrement_max_attempts(&self) -> bool {
        let max = self.options.max_attempts;
        max > 1 && self.attempts.len() < max - 1
    }

    /// Remove one attempt slot; returns false when the limit cannot shrink
    pub fn decrement_max_attempts(&mut self) -> bool {
        if self.can_decrement_max_attempts() {
            self.options.max_attempts -= 1;
            true
        } else {
            false
        }
    }
}

fn select_secret<R: Rng + ?Sized>(
    mode: &SecretMode,
    candidates: &[String],
    rng: &mut R,
) -> Result<Secret, ConfigError> {
    match mode {
        SecretMode::Fixed(answer) => Ok(Secret::Known(answer.clone())),
        SecretMode::Hidden { length: 0 } => Err(ConfigError::InvalidSecretLength),
        SecretMode::Hidden { length } => Ok(Secret::Hidden { length: *length }),
        SecretMode::Random => candidates
            .choose(rng)
            .cloned()
            .map(Secret::Known)
            .ok_or(ConfigError::EmptyCandidatePool),
    }
}

fn validate_result(
    result: Option<&[CharacterStatus]>,
    length: usize,
) -> Result<&[CharacterStatus], ValidationError> {
    let result = result.ok_or(ValidationError::MissingResult)?;
    if result.len() != length {
        return Err(ValidationError::ResultLengthMismatch {
            expected: length,
            actual: result.len(),
        });
    }
    if let Some(position) = result.iter().position(|&s| s == CharacterStatus::Unknown) {
        return Err(ValidationError::UnknownStatus { position });
    }
    Ok(result)
}

fn describe(secret: &Secret) -> String {
    match secret {
        Secret::Known(secret) => format!("{}-letter secret", secret.len()),
        Secret::Hidden { length } => format!("hidden {length}-letter secret"),
    }
}
