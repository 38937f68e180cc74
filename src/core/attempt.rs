//! Scored guesses
//!
//! An `Attempt` records one guess and its per-letter result. [`score`]
//! implements Wordle's feedback rules, including duplicate letters: a letter
//! that appears k times in the secret is credited at most k times.

use super::CharacterStatus;
use std::fmt;

/// A guess together with its per-letter result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: String,
    result: Vec<CharacterStatus>,
}

impl Attempt {
    /// Score `guess` against `secret`
    ///
    /// Both must have the same length; the puzzle validates this beforehand.
    #[must_use]
    pub fn scored(guess: &str, secret: &str) -> Self {
        Self {
            guess: guess.to_string(),
            result: score(guess, secret),
        }
    }

    /// Build an attempt from a result computed elsewhere
    ///
    /// Used when the secret is not known to this engine and a human reports
    /// the feedback they got.
    #[must_use]
    pub fn with_result(guess: &str, result: Vec<CharacterStatus>) -> Self {
        Self {
            guess: guess.to_string(),
            result,
        }
    }

    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> &[CharacterStatus] {
        &self.result
    }

    /// Each letter of the guess paired with its status
    pub fn letters(&self) -> impl Iterator<Item = (usize, u8, CharacterStatus)> + '_ {
        self.guess
            .bytes()
            .zip(self.result.iter().copied())
            .enumerate()
            .map(|(idx, (letter, status))| (idx, letter, status))
    }

    /// True when every letter is in the correct location
    #[must_use]
    pub fn is_correct(&self) -> bool {
        !self.result.is_empty()
            && self
                .result
                .iter()
                .all(|&s| s == CharacterStatus::CorrectLocation)
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.guess,
            super::status::feedback_to_emoji(&self.result)
        )
    }
}

/// Calculate the result when `guess` is tried against `secret`
///
/// # Algorithm
/// 1. Every position starts as `NotPresent`
/// 2. First pass: exact matches become `CorrectLocation`
/// 3. Second pass, left to right: a remaining position becomes `WrongLocation`
///    while the secret still holds more copies of that letter than the guess
///    has already been credited with (greens anywhere plus earlier yellows)
///
/// # Examples
/// ```
/// use wordle_hints::core::{CharacterStatus::*, score};
///
/// assert_eq!(
///     score("japan", "aroma"),
///     vec![NotPresent, WrongLocation, NotPresent, WrongLocation, NotPresent]
/// );
/// ```
#[must_use]
pub fn score(guess: &str, secret: &str) -> Vec<CharacterStatus> {
    let guess = guess.as_bytes();
    let secret = secret.as_bytes();
    let mut result = vec![CharacterStatus::NotPresent; guess.len()];

    // First pass: greens
    for (idx, &letter) in guess.iter().enumerate() {
        if secret.get(idx) == Some(&letter) {
            result[idx] = CharacterStatus::CorrectLocation;
        }
    }

    // Second pass: yellows, allocated greedily from the left
    // Allow: index needed to read guess[idx] and check/set result[idx]
    #[allow(clippy::needless_range_loop)]
    for idx in 0..guess.len() {
        if result[idx] == CharacterStatus::CorrectLocation {
            continue;
        }
        let letter = guess[idx];
        let needed = secret.iter().filter(|&&c| c == letter).count();
        let credited = guess
            .iter()
            .zip(&result)
            .filter(|&(&c, status)| c == letter && status.is_present())
            .count();
        if credited < needed {
            result[idx] = CharacterStatus::WrongLocation;
        }
    }

    result
}
