//! Accumulated knowledge about the alphabet
//!
//! Tracks the best-known status of each of the 26 lowercase letters across
//! all attempts of one puzzle.

use super::{Attempt, CharacterStatus};

/// The lowercase English alphabet
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Index of a lowercase ASCII letter, `None` for anything else
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Best-known status per letter
///
/// Knowledge only ever grows: a letter seen in the correct location stays
/// there, and a letter seen anywhere in the secret is never marked absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetKnowledge {
    statuses: [CharacterStatus; 26],
}

impl Default for AlphabetKnowledge {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphabetKnowledge {
    /// All letters `Unknown`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statuses: [CharacterStatus::Unknown; 26],
        }
    }

    /// Status of `letter`; non-letters are always `Unknown`
    #[must_use]
    pub fn get(&self, letter: char) -> CharacterStatus {
        u8::try_from(letter)
            .ok()
            .and_then(letter_index)
            .map_or(CharacterStatus::Unknown, |idx| self.statuses[idx])
    }

    /// Status by byte, for callers working on ASCII words
    #[inline]
    #[must_use]
    pub fn get_byte(&self, letter: u8) -> CharacterStatus {
        letter_index(letter).map_or(CharacterStatus::Unknown, |idx| self.statuses[idx])
    }

    /// Every letter with its status, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, CharacterStatus)> + '_ {
        ALPHABET
            .iter()
            .zip(self.statuses.iter())
            .map(|(&letter, &status)| (char::from(letter), status))
    }

    /// Fold one attempt into the knowledge
    ///
    /// Positive statuses are applied first so that a duplicate letter shown
    /// absent at one position cannot erase it being present at another:
    /// 1. `CorrectLocation` always wins; `WrongLocation` upgrades anything
    ///    short of being present.
    /// 2. `NotPresent` only marks letters that are still `Unknown`.
    pub fn record(&mut self, attempt: &Attempt) {
        for (_, letter, status) in attempt.letters() {
            let Some(idx) = letter_index(letter) else {
                continue;
            };
            let current = &mut self.statuses[idx];
            match status {
                CharacterStatus::CorrectLocation => *current = CharacterStatus::CorrectLocation,
                CharacterStatus::WrongLocation if !current.is_present() => {
                    *current = CharacterStatus::WrongLocation;
                }
                _ => {}
            }
        }

        for (_, letter, status) in attempt.letters() {
            let Some(idx) = letter_index(letter) else {
                continue;
            };
            if status == CharacterStatus::NotPresent
                && self.statuses[idx] == CharacterStatus::Unknown
            {
                self.statuses[idx] = CharacterStatus::NotPresent;
            }
        }
    }

    /// Letters currently holding `status`
    pub fn letters_with(&self, status: CharacterStatus) -> impl Iterator<Item = char> + '_ {
        self.iter()
            .filter(move |&(_, s)| s == status)
            .map(|(letter, _)| letter)
    }

    /// Reset every letter to `Unknown`
    pub fn clear(&mut self) {
        self.statuses = [CharacterStatus::Unknown; 26];
    }
}
