//! Letter sets and letter-frequency scoring
//!
//! The hint engine reasons about words mostly through the set of distinct
//! letters they contain, so words are reduced to a 26-bit mask.

use crate::core::{ALPHABET, AlphabetKnowledge, CharacterStatus, letter_index};
use std::cmp::Reverse;

/// A set of lowercase letters stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    /// Distinct lowercase letters of `word`; other characters are skipped
    #[must_use]
    pub fn of_word(word: &str) -> Self {
        word.bytes().collect()
    }

    /// Union of the letters of all `words`
    #[must_use]
    pub fn of_words<S: AsRef<str>>(words: &[S]) -> Self {
        words
            .iter()
            .fold(Self::EMPTY, |set, word| set.union(Self::of_word(word.as_ref())))
    }

    /// Letters the knowledge currently marks with `status`
    #[must_use]
    pub fn with_status(knowledge: &AlphabetKnowledge, status: CharacterStatus) -> Self {
        ALPHABET
            .iter()
            .copied()
            .filter(|&letter| knowledge.get_byte(letter) == status)
            .collect()
    }

    pub fn insert(&mut self, letter: u8) {
        if let Some(idx) = letter_index(letter) {
            self.0 |= 1 << idx;
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        letter_index(letter).is_some_and(|idx| self.0 & (1 << idx) != 0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        ALPHABET.iter().copied().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Letters grouped by their current knowledge status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCategories {
    pub unknown: LetterSet,
    pub not_present: LetterSet,
    pub wrong_location: LetterSet,
    pub correct_location: LetterSet,
}

impl LetterCategories {
    #[must_use]
    pub fn from_knowledge(knowledge: &AlphabetKnowledge) -> Self {
        Self {
            unknown: LetterSet::with_status(knowledge, CharacterStatus::Unknown),
            not_present: LetterSet::with_status(knowledge, CharacterStatus::NotPresent),
            wrong_location: LetterSet::with_status(knowledge, CharacterStatus::WrongLocation),
            correct_location: LetterSet::with_status(knowledge, CharacterStatus::CorrectLocation),
        }
    }

    /// Letters known to be somewhere in the secret
    #[must_use]
    pub const fn present(&self) -> LetterSet {
        self.wrong_location.union(self.correct_location)
    }
}

/// Number of words each letter appears in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequency([usize; 26]);

impl LetterFrequency {
    /// Count, for every letter, the words containing it (once per word)
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut counts = [0; 26];
        for word in words {
            for letter in LetterSet::of_word(word.as_ref()).iter() {
                if let Some(idx) = letter_index(letter) {
                    counts[idx] += 1;
                }
            }
        }
        Self(counts)
    }

    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        letter_index(letter).map_or(0, |idx| self.0[idx])
    }

    /// Sum of the frequencies of the distinct letters of `word`
    #[must_use]
    pub fn score(&self, word: &str) -> usize {
        LetterSet::of_word(word)
            .iter()
            .map(|letter| self.count(letter))
            .sum()
    }
}

/// Letters that occur in fewer than two of `words`
#[must_use]
pub fn differing_letters<S: AsRef<str>>(words: &[S]) -> LetterSet {
    let frequency = LetterFrequency::from_words(words);
    ALPHABET
        .iter()
        .copied()
        .filter(|&letter| frequency.count(letter) == 1)
        .collect()
}

/// Length of the longest word, 0 when empty
#[must_use]
pub fn max_word_length<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| w.as_ref().len()).max().unwrap_or(0)
}

/// Sort words by `score` descending, ties broken alphabetically
pub fn rank_by<F>(words: &mut [&str], mut score: F)
where
    F: FnMut(&str) -> usize,
{
    words.sort_by_cached_key(|&word| (Reverse(score(word)), word));
}
