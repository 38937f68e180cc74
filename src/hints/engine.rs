//! Hint ranking engine
//!
//! Hints are computed in phases:
//! 1. **Exploration**: when most positions are solved but most of the
//!    alphabet is still untested, suggest words made only of untested letters.
//! 2. **Constraint**: otherwise keep the pool words consistent with every
//!    attempt so far.
//! 3. **Narrowing**: when several candidates remain, re-rank so the next
//!    guess separates them best.
//!
//! The result never contains an attempted word and holds at most
//! [`MAX_HINTS`] words.

use super::letters::{
    LetterCategories, LetterFrequency, LetterSet, differing_letters, max_word_length, rank_by,
};
use crate::core::{AlphabetKnowledge, Attempt, CharacterStatus};
use log::debug;

/// Maximum number of hints returned
pub const MAX_HINTS: usize = 5;

/// Untested letters needed before exploration is considered
const EXPLORATION_MIN_UNKNOWN: usize = 20;

/// Compute the ranked hints for one puzzle
///
/// `pool` is never modified; ranking happens on a copy. The result is
/// deterministic for a given pool, attempt log and knowledge.
///
/// # Examples
/// ```
/// use wordle_hints::core::{AlphabetKnowledge, Attempt};
/// use wordle_hints::hints::generate_hints;
///
/// let pool: Vec<String> = ["train", "brain", "drain", "grain"]
///     .map(String::from)
///     .to_vec();
/// let attempt = Attempt::scored("brain", "train");
/// let mut knowledge = AlphabetKnowledge::new();
/// knowledge.record(&attempt);
///
/// let hints = generate_hints(&pool, &[attempt], &knowledge);
/// assert!(!hints.contains(&"brain".to_string()));
/// ```
#[must_use]
pub fn generate_hints<S: AsRef<str>>(
    pool: &[S],
    attempts: &[Attempt],
    knowledge: &AlphabetKnowledge,
) -> Vec<String> {
    let pool: Vec<&str> = pool.iter().map(AsRef::as_ref).collect();
    let letters = LetterCategories::from_knowledge(knowledge);
    let threshold = max_word_length(&pool) * 75 / 100;
    let correct = letters.correct_location.len();

    let mut words = Vec::new();
    if letters.unknown.len() > EXPLORATION_MIN_UNKNOWN && correct >= threshold {
        words = words_of_unknown_letters(&pool, letters.unknown);
        debug!("exploration found {} words", words.len());
    }

    if words.is_empty() {
        words = consistent_words(&pool, attempts, &letters);
        debug!("{} words consistent with {} attempts", words.len(), attempts.len());
    }

    if words.len() > 1 {
        if correct >= threshold && words.len() >= MAX_HINTS - 1 {
            // e.g. "cra_e" with crake|crane|crape|crave|craze: try k,n,p,v,z at once
            let missing = LetterSet::of_words(&words).difference(letters.correct_location);
            words = rank_pool_by_letters(&pool, missing);
        } else if correct < threshold && words.len() <= MAX_HINTS {
            // e.g. "_iddy" with biddy|giddy|kiddy|widdy: try b,g,k,w at once
            words = rank_pool_by_letters(&pool, differing_letters(&words));
        } else {
            let frequency = LetterFrequency::from_words(&words);
            rank_by(&mut words, |word| frequency.score(word));
        }
    }

    words.retain(|word| !attempts.iter().any(|attempt| attempt.guess() == *word));
    words.truncate(MAX_HINTS);
    words.into_iter().map(str::to_string).collect()
}

/// Words made only of `unknown` letters, most distinct letters first
fn words_of_unknown_letters<'a>(pool: &[&'a str], unknown: LetterSet) -> Vec<&'a str> {
    let mut words: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|word| word.bytes().all(|letter| unknown.contains(letter)))
        .collect();
    rank_by(&mut words, |word| LetterSet::of_word(word).len());
    words
}

/// Full pool ranked by how many of `letters` each word contains
fn rank_pool_by_letters<'a>(pool: &[&'a str], letters: LetterSet) -> Vec<&'a str> {
    let mut words = pool.to_vec();
    rank_by(&mut words, |word| {
        LetterSet::of_word(word).intersection(letters).len()
    });
    words
}

/// Positional facts gathered from the attempt log
#[derive(Debug, Default)]
struct PositionConstraints {
    correct: Vec<(usize, u8)>,
    misplaced: Vec<(usize, u8)>,
}

impl PositionConstraints {
    fn from_attempts(attempts: &[Attempt]) -> Self {
        let mut constraints = Self::default();
        for attempt in attempts {
            for (idx, letter, status) in attempt.letters() {
                let list = match status {
                    CharacterStatus::CorrectLocation => &mut constraints.correct,
                    CharacterStatus::WrongLocation => &mut constraints.misplaced,
                    _ => continue,
                };
                if !list.contains(&(idx, letter)) {
                    list.push((idx, letter));
                }
            }
        }
        constraints
    }

    fn allows(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        self.correct
            .iter()
            .all(|&(idx, letter)| bytes.get(idx) == Some(&letter))
            && self
                .misplaced
                .iter()
                .all(|&(idx, letter)| bytes.get(idx) != Some(&letter))
    }
}

/// Pool words that agree with everything learnt so far
fn consistent_words<'a>(
    pool: &[&'a str],
    attempts: &[Attempt],
    letters: &LetterCategories,
) -> Vec<&'a str> {
    let positions = PositionConstraints::from_attempts(attempts);
    let present = letters.present();
    pool.iter()
        .copied()
        .filter(|word| {
            let word_letters = LetterSet::of_word(word);
            word_letters.intersection(letters.not_present).is_empty()
                && positions.allows(word)
                && present.is_subset(word_letters)
        })
        .collect()
}
