//! Hints across several puzzles played in parallel

use super::MAX_HINTS;
use super::letters::{LetterFrequency, rank_by};
use crate::puzzle::Puzzle;

/// Merge the hints of all `puzzles` into one ranked list
///
/// A single puzzle keeps its own ranking. With several, words attempted in
/// any puzzle are dropped, duplicates are removed and the rest is ranked by
/// letter frequency across the merged list.
#[must_use]
pub fn combine_hints(puzzles: &[Puzzle]) -> Vec<String> {
    if let [puzzle] = puzzles {
        return puzzle.hints();
    }

    let attempted = |word: &str| {
        puzzles
            .iter()
            .any(|p| p.attempts().iter().any(|a| a.guess() == word))
    };

    let mut merged: Vec<String> = Vec::new();
    for hint in puzzles.iter().flat_map(Puzzle::hints) {
        if !attempted(&hint) && !merged.contains(&hint) {
            merged.push(hint);
        }
    }

    let frequency = LetterFrequency::from_words(&merged);
    let mut ranked: Vec<&str> = merged.iter().map(String::as_str).collect();
    rank_by(&mut ranked, |word| frequency.score(word));
    ranked.truncate(MAX_HINTS);
    ranked.into_iter().map(str::to_string).collect()
}
