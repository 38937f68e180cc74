//! Automated solving
//!
//! Plays one or more puzzles with the top combined hint until every puzzle is
//! over. Pre-set attempts are played first.

use crate::core::CharacterStatus;
use crate::error::SolveError;
use crate::hints::combine_hints;
use crate::puzzle::{Puzzle, PuzzleOptions};
use log::debug;

/// Result of an automated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub steps: Vec<SolveStep>,
    /// Per puzzle, in input order
    pub solved: Vec<bool>,
    /// Per puzzle secrets, revealed once the session is over
    pub secrets: Vec<Option<String>>,
}

impl SolveResult {
    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.solved.iter().all(|&solved| solved)
    }
}

/// One word played across every unfinished puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStep {
    pub guess: String,
    /// Result per puzzle; `None` for puzzles that were already over
    pub results: Vec<Option<Vec<CharacterStatus>>>,
}

/// Auto-solve a single puzzle
///
/// # Errors
/// Returns `SolveError` if the puzzle cannot be built or the hints run out.
pub fn solve_word(options: PuzzleOptions) -> Result<SolveResult, SolveError> {
    let mut puzzles = vec![Puzzle::new(options)?];
    solve_puzzles(&mut puzzles, &[])
}

/// Auto-solve `puzzles` together
///
/// Every step plays the first combined hint in all unfinished puzzles. A
/// puzzle that uses up its attempts simply stops; the session ends when all
/// of them are over.
///
/// # Errors
/// - `SolveError::Exhausted` when no hint is left while a puzzle is running
/// - `SolveError::Puzzle` when a pre-set attempt is rejected or a puzzle has a
///   hidden secret
pub fn solve_puzzles(
    puzzles: &mut [Puzzle],
    presets: &[String],
) -> Result<SolveResult, SolveError> {
    let mut steps = Vec::new();

    for word in presets {
        steps.push(play(puzzles, word)?);
    }

    while !puzzles.iter().all(Puzzle::is_over) {
        let hints = combine_hints(puzzles);
        let Some(word) = hints.first() else {
            return Err(SolveError::Exhausted {
                attempts: steps.len(),
            });
        };
        debug!("auto-solve plays \"{word}\" out of {hints:?}");
        steps.push(play(puzzles, word)?);
    }

    Ok(SolveResult {
        steps,
        solved: puzzles.iter().map(Puzzle::is_solved).collect(),
        secrets: puzzles
            .iter()
            .map(|puzzle| puzzle.secret().map(str::to_string))
            .collect(),
    })
}

fn play(puzzles: &mut [Puzzle], word: &str) -> Result<SolveStep, SolveError> {
    let mut results = Vec::with_capacity(puzzles.len());
    for puzzle in puzzles.iter_mut() {
        if puzzle.is_over() {
            results.push(None);
            continue;
        }
        let attempt = puzzle.attempt(word, None)?;
        results.push(Some(attempt.result().to_vec()));
    }
    Ok(SolveStep {
        guess: word.to_string(),
        results,
    })
}
