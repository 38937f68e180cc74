//! End-to-end scenarios on the embedded dictionary

use std::sync::Arc;
use wordle_hints::commands::{solve_puzzles, solve_word};
use wordle_hints::config::GameConfig;
use wordle_hints::core::CharacterStatus::{CorrectLocation, NotPresent, WrongLocation};
use wordle_hints::core::filter::with_length;
use wordle_hints::core::{Filters, parse_feedback, score};
use wordle_hints::hints::combine_hints;
use wordle_hints::puzzle::{Puzzle, PuzzleOptions, PuzzleStatus};
use wordle_hints::wordlists;

fn config(answers: &[&str]) -> GameConfig {
    GameConfig {
        answers: answers.iter().map(|w| (*w).to_string()).collect(),
        num_puzzles: answers.len().max(1),
        ..GameConfig::default()
    }
    .validate()
    .unwrap()
}

fn dictionary() -> Arc<[String]> {
    wordlists::english()
}

#[test]
fn two_attempt_game_runs_out() {
    let mut puzzle = Puzzle::new(
        PuzzleOptions::new()
            .with_max_attempts(2)
            .with_answer("train"),
    )
    .unwrap();

    let first = puzzle.attempt("tribe", None).unwrap();
    assert_eq!(
        first.result(),
        [CorrectLocation, CorrectLocation, WrongLocation, NotPresent, NotPresent]
    );
    let knowledge = puzzle.knowledge();
    assert_eq!(knowledge.get('t'), CorrectLocation);
    assert_eq!(knowledge.get('r'), CorrectLocation);
    assert_eq!(knowledge.get('i'), WrongLocation);
    assert_eq!(knowledge.get('b'), NotPresent);
    assert_eq!(knowledge.get('e'), NotPresent);
    assert!(!puzzle.is_solved());
    assert!(!puzzle.is_over());

    let second = puzzle.attempt("baron", None).unwrap().clone();
    assert_eq!(
        second.result(),
        [NotPresent, WrongLocation, WrongLocation, NotPresent, CorrectLocation]
    );
    assert_eq!(puzzle.status(), PuzzleStatus::Exhausted);
    assert!(!puzzle.is_solved());

    let third = puzzle.attempt("train", None).unwrap();
    assert_eq!(*third, second);
    assert_eq!(puzzle.attempts().len(), 2);
}

#[test]
fn duplicate_letters_are_credited_once_each() {
    assert_eq!(
        score("japan", "aroma"),
        [NotPresent, WrongLocation, NotPresent, WrongLocation, NotPresent]
    );
    assert_eq!(score("abate", "aroma"), parse_feedback("G-Y--").unwrap());
}

#[test]
fn length_filter_keeps_matching_words() {
    let filters = Filters::new(vec![with_length(5)]);
    assert_eq!(filters.apply(&["brand", "barn", "bar"]), vec!["brand"]);
}

#[test]
fn fresh_game_hints() {
    let puzzle = Puzzle::new(config(&["train"]).puzzle_options(0, &dictionary())).unwrap();
    assert_eq!(puzzle.hints(), vec!["roate", "irate", "alert", "alter", "later"]);
}

#[test]
fn single_puzzle_combined_hints_are_its_own() {
    let mut puzzle = Puzzle::new(config(&["train"]).puzzle_options(0, &dictionary())).unwrap();
    puzzle.attempt("crane", None).unwrap();
    let hints = puzzle.hints();
    assert_eq!(combine_hints(std::slice::from_ref(&puzzle)), hints);
    assert_eq!(hints, vec!["brain", "drain", "brawn", "drawn", "grain"]);
}

#[test]
fn hidden_answer_follows_reported_results() {
    let config = GameConfig {
        helper: true,
        ..GameConfig::default()
    }
    .validate()
    .unwrap();
    let mut puzzle = Puzzle::new(config.puzzle_options(0, &dictionary())).unwrap();
    assert!(puzzle.is_secret_hidden());

    let result = parse_feedback("-GGY-").unwrap();
    puzzle.attempt("crane", Some(result.as_slice())).unwrap();
    assert_eq!(puzzle.hints(), vec!["brain", "drain", "brawn", "drawn", "grain"]);
    assert!(puzzle.secret().is_none());

    let win = [CorrectLocation; 5];
    puzzle.attempt("train", Some(&win[..])).unwrap();
    assert!(puzzle.is_solved());
    assert!(puzzle.hints().is_empty());
}

#[test]
fn auto_solve_on_the_full_dictionary() {
    let result = solve_word(config(&["tribe"]).puzzle_options(0, &dictionary())).unwrap();
    let guesses: Vec<&str> = result.steps.iter().map(|s| s.guess.as_str()).collect();
    assert_eq!(guesses, vec!["roate", "trice", "tribe"]);
    assert!(result.all_solved());
}

#[test]
fn two_puzzles_share_guesses() {
    let config = config(&["train", "ghost"]);
    let dictionary = dictionary();
    let mut puzzles: Vec<Puzzle> = (0..2)
        .map(|i| Puzzle::new(config.puzzle_options(i, &dictionary)).unwrap())
        .collect();

    let result = solve_puzzles(&mut puzzles, &[]).unwrap();
    assert!(result.all_solved());
    let guesses: Vec<&str> = result.steps.iter().map(|s| s.guess.as_str()).collect();
    assert_eq!(guesses, vec!["alert", "stair", "begun", "ghost", "train"]);
    assert_eq!(result.steps[4].results[1], None);
}
