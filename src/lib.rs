//! Wordle Hints
//!
//! A Wordle puzzle engine: scores guesses, tracks what is known about every
//! letter and suggests the next guesses. Puzzles can be played against a known
//! secret or against one hidden from the engine, where the caller reports each
//! result.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::parse_feedback;
//! use wordle_hints::core::filter::with_length;
//! use wordle_hints::puzzle::{Puzzle, PuzzleOptions};
//!
//! let dictionary: Vec<String> = ["train", "tribe", "baron"].map(String::from).to_vec();
//! let mut puzzle = Puzzle::new(
//!     PuzzleOptions::new()
//!         .with_dictionary(dictionary)
//!         .with_word_filters(vec![with_length(5)])
//!         .with_answer("tribe"),
//! )
//! .unwrap();
//!
//! let attempt = puzzle.attempt("train", None).unwrap();
//! assert_eq!(attempt.result(), parse_feedback("GG-Y-").unwrap().as_slice());
//! assert_eq!(puzzle.hints(), vec!["tribe"]);
//! ```

// Core domain types
pub mod core;

// Error enums shared by the engine and the front ends
pub mod error;

// Hint generation
pub mod hints;

// Puzzle state machine
pub mod puzzle;

// Word lists
pub mod wordlists;

// Front-end configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
