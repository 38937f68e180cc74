//! Hint generation
//!
//! [`generate_hints`] ranks next-guess suggestions for one puzzle;
//! [`combine_hints`] merges the suggestions of several puzzles played with
//! the same guesses.

mod combine;
mod engine;
pub mod letters;

pub use combine::combine_hints;
pub use engine::{MAX_HINTS, generate_hints};
