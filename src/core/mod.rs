//! Core domain types for the puzzle engine
//!
//! Pure value types: letter statuses, scored attempts, the per-letter
//! knowledge tracker and the word filter pipeline.

mod alphabet;
mod attempt;
pub mod filter;
mod status;

pub use alphabet::{ALPHABET, AlphabetKnowledge, letter_index};
pub use attempt::{Attempt, score};
pub use filter::{Filter, Filters};
pub use status::{CharacterStatus, feedback_to_emoji, parse_feedback};
