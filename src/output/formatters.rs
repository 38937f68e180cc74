//! Formatting utilities for terminal output

use crate::core::{CharacterStatus, feedback_to_emoji};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, status: CharacterStatus) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        CharacterStatus::CorrectLocation => tile.black().on_green().bold(),
        CharacterStatus::WrongLocation => tile.black().on_yellow().bold(),
        CharacterStatus::NotPresent => tile.white().on_bright_black(),
        CharacterStatus::Unknown => tile.normal(),
    }
}

/// A guess as colored tiles followed by its emoji result
#[must_use]
pub fn attempt_line(guess: &str, result: &[CharacterStatus]) -> String {
    let tiles: String = guess
        .chars()
        .zip(result.iter().copied())
        .map(|(letter, status)| letter_tile(letter, status).to_string())
        .collect();
    format!("{tiles}  {}", feedback_to_emoji(result))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `count` followed by the singular or plural noun
#[must_use]
pub fn count_of(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{count} {noun}")
}
