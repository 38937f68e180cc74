//! Word list loading utilities

use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Words are lowercased; blank lines and entries with anything other than
/// ASCII letters are skipped. The result is sorted and deduplicated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_hints::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/english.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Normalize embedded words into owned strings
///
/// # Examples
/// ```
/// use wordle_hints::wordlists::loader::words_from_slice;
/// use wordle_hints::wordlists::ENGLISH;
///
/// let words = words_from_slice(ENGLISH);
/// assert_eq!(words.len(), ENGLISH.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words: Vec<String> = lines
        .into_iter()
        .map(str::trim)
        .filter(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(str::to_ascii_lowercase)
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}
