//! Word lists
//!
//! The English dictionary is embedded in the binary; custom dictionaries can
//! be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{ENGLISH, ENGLISH_COUNT};

use std::sync::{Arc, OnceLock};

/// The embedded dictionary as owned, shareable words
///
/// Built once per process; cloning the returned `Arc` is cheap.
#[must_use]
pub fn english() -> Arc<[String]> {
    static ENGLISH_WORDS: OnceLock<Arc<[String]>> = OnceLock::new();
    ENGLISH_WORDS
        .get_or_init(|| loader::words_from_slice(ENGLISH).into())
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_count_matches_const() {
        assert_eq!(ENGLISH.len(), ENGLISH_COUNT);
    }

    #[test]
    fn english_words_are_lowercase_letters() {
        for &word in ENGLISH {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn english_is_sorted_and_unique() {
        assert!(ENGLISH.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn english_has_many_five_letter_words() {
        assert!(ENGLISH.iter().filter(|w| w.len() == 5).count() > 1000);
        assert!(ENGLISH.contains(&"train"));
    }

    #[test]
    fn shared_dictionary_is_reused() {
        let a = english();
        let b = english();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), ENGLISH_COUNT);
    }
}
