//! Word filter pipeline
//!
//! Filters narrow a raw dictionary down to the candidate pool a puzzle draws
//! its secret and its hints from.

use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::Arc;

/// A predicate that returns true if the word passes through the filter
#[derive(Clone)]
pub struct Filter {
    name: &'static str,
    predicate: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl Filter {
    /// Build a filter from an arbitrary predicate
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            predicate: Arc::new(predicate),
        }
    }

    /// Whether `word` qualifies
    #[inline]
    #[must_use]
    pub fn allows(&self, word: &str) -> bool {
        (self.predicate)(word)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Filter").field(&self.name).finish()
    }
}

/// Keep only words of exactly `length` letters
#[must_use]
pub fn with_length(length: usize) -> Filter {
    with_length_range(length, length)
}

/// Keep only words whose length lies in `min..=max`
#[must_use]
pub fn with_length_range(min: usize, max: usize) -> Filter {
    Filter::new("length", move |word| (min..=max).contains(&word.len()))
}

/// Reject words that use any character more than once
#[must_use]
pub fn with_no_repeating_characters() -> Filter {
    Filter::new("no-repeating-characters", |word| {
        let mut seen = FxHashSet::default();
        word.chars().all(|c| seen.insert(c))
    })
}

/// An ordered list of filters
#[derive(Debug, Clone, Default)]
pub struct Filters(Vec<Filter>);

impl Filters {
    #[must_use]
    pub const fn new(filters: Vec<Filter>) -> Self {
        Self(filters)
    }

    /// Whether `word` passes every filter
    #[must_use]
    pub fn allows(&self, word: &str) -> bool {
        self.0.iter().all(|filter| filter.allows(word))
    }

    /// Return, in original order, the words allowed by all filters
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::filter::{Filters, with_length};
    ///
    /// let filters = Filters::new(vec![with_length(5)]);
    /// let words = ["brand", "barn", "bar"].map(String::from);
    /// assert_eq!(filters.apply(&words), vec!["brand".to_string()]);
    /// ```
    #[must_use]
    pub fn apply<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| self.allows(word))
            .map(str::to_string)
            .collect()
    }

    pub fn push(&mut self, filter: Filter) {
        self.0.push(filter);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Filter>> for Filters {
    fn from(filters: Vec<Filter>) -> Self {
        Self(filters)
    }
}

impl FromIterator<Filter> for Filters {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
