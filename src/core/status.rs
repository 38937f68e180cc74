//! Per-letter feedback status
//!
//! A `CharacterStatus` classifies one letter of a guess at one position.
//! Feedback strings typed by a human (e.g. "GY-GY" or "🟩🟨⬜🟩🟨") parse into
//! a sequence of statuses.

use std::fmt;

/// Status of a character based on the location it was attempted at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterStatus {
    /// Nothing is known yet
    #[default]
    Unknown,
    /// Gray: not in the word (at this position, for duplicates)
    NotPresent,
    /// Yellow: in the word, elsewhere
    WrongLocation,
    /// Green: in the word, right here
    CorrectLocation,
}

impl CharacterStatus {
    /// Numeric code used by the helper-mode keyboard input
    ///
    /// `0` = not present, `1` = unknown, `2` = wrong location, `3` = correct location.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::NotPresent => 0,
            Self::Unknown => 1,
            Self::WrongLocation => 2,
            Self::CorrectLocation => 3,
        }
    }

    /// Inverse of [`CharacterStatus::code`] for the digits a user can type
    ///
    /// `1` (unknown) is never accepted.
    #[must_use]
    pub const fn from_code(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Self::NotPresent),
            '2' => Some(Self::WrongLocation),
            '3' => Some(Self::CorrectLocation),
            _ => None,
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/'3'/🟩 for correct location
    /// - 'Y'/'y'/'2'/🟨 for wrong location
    /// - '-'/'_'/'0'/⬛/⬜ for not present
    #[must_use]
    pub const fn from_feedback_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '3' | '🟩' => Some(Self::CorrectLocation),
            'Y' | 'y' | '2' | '🟨' => Some(Self::WrongLocation),
            '-' | '_' | '0' | '⬛' | '⬜' => Some(Self::NotPresent),
            _ => None,
        }
    }

    /// Emoji tile for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::CorrectLocation => '🟩',
            Self::WrongLocation => '🟨',
            Self::NotPresent => '⬛',
            Self::Unknown => '⬜',
        }
    }

    /// True for `WrongLocation` and `CorrectLocation`
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::WrongLocation | Self::CorrectLocation)
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::NotPresent => "not present",
            Self::WrongLocation => "wrong location",
            Self::CorrectLocation => "correct location",
        };
        f.write_str(name)
    }
}

/// Parse a whole feedback string such as "GY-GY", "32020" or "🟩🟨⬜🟩🟨"
///
/// Whitespace is ignored. Returns `None` if any character is not a feedback
/// character.
///
/// # Examples
/// ```
/// use wordle_hints::core::{CharacterStatus, parse_feedback};
///
/// let statuses = parse_feedback("G-Y").unwrap();
/// assert_eq!(
///     statuses,
///     vec![
///         CharacterStatus::CorrectLocation,
///         CharacterStatus::NotPresent,
///         CharacterStatus::WrongLocation,
///     ]
/// );
/// ```
#[must_use]
pub fn parse_feedback(s: &str) -> Option<Vec<CharacterStatus>> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(CharacterStatus::from_feedback_char)
        .collect()
}

/// Render a status sequence as emoji tiles
#[must_use]
pub fn feedback_to_emoji(statuses: &[CharacterStatus]) -> String {
    statuses.iter().map(|s| s.to_emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharacterStatus::{CorrectLocation, NotPresent, Unknown, WrongLocation};

    #[test]
    fn codes_round_trip_for_typed_digits() {
        for status in [NotPresent, WrongLocation, CorrectLocation] {
            let digit = char::from(b'0' + status.code());
            assert_eq!(CharacterStatus::from_code(digit), Some(status));
        }
        assert_eq!(CharacterStatus::from_code('1'), None);
        assert_eq!(Unknown.code(), 1);
    }

    #[test]
    fn parse_feedback_accepts_all_notations() {
        let expected = vec![CorrectLocation, WrongLocation, NotPresent];
        assert_eq!(parse_feedback("GY-"), Some(expected.clone()));
        assert_eq!(parse_feedback("gy_"), Some(expected.clone()));
        assert_eq!(parse_feedback("320"), Some(expected.clone()));
        assert_eq!(parse_feedback("🟩🟨⬜"), Some(expected.clone()));
        assert_eq!(parse_feedback("🟩🟨⬛"), Some(expected.clone()));
        assert_eq!(parse_feedback("G Y -"), Some(expected));
    }

    #[test]
    fn parse_feedback_rejects_garbage() {
        assert_eq!(parse_feedback("GXY"), None);
        assert_eq!(parse_feedback("1"), None);
        assert_eq!(parse_feedback(""), Some(vec![]));
    }

    #[test]
    fn present_statuses() {
        assert!(CorrectLocation.is_present());
        assert!(WrongLocation.is_present());
        assert!(!NotPresent.is_present());
        assert!(!Unknown.is_present());
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(
            feedback_to_emoji(&[CorrectLocation, WrongLocation, NotPresent]),
            "🟩🟨⬛"
        );
    }
}
