//! Edit alphabet
//!
//! The ordered set of characters tried for insert and replace candidates.
//! Option lists on letters and positions follow this order.

use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for invalid alphabets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one character")]
    Empty,
}

/// Ordered, duplicate-free set of edit characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from characters, keeping first-seen order
    ///
    /// # Errors
    /// Returns `AlphabetError::Empty` if no characters are given.
    ///
    /// # Examples
    /// ```
    /// use wordhop::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("cabba".chars()).unwrap();
    /// assert_eq!(alphabet.chars(), &['c', 'a', 'b']);
    /// assert!(Alphabet::new("".chars()).is_err());
    /// ```
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let mut seen = FxHashSet::default();
        let chars: Vec<char> = chars.into_iter().filter(|c| seen.insert(*c)).collect();

        if chars.is_empty() {
            return Err(AlphabetError::Empty);
        }

        Ok(Self { chars })
    }

    /// The lowercase ASCII letters `a`-`z`
    #[must_use]
    pub fn lowercase_ascii() -> Self {
        Self {
            chars: ('a'..='z').collect(),
        }
    }

    /// Every distinct character used by a word list, sorted by code point
    ///
    /// Useful for mixed-case dictionaries where `Rate` and `rate` are distinct
    /// entries and edits between them should be reachable.
    ///
    /// # Errors
    /// Returns `AlphabetError::Empty` if the word list has no characters.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, AlphabetError> {
        let mut chars: Vec<char> = words
            .iter()
            .flat_map(|w| w.as_ref().chars())
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        chars.sort_unstable();
        Self::new(chars)
    }

    /// Characters in edit order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; an alphabet cannot be constructed empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase_ascii()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lowercase_ascii() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.chars()[0], 'a');
        assert_eq!(alphabet.chars()[25], 'z');
        assert_eq!(alphabet.to_string(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn new_dedups_in_first_seen_order() {
        let alphabet = Alphabet::new("zyzxy".chars()).unwrap();
        assert_eq!(alphabet.chars(), &['z', 'y', 'x']);
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Alphabet::new(std::iter::empty()), Err(AlphabetError::Empty));
    }

    #[test]
    fn from_words_collects_mixed_case_sorted() {
        let alphabet = Alphabet::from_words(&["Rate", "rate"]).unwrap();
        assert_eq!(alphabet.chars(), &['R', 'a', 'e', 'r', 't']);
        assert!(alphabet.contains('R'));
        assert!(!alphabet.contains('b'));
    }

    #[test]
    fn from_words_empty_list() {
        let words: [&str; 0] = [];
        assert!(Alphabet::from_words(&words).is_err());
    }
}
