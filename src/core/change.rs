//! Single-letter edits
//!
//! A `Change` is one atomic edit (delete, insert or replace) together with the
//! word it produces. Where the edit applies is implied by what owns it: a
//! letter owns its delete and replace changes, a gap owns its insert changes.

use std::fmt;

/// Dense index of a word inside its `WordGraph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(usize);

impl WordId {
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What kind of edit a change performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Remove the letter
    Delete,
    /// Insert the given character into a gap
    Insert(char),
    /// Swap the letter for the given character
    Replace(char),
}

impl ChangeKind {
    /// The character introduced by this edit, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Delete => None,
            Self::Insert(c) | Self::Replace(c) => Some(c),
        }
    }

    /// Apply the edit to `word` at character index `index`
    ///
    /// For `Delete` and `Replace` the index names a letter (`0..len`); for
    /// `Insert` it names a gap (`0..=len`). Returns `None` when the index is out
    /// of range for the edit.
    ///
    /// # Examples
    /// ```
    /// use wordhop::core::ChangeKind;
    ///
    /// assert_eq!(ChangeKind::Delete.apply("cat", 0).as_deref(), Some("at"));
    /// assert_eq!(ChangeKind::Insert('s').apply("rat", 3).as_deref(), Some("rats"));
    /// assert_eq!(ChangeKind::Replace('b').apply("cat", 0).as_deref(), Some("bat"));
    /// assert_eq!(ChangeKind::Delete.apply("cat", 3), None);
    /// ```
    #[must_use]
    pub fn apply(self, word: &str, index: usize) -> Option<String> {
        let mut chars: Vec<char> = word.chars().collect();
        match self {
            Self::Delete => {
                if index >= chars.len() {
                    return None;
                }
                chars.remove(index);
            }
            Self::Insert(c) => {
                if index > chars.len() {
                    return None;
                }
                chars.insert(index, c);
            }
            Self::Replace(c) => {
                *chars.get_mut(index)? = c;
            }
        }
        Some(chars.into_iter().collect())
    }
}

/// One valid edit and the dictionary word it lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Change {
    kind: ChangeKind,
    result: WordId,
}

impl Change {
    #[must_use]
    pub const fn delete(result: WordId) -> Self {
        Self {
            kind: ChangeKind::Delete,
            result,
        }
    }

    #[must_use]
    pub const fn insert(result: WordId, letter: char) -> Self {
        Self {
            kind: ChangeKind::Insert(letter),
            result,
        }
    }

    #[must_use]
    pub const fn replace(result: WordId, letter: char) -> Self {
        Self {
            kind: ChangeKind::Replace(letter),
            result,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> ChangeKind {
        self.kind
    }

    /// The word this change produces
    #[inline]
    #[must_use]
    pub const fn result(self) -> WordId {
        self.result
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        self.kind.letter()
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete => write!(f, "delete"),
            Self::Insert(c) => write!(f, "insert '{c}'"),
            Self::Replace(c) => write!(f, "replace with '{c}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_each_index() {
        assert_eq!(ChangeKind::Delete.apply("cat", 0).unwrap(), "at");
        assert_eq!(ChangeKind::Delete.apply("cat", 1).unwrap(), "ct");
        assert_eq!(ChangeKind::Delete.apply("cat", 2).unwrap(), "ca");
        assert!(ChangeKind::Delete.apply("cat", 3).is_none());
    }

    #[test]
    fn delete_single_letter_gives_empty() {
        assert_eq!(ChangeKind::Delete.apply("a", 0).unwrap(), "");
    }

    #[test]
    fn insert_at_every_gap() {
        assert_eq!(ChangeKind::Insert('s').apply("at", 0).unwrap(), "sat");
        assert_eq!(ChangeKind::Insert('s').apply("at", 1).unwrap(), "ast");
        assert_eq!(ChangeKind::Insert('s').apply("at", 2).unwrap(), "ats");
        assert!(ChangeKind::Insert('s').apply("at", 3).is_none());
    }

    #[test]
    fn replace_out_of_range() {
        assert!(ChangeKind::Replace('x').apply("at", 2).is_none());
    }

    #[test]
    fn apply_counts_characters_not_bytes() {
        assert_eq!(ChangeKind::Replace('e').apply("café", 3).unwrap(), "cafe");
        assert_eq!(ChangeKind::Delete.apply("né", 1).unwrap(), "n");
    }

    #[test]
    fn change_accessors() {
        let id = WordId::new(7);
        assert_eq!(Change::delete(id).letter(), None);
        assert_eq!(Change::insert(id, 's').letter(), Some('s'));
        assert_eq!(Change::replace(id, 'b').kind(), ChangeKind::Replace('b'));
        assert_eq!(Change::replace(id, 'b').result().index(), 7);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ChangeKind::Delete.to_string(), "delete");
        assert_eq!(ChangeKind::Insert('s').to_string(), "insert 's'");
        assert_eq!(ChangeKind::Replace('b').to_string(), "replace with 'b'");
    }
}
