//! Word nodes
//!
//! A Word stores its value along with the edit surface derived from the
//! dictionary: one `Letter` per character and one `Position` per gap.

use super::change::{Change, ChangeKind, WordId};
use std::fmt;

/// One character of a word and the edits available on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    value: char,
    position: usize,
    delete: Option<Change>,
    replacements: Vec<Change>,
}

impl Letter {
    const fn new(value: char, position: usize) -> Self {
        Self {
            value,
            position,
            delete: None,
            replacements: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> char {
        self.value
    }

    /// Index of this letter within its word
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn can_delete(&self) -> bool {
        self.delete.is_some()
    }

    #[inline]
    #[must_use]
    pub fn can_replace(&self) -> bool {
        !self.replacements.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn delete_change(&self) -> Option<Change> {
        self.delete
    }

    /// Replace changes in alphabet order
    #[inline]
    #[must_use]
    pub fn replacements(&self) -> &[Change] {
        &self.replacements
    }

    /// Characters this letter can be replaced with, in alphabet order
    pub fn replacement_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.replacements.iter().filter_map(|c| c.letter())
    }

    /// Find the replace change for a character
    #[must_use]
    pub fn replacement(&self, letter: char) -> Option<Change> {
        self.replacements
            .iter()
            .copied()
            .find(|c| c.kind() == ChangeKind::Replace(letter))
    }

    pub(crate) fn set_delete(&mut self, change: Change) {
        debug_assert_eq!(change.kind(), ChangeKind::Delete);
        self.delete = Some(change);
    }

    pub(crate) fn push_replacement(&mut self, change: Change) {
        debug_assert!(matches!(change.kind(), ChangeKind::Replace(_)));
        self.replacements.push(change);
    }
}

/// A gap between letters (or at either end) and the letters insertable there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    index: usize,
    inserts: Vec<Change>,
}

impl Position {
    const fn new(index: usize) -> Self {
        Self {
            index,
            inserts: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn can_insert(&self) -> bool {
        !self.inserts.is_empty()
    }

    /// Insert changes in alphabet order
    #[inline]
    #[must_use]
    pub fn inserts(&self) -> &[Change] {
        &self.inserts
    }

    /// Characters insertable at this gap, in alphabet order
    pub fn insert_options(&self) -> impl Iterator<Item = char> + '_ {
        self.inserts.iter().filter_map(|c| c.letter())
    }

    /// Find the insert change for a character
    #[must_use]
    pub fn insert(&self, letter: char) -> Option<Change> {
        self.inserts
            .iter()
            .copied()
            .find(|c| c.kind() == ChangeKind::Insert(letter))
    }

    pub(crate) fn push_insert(&mut self, change: Change) {
        debug_assert!(matches!(change.kind(), ChangeKind::Insert(_)));
        self.inserts.push(change);
    }
}

/// A dictionary word with its letters, gaps and valid edits
///
/// Words are created by the graph builder or the wire decoder and are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    id: WordId,
    value: String,
    letters: Vec<Letter>,
    positions: Vec<Position>,
}

impl Word {
    /// A word with no edits recorded yet
    pub(crate) fn bare(id: WordId, value: &str) -> Self {
        let letters: Vec<Letter> = value
            .chars()
            .enumerate()
            .map(|(i, c)| Letter::new(c, i))
            .collect();
        let positions = (0..=letters.len()).map(Position::new).collect();

        Self {
            id,
            value: value.to_string(),
            letters,
            positions,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> WordId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Gaps `0..=len`
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[must_use]
    pub fn letter(&self, index: usize) -> Option<&Letter> {
        self.letters.get(index)
    }

    #[must_use]
    pub fn position(&self, index: usize) -> Option<&Position> {
        self.positions.get(index)
    }

    /// All edits reachable from this word
    #[must_use]
    pub const fn changes(&self) -> WordChanges<'_> {
        WordChanges { word: self }
    }

    pub(crate) fn letter_mut(&mut self, index: usize) -> &mut Letter {
        &mut self.letters[index]
    }

    pub(crate) fn position_mut(&mut self, index: usize) -> &mut Position {
        &mut self.positions[index]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Aggregated view over a word's edits
#[derive(Debug, Clone, Copy)]
pub struct WordChanges<'w> {
    word: &'w Word,
}

impl<'w> WordChanges<'w> {
    /// Delete change per letter, `None` where deleting is not valid
    pub fn deletes(&self) -> impl Iterator<Item = Option<Change>> + use<'w> {
        self.word.letters.iter().map(Letter::delete_change)
    }

    /// Replace changes per letter
    pub fn replacements(&self) -> impl Iterator<Item = &'w [Change]> + use<'w> {
        self.word.letters.iter().map(Letter::replacements)
    }

    /// Insert changes per gap
    pub fn inserts(&self) -> impl Iterator<Item = &'w [Change]> + use<'w> {
        self.word.positions.iter().map(Position::inserts)
    }

    /// Every change paired with its index
    ///
    /// The index names a letter for deletes and replacements and a gap for
    /// inserts. Order: per letter (delete then replacements), then per gap.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Change)> + use<'w> {
        let letters = self.word.letters.iter().flat_map(|letter| {
            letter
                .delete
                .into_iter()
                .chain(letter.replacements.iter().copied())
                .map(move |c| (letter.position, c))
        });
        let gaps = self
            .word
            .positions
            .iter()
            .flat_map(|pos| pos.inserts.iter().map(move |&c| (pos.index, c)));
        letters.chain(gaps)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Word {
        let mut word = Word::bare(WordId::new(0), "cat");
        word.letter_mut(0).set_delete(Change::delete(WordId::new(1)));
        word.letter_mut(0)
            .push_replacement(Change::replace(WordId::new(2), 'b'));
        word.letter_mut(0)
            .push_replacement(Change::replace(WordId::new(3), 'h'));
        word.position_mut(3)
            .push_insert(Change::insert(WordId::new(4), 's'));
        word
    }

    #[test]
    fn bare_word_shape() {
        let word = Word::bare(WordId::new(0), "cat");
        assert_eq!(word.len(), 3);
        assert_eq!(word.letters().len(), 3);
        assert_eq!(word.positions().len(), 4);
        assert!(word.changes().is_empty());
    }

    #[test]
    fn letter_positions_match_indices() {
        let word = Word::bare(WordId::new(0), "spell");
        for (i, letter) in word.letters().iter().enumerate() {
            assert_eq!(letter.position(), i);
        }
        for (i, pos) in word.positions().iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(word.letter(2).unwrap().value(), 'e');
    }

    #[test]
    fn multibyte_letters() {
        let word = Word::bare(WordId::new(0), "née");
        assert_eq!(word.len(), 3);
        assert_eq!(word.letter(1).unwrap().value(), 'é');
        assert_eq!(word.positions().len(), 4);
    }

    #[test]
    fn letter_options() {
        let word = sample();
        let c = word.letter(0).unwrap();
        assert!(c.can_delete());
        assert!(c.can_replace());
        assert_eq!(c.replacement_letters().collect::<String>(), "bh");
        assert_eq!(c.replacement('h').unwrap().result(), WordId::new(3));
        assert!(c.replacement('z').is_none());

        let a = word.letter(1).unwrap();
        assert!(!a.can_delete());
        assert!(!a.can_replace());
    }

    #[test]
    fn position_options() {
        let word = sample();
        let end = word.position(3).unwrap();
        assert!(end.can_insert());
        assert_eq!(end.insert_options().collect::<Vec<_>>(), vec!['s']);
        assert_eq!(end.insert('s').unwrap().result(), WordId::new(4));
        assert!(!word.position(0).unwrap().can_insert());
    }

    #[test]
    fn aggregated_changes() {
        let word = sample();
        let changes = word.changes();
        assert_eq!(changes.len(), 4);

        let deletes: Vec<_> = changes.deletes().collect();
        assert_eq!(deletes.len(), 3);
        assert!(deletes[0].is_some());
        assert!(deletes[1].is_none());

        assert_eq!(changes.replacements().map(<[Change]>::len).sum::<usize>(), 2);
        assert_eq!(changes.inserts().count(), 4);

        let indexed: Vec<_> = changes.iter().collect();
        assert_eq!(indexed[0], (0, Change::delete(WordId::new(1))));
        assert_eq!(indexed[3], (3, Change::insert(WordId::new(4), 's')));
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", sample()), "cat");
    }
}
