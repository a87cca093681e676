//! The dictionary as a graph
//!
//! Maps each word value to its node. Built once by `WordGraphBuilder` or the
//! wire decoder and read-only afterwards, so it can be shared freely.

use super::change::{Change, WordId};
use super::word::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Error type for graph lookups
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("word '{0}' is not in the dictionary")]
    NotFound(String),
}

/// Immutable word-edit graph
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordGraph {
    words: Vec<Word>,
    index: FxHashMap<String, WordId>,
}

impl WordGraph {
    /// Assemble a graph from nodes whose ids equal their slice index
    pub(crate) fn from_words(words: Vec<Word>) -> Self {
        debug_assert!(words.iter().enumerate().all(|(i, w)| w.id().index() == i));

        let index = words
            .iter()
            .map(|w| (w.value().to_string(), w.id()))
            .collect();

        Self { words, index }
    }

    /// Look up a word by value
    #[must_use]
    pub fn get(&self, value: &str) -> Option<&Word> {
        self.index.get(value).map(|&id| self.word(id))
    }

    /// Look up a word that must exist
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` if the value is not in the dictionary.
    ///
    /// # Examples
    /// ```
    /// use wordhop::builder::WordGraphBuilder;
    /// use wordhop::core::GraphError;
    ///
    /// let graph = WordGraphBuilder::new().build(&["cat", "at"]).unwrap();
    /// assert_eq!(graph.get_required_word("cat").unwrap().value(), "cat");
    /// assert_eq!(
    ///     graph.get_required_word("dog"),
    ///     Err(GraphError::NotFound("dog".to_string()))
    /// );
    /// ```
    pub fn get_required_word(&self, value: &str) -> Result<&Word, GraphError> {
        self.get(value)
            .ok_or_else(|| GraphError::NotFound(value.to_string()))
    }

    /// Node for an id handed out by this graph
    ///
    /// # Panics
    /// Panics if the id belongs to a different, larger graph.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    /// The word a change lands on
    #[inline]
    #[must_use]
    pub fn resolve(&self, change: Change) -> &Word {
        self.word(change.result())
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Distinct words one edit away, in change order
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<&Word> {
        let mut seen = FxHashSet::default();
        word.changes()
            .iter()
            .filter(|(_, c)| seen.insert(c.result()))
            .map(|(_, c)| self.resolve(c))
            .collect()
    }

    /// Total number of recorded changes across all words
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.words.iter().map(|w| w.changes().len()).sum()
    }
}

impl<'g> IntoIterator for &'g WordGraph {
    type Item = &'g Word;
    type IntoIter = std::slice::Iter<'g, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WordGraphBuilder;

    fn graph() -> WordGraph {
        WordGraphBuilder::new()
            .build(&["cat", "bat", "at", "cats"])
            .unwrap()
    }

    #[test]
    fn get_present_and_absent() {
        let graph = graph();
        assert_eq!(graph.get("bat").unwrap().value(), "bat");
        assert!(graph.get("dog").is_none());
        assert!(graph.contains("at"));
        assert!(!graph.contains("Cat"));
    }

    #[test]
    fn get_required_word_not_found() {
        let graph = graph();
        let err = graph.get_required_word("dog").unwrap_err();
        assert_eq!(err, GraphError::NotFound("dog".to_string()));
        assert_eq!(err.to_string(), "word 'dog' is not in the dictionary");
    }

    #[test]
    fn get_required_word_exact() {
        let graph = graph();
        let word = graph.get_required_word("cats").unwrap();
        assert_eq!(word.value(), "cats");
        assert_eq!(graph.word(word.id()), word);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let graph = graph();
        let values: Vec<&str> = graph.iter().map(Word::value).collect();
        assert_eq!(values, vec!["cat", "bat", "at", "cats"]);
        assert_eq!(graph.len(), 4);
        assert!(!graph.is_empty());
    }

    #[test]
    fn neighbors_are_distinct() {
        let graph = graph();
        let cat = graph.get("cat").unwrap();
        let mut neighbors: Vec<&str> = graph.neighbors(cat).iter().map(|w| w.value()).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!["at", "bat", "cats"]);
    }

    #[test]
    fn edge_count_sums_changes() {
        let graph = graph();
        // cat: delete->at, replace->bat, insert->cats
        // bat: delete->at, replace->cat
        // at: insert->cat, insert->bat
        // cats: delete->cat
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn empty_graph() {
        let graph = WordGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
