//! Word graph construction
//!
//! Turns a dictionary word list into a `WordGraph` by trying every
//! single-letter delete, replace and insert of every word and keeping the
//! candidates that are themselves in the list.

mod candidates;

use crate::core::{Alphabet, WordGraph, WordId};
use candidates::WordIndex;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Error type for graph construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("word at index {index} is empty")]
    EmptyWord { index: usize },
}

/// Builds a `WordGraph` from a word list
///
/// The builder performs no normalization: membership is exact string
/// equality, so case folding (if any) is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct WordGraphBuilder {
    alphabet: Alphabet,
}

impl WordGraphBuilder {
    /// Builder using the lowercase ASCII alphabet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder trying the given characters for inserts and replacements
    #[must_use]
    pub const fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Build the graph
    ///
    /// Duplicates collapse to their first occurrence, and word ids follow
    /// the order of first occurrence. For a fixed list and alphabet the result
    /// is fully deterministic.
    ///
    /// Work is O(total letters × alphabet size) hash lookups, spread over
    /// words in parallel.
    ///
    /// # Errors
    /// Returns `BuildError::EmptyWord` if the list contains an empty string.
    ///
    /// # Examples
    /// ```
    /// use wordhop::builder::WordGraphBuilder;
    ///
    /// let graph = WordGraphBuilder::new()
    ///     .build(&["cat", "bat", "at", "cat"])
    ///     .unwrap();
    /// assert_eq!(graph.len(), 3);
    ///
    /// let cat = graph.get("cat").unwrap();
    /// let first = cat.letter(0).unwrap();
    /// assert!(first.can_delete());
    /// assert_eq!(first.replacement_letters().collect::<String>(), "b");
    /// ```
    pub fn build<S: AsRef<str>>(&self, words: &[S]) -> Result<WordGraph, BuildError> {
        let start = Instant::now();

        let mut index: WordIndex<'_> = WordIndex::default();
        let mut values: Vec<&str> = Vec::with_capacity(words.len());

        for (i, word) in words.iter().enumerate() {
            let value = word.as_ref();
            if value.is_empty() {
                return Err(BuildError::EmptyWord { index: i });
            }
            if !index.contains_key(value) {
                index.insert(value, WordId::new(values.len()));
                values.push(value);
            }
        }

        debug!(
            input = words.len(),
            unique = values.len(),
            alphabet = self.alphabet.len(),
            "building word graph"
        );

        let nodes = values
            .par_iter()
            .enumerate()
            .map(|(i, value)| candidates::expand(WordId::new(i), value, &index, &self.alphabet))
            .collect();

        let graph = WordGraph::from_words(nodes);

        info!(
            words = graph.len(),
            changes = graph.edge_count(),
            elapsed_ms = start.elapsed().as_millis(),
            "word graph built"
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChangeKind, Word};

    const SCENARIO: [&str; 8] = ["cat", "bat", "rat", "hat", "mat", "sat", "at", "rats"];

    fn scenario() -> WordGraph {
        WordGraphBuilder::new().build(&SCENARIO).unwrap()
    }

    fn result_values<'g>(graph: &'g WordGraph, changes: &[crate::core::Change]) -> Vec<&'g str> {
        changes.iter().map(|&c| graph.resolve(c).value()).collect()
    }

    #[test]
    fn scenario_cat_replacements() {
        let graph = scenario();
        let cat = graph.get("cat").unwrap();
        let first = cat.letter(0).unwrap();

        assert!(first.can_replace());
        assert_eq!(first.replacement_letters().collect::<String>(), "bhmrs");
        assert_eq!(
            result_values(&graph, first.replacements()),
            vec!["bat", "hat", "mat", "rat", "sat"]
        );
    }

    #[test]
    fn scenario_cat_delete() {
        let graph = scenario();
        let cat = graph.get("cat").unwrap();
        let delete = cat.letter(0).unwrap().delete_change().unwrap();

        assert_eq!(graph.resolve(delete).value(), "at");
        assert!(!cat.letter(1).unwrap().can_delete());
        assert!(!cat.letter(2).unwrap().can_delete());
    }

    #[test]
    fn scenario_rat_trailing_insert() {
        let graph = scenario();
        let rat = graph.get("rat").unwrap();
        let trailing = rat.position(3).unwrap();

        assert!(trailing.can_insert());
        let insert = trailing.insert('s').unwrap();
        assert_eq!(graph.resolve(insert).value(), "rats");
    }

    #[test]
    fn scenario_at_leading_inserts() {
        let graph = scenario();
        let at = graph.get("at").unwrap();
        let leading = at.position(0).unwrap();

        assert_eq!(leading.insert_options().collect::<String>(), "bchmrs");
        for change in leading.inserts() {
            let letter = change.letter().unwrap();
            assert_eq!(graph.resolve(*change).value(), format!("{letter}at"));
        }
    }

    #[test]
    fn every_result_is_in_graph() {
        let graph = scenario();
        for word in &graph {
            for (_, change) in word.changes().iter() {
                let result = graph.resolve(change);
                assert!(graph.contains(result.value()));
                assert_ne!(result.value(), word.value());
            }
        }
    }

    #[test]
    fn inverse_law_holds() {
        let graph = scenario();
        for word in &graph {
            for (index, change) in word.changes().iter() {
                let result = graph.resolve(change);
                let back = match change.kind() {
                    ChangeKind::Replace(_) => {
                        let original = word.letter(index).unwrap().value();
                        result.letter(index).unwrap().replacement(original)
                    }
                    ChangeKind::Delete => {
                        let original = word.letter(index).unwrap().value();
                        result.position(index).unwrap().insert(original)
                    }
                    ChangeKind::Insert(_) => result.letter(index).unwrap().delete_change(),
                };
                let back = back.unwrap_or_else(|| {
                    panic!("no inverse for {} -> {}", word.value(), result.value())
                });
                assert_eq!(back.result(), word.id());
            }
        }
    }

    #[test]
    fn results_match_applied_edit() {
        let graph = scenario();
        for word in &graph {
            for (index, change) in word.changes().iter() {
                let applied = change.kind().apply(word.value(), index).unwrap();
                assert_eq!(applied, graph.resolve(change).value());
            }
        }
    }

    #[test]
    fn duplicates_collapse_to_first() {
        let graph = WordGraphBuilder::new()
            .build(&["at", "cat", "at", "cat"])
            .unwrap();
        let values: Vec<&str> = graph.iter().map(Word::value).collect();
        assert_eq!(values, vec!["at", "cat"]);
    }

    #[test]
    fn empty_word_fails_fast() {
        let result = WordGraphBuilder::new().build(&["cat", "", "at"]);
        assert_eq!(result, Err(BuildError::EmptyWord { index: 1 }));
    }

    #[test]
    fn empty_list_builds_empty_graph() {
        let words: [&str; 0] = [];
        let graph = WordGraphBuilder::new().build(&words).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn single_letter_words() {
        let graph = WordGraphBuilder::new().build(&["a", "i", "at"]).unwrap();
        let a = graph.get("a").unwrap();

        assert!(!a.letter(0).unwrap().can_delete());
        assert_eq!(a.letter(0).unwrap().replacement_letters().collect::<String>(), "i");
        assert_eq!(a.position(1).unwrap().insert_options().collect::<String>(), "t");
    }

    #[test]
    fn case_is_exact() {
        let graph = WordGraphBuilder::new().build(&["Rate", "rate", "ate"]).unwrap();
        let upper = graph.get("Rate").unwrap();
        let lower = graph.get("rate").unwrap();

        assert!(upper.letter(0).unwrap().can_delete());
        assert_eq!(graph.resolve(upper.letter(0).unwrap().delete_change().unwrap()).value(), "ate");

        // 'r' is in the default alphabet but 'R' is not, so the link is one-way
        assert_eq!(upper.letter(0).unwrap().replacement_letters().collect::<String>(), "r");
        assert!(!lower.letter(0).unwrap().can_replace());
    }

    #[test]
    fn mixed_case_alphabet_links_case_variants() {
        let words = ["Rate", "rate", "ate"];
        let alphabet = Alphabet::from_words(&words).unwrap();
        let graph = WordGraphBuilder::with_alphabet(alphabet).build(&words).unwrap();

        let upper = graph.get("Rate").unwrap();
        assert_eq!(upper.letter(0).unwrap().replacement_letters().collect::<String>(), "r");
        let ate = graph.get("ate").unwrap();
        assert_eq!(ate.position(0).unwrap().insert_options().collect::<String>(), "Rr");
    }

    #[test]
    fn build_is_deterministic() {
        let first = scenario();
        let second = scenario();
        assert_eq!(first, second);
    }
}
