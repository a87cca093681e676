//! Undo history
//!
//! A stack of previously visited words. Entries borrow from the graph, so
//! pushing never copies a word.

use crate::core::Word;

/// Stack of words visited before the current one
#[derive(Debug, Clone, Default)]
pub struct History<'g> {
    stack: Vec<&'g Word>,
}

impl<'g> History<'g> {
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, word: &'g Word) {
        self.stack.push(word);
    }

    /// Pop the most recent word
    ///
    /// Returns `None` and leaves the stack alone when empty. The caller makes
    /// the returned word current without pushing it again.
    pub fn undo(&mut self) -> Option<&'g Word> {
        self.stack.pop()
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&'g Word> {
        self.stack.last().copied()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &'g Word> + '_ {
        self.stack.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WordGraphBuilder;

    #[test]
    fn fresh_history_cannot_undo() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn push_enables_undo() {
        let graph = WordGraphBuilder::new().build(&["cat", "at"]).unwrap();
        let mut history = History::new();

        history.push(graph.get("cat").unwrap());
        assert!(history.can_undo());
        assert_eq!(history.len(), 1);
        assert_eq!(history.peek().unwrap().value(), "cat");
    }

    #[test]
    fn undo_pops_in_reverse_order() {
        let graph = WordGraphBuilder::new().build(&["cat", "at", "bat"]).unwrap();
        let mut history = History::new();

        history.push(graph.get("cat").unwrap());
        history.push(graph.get("at").unwrap());

        assert_eq!(history.undo().unwrap().value(), "at");
        assert_eq!(history.undo().unwrap().value(), "cat");
        assert!(history.undo().is_none());
        assert!(!history.can_undo());
    }

    #[test]
    fn undo_returns_graph_reference() {
        let graph = WordGraphBuilder::new().build(&["cat"]).unwrap();
        let cat = graph.get("cat").unwrap();
        let mut history = History::new();

        history.push(cat);
        assert!(std::ptr::eq(history.undo().unwrap(), cat));
    }

    #[test]
    fn clear_and_iter() {
        let graph = WordGraphBuilder::new().build(&["cat", "at"]).unwrap();
        let mut history = History::new();
        history.push(graph.get("cat").unwrap());
        history.push(graph.get("at").unwrap());

        let values: Vec<&str> = history.iter().map(Word::value).collect();
        assert_eq!(values, vec!["cat", "at"]);

        history.clear();
        assert!(!history.can_undo());
    }
}
