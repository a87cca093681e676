//! Word ladders
//!
//! Breadth-first search over the edit graph: the shortest sequence of single
//! letter edits that turns one word into another, and the set of words
//! reachable at all.

use super::change::WordId;
use super::graph::WordGraph;
use super::word::Word;
use std::collections::VecDeque;

impl WordGraph {
    /// Shortest edit path from `from` to `to`, both ends included
    ///
    /// Returns `None` if `to` cannot be reached. Ties are broken by change
    /// order, so the result is deterministic.
    ///
    /// # Examples
    /// ```
    /// use wordhop::builder::WordGraphBuilder;
    ///
    /// let graph = WordGraphBuilder::new()
    ///     .build(&["cat", "cot", "cog", "dog"])
    ///     .unwrap();
    /// let path = graph
    ///     .shortest_path(graph.get("cat").unwrap(), graph.get("dog").unwrap())
    ///     .unwrap();
    /// let values: Vec<&str> = path.iter().map(|w| w.value()).collect();
    /// assert_eq!(values, ["cat", "cot", "cog", "dog"]);
    /// ```
    #[must_use]
    pub fn shortest_path<'g>(&'g self, from: &Word, to: &Word) -> Option<Vec<&'g Word>> {
        let start = from.id();
        let goal = to.id();

        let mut parent: Vec<Option<WordId>> = vec![None; self.len()];
        let mut visited = vec![false; self.len()];
        let mut queue = VecDeque::from([start]);
        visited[start.index()] = true;

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return Some(self.unwind(&parent, goal));
            }

            for (_, change) in self.word(current).changes().iter() {
                let next = change.result();
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    parent[next.index()] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Every word reachable from `start`, including itself, in BFS order
    #[must_use]
    pub fn reachable_from<'g>(&'g self, start: &Word) -> Vec<&'g Word> {
        let mut visited = vec![false; self.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start.id()]);
        visited[start.id().index()] = true;

        while let Some(current) = queue.pop_front() {
            order.push(self.word(current));
            for (_, change) in self.word(current).changes().iter() {
                let next = change.result();
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }

        order
    }

    /// Edit distance from `start` to every word, indexed by `WordId`
    ///
    /// `None` marks words that cannot be reached.
    #[must_use]
    pub fn distances_from(&self, start: &Word) -> Vec<Option<usize>> {
        let mut distances = vec![None; self.len()];
        let mut queue = VecDeque::from([start.id()]);
        distances[start.id().index()] = Some(0);

        while let Some(current) = queue.pop_front() {
            let next_distance = distances[current.index()].map(|d| d + 1);
            for (_, change) in self.word(current).changes().iter() {
                let next = change.result();
                if distances[next.index()].is_none() {
                    distances[next.index()] = next_distance;
                    queue.push_back(next);
                }
            }
        }

        distances
    }

    fn unwind(&self, parent: &[Option<WordId>], goal: WordId) -> Vec<&Word> {
        let mut path = vec![self.word(goal)];
        let mut cursor = goal;
        while let Some(prev) = parent[cursor.index()] {
            path.push(self.word(prev));
            cursor = prev;
        }
        path.reverse();
        path
    }
}
