//! Graph statistics command

use crate::core::{ChangeKind, WordGraph};
use crate::output::formatters::create_progress_bar;
use std::time::{Duration, Instant};
use tracing::debug;

/// Aggregate shape of a word graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub words: usize,
    pub changes: usize,
    pub deletes: usize,
    pub inserts: usize,
    pub replaces: usize,
    /// Words with no edits at all
    pub isolated: usize,
    pub components: usize,
    pub largest_component: usize,
    /// Word with the most distinct neighbors, and that count
    pub most_connected: Option<(String, usize)>,
    pub duration: Duration,
}

impl GraphStats {
    /// Mean number of changes per word
    #[must_use]
    pub fn average_changes(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.changes as f64 / self.words as f64
        }
    }
}

/// Walk the graph and collect statistics
///
/// Components ignore edit direction: two words share a component when a
/// chain of edits links them either way. With a partial alphabet some edits
/// have no inverse, and this keeps the count independent of word order.
#[must_use]
pub fn compute_stats(graph: &WordGraph, show_progress: bool) -> GraphStats {
    let start = Instant::now();
    let pb = create_progress_bar(graph.len() as u64, show_progress);
    pb.set_message("counting changes");

    let mut deletes = 0;
    let mut inserts = 0;
    let mut replaces = 0;
    let mut isolated = 0;
    let mut most_connected: Option<(String, usize)> = None;

    for word in graph {
        let mut changes = 0;
        for (_, change) in word.changes().iter() {
            changes += 1;
            match change.kind() {
                ChangeKind::Delete => deletes += 1,
                ChangeKind::Insert(_) => inserts += 1,
                ChangeKind::Replace(_) => replaces += 1,
            }
        }
        if changes == 0 {
            isolated += 1;
        }

        let neighbors = graph.neighbors(word).len();
        if most_connected.as_ref().is_none_or(|(_, best)| neighbors > *best) {
            most_connected = Some((word.value().to_string(), neighbors));
        }
        pb.inc(1);
    }

    pb.set_message("finding components");
    let (components, largest_component) = components(graph);
    pb.finish_and_clear();

    let stats = GraphStats {
        words: graph.len(),
        changes: deletes + inserts + replaces,
        deletes,
        inserts,
        replaces,
        isolated,
        components,
        largest_component,
        most_connected: most_connected.filter(|(_, n)| *n > 0),
        duration: start.elapsed(),
    };
    debug!(
        words = stats.words,
        changes = stats.changes,
        components = stats.components,
        "computed graph stats"
    );
    stats
}

/// Number of undirected components and the size of the largest
fn components(graph: &WordGraph) -> (usize, usize) {
    fn root(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    let mut parent: Vec<usize> = (0..graph.len()).collect();
    for word in graph {
        for (_, change) in word.changes().iter() {
            let a = root(&mut parent, word.id().index());
            let b = root(&mut parent, change.result().index());
            if a != b {
                parent[a.max(b)] = a.min(b);
            }
        }
    }

    let mut sizes = vec![0usize; graph.len()];
    for i in 0..graph.len() {
        sizes[root(&mut parent, i)] += 1;
    }
    let components = sizes.iter().filter(|&&n| n > 0).count();
    let largest = sizes.iter().copied().max().unwrap_or(0);
    (components, largest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WordGraphBuilder;

    fn scenario() -> WordGraph {
        WordGraphBuilder::new()
            .build(&[
                "cat", "bat", "rat", "hat", "mat", "sat", "at", "rats", "zebra",
            ])
            .unwrap()
    }

    #[test]
    fn counts_by_kind() {
        let stats = compute_stats(&scenario(), false);
        assert_eq!(stats.words, 9);
        assert_eq!(stats.deletes, 7);
        assert_eq!(stats.inserts, 7);
        assert_eq!(stats.replaces, 30);
        assert_eq!(stats.changes, 44);
        assert_eq!(stats.changes, scenario().edge_count());
    }

    #[test]
    fn components_and_isolated_words() {
        let stats = compute_stats(&scenario(), false);
        assert_eq!(stats.isolated, 1);
        assert_eq!(stats.components, 2);
        assert_eq!(stats.largest_component, 8);
    }

    #[test]
    fn one_way_edits_join_components() {
        // 'R' is outside the alphabet, so only Rate -> rate exists
        for words in [["rate", "Rate"], ["Rate", "rate"]] {
            let graph = WordGraphBuilder::new().build(&words).unwrap();
            let stats = compute_stats(&graph, false);
            assert_eq!(stats.changes, 1);
            assert_eq!(stats.components, 1);
            assert_eq!(stats.largest_component, 2);
        }
    }

    #[test]
    fn most_connected_word() {
        let stats = compute_stats(&scenario(), false);
        assert_eq!(stats.most_connected, Some(("rat".to_string(), 7)));
    }

    #[test]
    fn empty_graph() {
        let stats = compute_stats(&WordGraph::default(), false);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.components, 0);
        assert_eq!(stats.most_connected, None);
        assert!(stats.average_changes().abs() < f64::EPSILON);
    }
}
