//! Ladder command
//!
//! Finds the fewest single-letter edits between two words and names each
//! edit along the way.

use crate::core::{ChangeKind, GraphError, Word, WordGraph};

/// One step of a ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub word: String,
    /// How this word was reached from the previous one
    pub edit: Option<String>,
}

/// Result of a ladder search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    /// `None` if `to` is unreachable
    pub steps: Option<Vec<PathStep>>,
}

impl PathResult {
    /// Number of edits, if reachable
    #[must_use]
    pub fn edits(&self) -> Option<usize> {
        self.steps.as_ref().map(|s| s.len().saturating_sub(1))
    }
}

/// Find the shortest ladder from `from` to `to`
///
/// # Errors
///
/// Returns `GraphError::NotFound` if either word is not in the dictionary.
pub fn find_path(graph: &WordGraph, from: &str, to: &str) -> Result<PathResult, GraphError> {
    let start = graph.get_required_word(from)?;
    let goal = graph.get_required_word(to)?;

    let steps = graph.shortest_path(start, goal).map(|path| {
        let mut steps = vec![PathStep {
            word: start.value().to_string(),
            edit: None,
        }];
        steps.extend(path.windows(2).map(|pair| PathStep {
            word: pair[1].value().to_string(),
            edit: describe_edit(pair[0], pair[1]),
        }));
        steps
    });

    Ok(PathResult {
        from: from.to_string(),
        to: to.to_string(),
        steps,
    })
}

/// Human description of the edit that turns `from` into `to`
#[must_use]
pub fn describe_edit(from: &Word, to: &Word) -> Option<String> {
    let (index, change) = from
        .changes()
        .iter()
        .find(|(_, c)| c.result() == to.id())?;

    let description = match change.kind() {
        ChangeKind::Delete => {
            let letter = from.letter(index)?.value();
            format!("delete '{letter}' at {}", index + 1)
        }
        ChangeKind::Insert(c) => format!("insert '{c}' at {}", index + 1),
        ChangeKind::Replace(c) => {
            let letter = from.letter(index)?.value();
            format!("replace '{letter}' with '{c}' at {}", index + 1)
        }
    };
    Some(description)
}
