//! Graph export command
//!
//! Writes the wire encoding of a graph to stdout or a file.

use crate::core::WordGraph;
use crate::wire;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// What was exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub words: usize,
    pub bytes: usize,
    /// Destination file, `None` for stdout
    pub path: Option<PathBuf>,
}

/// Encode `graph` and write it to `output`, or to stdout when `None`
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn export_graph(graph: &WordGraph, output: Option<&Path>) -> Result<ExportResult> {
    let json = wire::to_json(graph).context("failed to encode graph")?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), words = graph.len(), "exported graph");
        }
        None => println!("{json}"),
    }

    Ok(ExportResult {
        words: graph.len(),
        bytes: json.len(),
        path: output.map(Path::to_path_buf),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WordGraphBuilder;

    #[test]
    fn export_to_file_decodes_back() {
        let graph = WordGraphBuilder::new()
            .build(&["cat", "at", "hat", "zebra"])
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");

        let result = export_graph(&graph, Some(&path)).unwrap();
        assert_eq!(result.words, 4);
        assert_eq!(result.path.as_deref(), Some(path.as_path()));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.len(), result.bytes);

        let decoded = wire::decode(&written).unwrap();
        assert_eq!(decoded.len(), 4);
        assert_eq!(decoded.edge_count(), graph.edge_count());
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let graph = WordGraphBuilder::new().build(&["cat"]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.json");
        assert!(export_graph(&graph, Some(&path)).is_err());
    }
}
