//! Wire file validation command

use crate::core::WordGraph;
use crate::wire::{self, SchemaViolation};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Summary of a payload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub words: usize,
    pub changes: usize,
}

impl CheckResult {
    fn of(graph: &WordGraph) -> Self {
        Self {
            words: graph.len(),
            changes: graph.edge_count(),
        }
    }
}

/// Validate a JSON payload
///
/// # Errors
///
/// Returns the first `SchemaViolation` found.
pub fn check_json(json: &str) -> Result<CheckResult, SchemaViolation> {
    wire::decode(json).map(|graph| CheckResult::of(&graph))
}

/// Validate a wire-format file
///
/// # Errors
///
/// Returns an error if the file cannot be read, or wraps the
/// `SchemaViolation` that rejected it.
pub fn check_file(path: &Path) -> Result<CheckResult> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    check_json(&json).with_context(|| format!("{} is not a valid graph", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn valid_payload_counts() {
        let result = check_json(
            r#"{"cat": {"delete": {"0": "at"}, "replace": {"0": {"h": "hat"}}},
                "hat": {"delete": {"0": "at"}, "replace": {"0": {"c": "cat"}}},
                "at": {"insert": {"0": {"c": "cat", "h": "hat"}}}}"#,
        )
        .unwrap();
        assert_eq!(result, CheckResult { words: 3, changes: 6 });
    }

    #[test]
    fn violation_is_reported() {
        let err = check_json(r#"{"cat": {"delete": {"0": "at"}}}"#).unwrap_err();
        assert!(matches!(err, SchemaViolation::UnknownResult { .. }));
    }

    #[test]
    fn file_violation_keeps_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cat": {{"delete": {{"0": "dog"}}}}, "dog": {{}}}}"#).unwrap();

        let err = check_file(file.path()).unwrap_err();
        let violation = err.downcast_ref::<SchemaViolation>().unwrap();
        assert!(matches!(violation, SchemaViolation::WrongResult { .. }));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_file(&dir.path().join("nope.json")).is_err());
    }
}
