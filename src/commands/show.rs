//! Word inspection command
//!
//! Lists every edit available on a word: per letter delete and replace
//! options, per gap insert options.

use crate::core::{Change, GraphError, WordGraph};

/// Options on one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterReport {
    pub letter: char,
    pub index: usize,
    pub delete: Option<String>,
    pub replacements: Vec<(char, String)>,
}

/// Options in one gap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapReport {
    pub index: usize,
    pub inserts: Vec<(char, String)>,
}

/// Edit surface of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport {
    pub word: String,
    pub letters: Vec<LetterReport>,
    pub gaps: Vec<GapReport>,
    pub total_changes: usize,
    pub neighbors: usize,
}

/// Describe the edits available on `value`
///
/// # Errors
///
/// Returns `GraphError::NotFound` if the word is not in the dictionary.
pub fn describe_word(graph: &WordGraph, value: &str) -> Result<WordReport, GraphError> {
    let word = graph.get_required_word(value)?;
    let options = |changes: &[Change]| -> Vec<(char, String)> {
        changes
            .iter()
            .filter_map(|&c| Some((c.letter()?, graph.resolve(c).value().to_string())))
            .collect()
    };

    let letters = word
        .letters()
        .iter()
        .map(|letter| LetterReport {
            letter: letter.value(),
            index: letter.position(),
            delete: letter
                .delete_change()
                .map(|c| graph.resolve(c).value().to_string()),
            replacements: options(letter.replacements()),
        })
        .collect();

    let gaps = word
        .positions()
        .iter()
        .map(|position| GapReport {
            index: position.index(),
            inserts: options(position.inserts()),
        })
        .collect();

    Ok(WordReport {
        word: word.value().to_string(),
        letters,
        gaps,
        total_changes: word.changes().len(),
        neighbors: graph.neighbors(word).len(),
    })
}
