//! JSON wire format for pre-built graphs
//!
//! Encoding walks the graph and writes each word's options. Decoding is a
//! separate validation step: the payload is checked in full and either yields
//! a complete `WordGraph` or a `SchemaViolation`. No partial graph is ever
//! produced.

mod schema;

pub use schema::{OptionMap, WireGraph, WireWord, parse};

use crate::core::{Change, ChangeKind, Word, WordGraph, WordId};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::debug;

/// Reasons a payload is rejected
#[derive(Debug, thiserror::Error)]
pub enum SchemaViolation {
    #[error("payload does not match the graph schema: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("empty word key")]
    EmptyWord,

    #[error("'{word}': {field} index {index} out of range")]
    IndexOutOfRange {
        word: String,
        field: &'static str,
        index: usize,
    },

    #[error("'{word}': replacement '{letter}' at {index} repeats the existing letter")]
    SameLetter {
        word: String,
        index: usize,
        letter: char,
    },

    #[error("'{word}': {field} at {index} gives '{expected}', payload says '{result}'")]
    WrongResult {
        word: String,
        field: &'static str,
        index: usize,
        expected: String,
        result: String,
    },

    #[error("'{word}': result '{result}' is not a word in the payload")]
    UnknownResult { word: String, result: String },
}

/// Encode a graph into its wire shape
///
/// Keys are sorted, so output is stable for a given graph.
#[must_use]
pub fn encode(graph: &WordGraph) -> WireGraph {
    graph
        .iter()
        .map(|word| (word.value().to_string(), encode_word(graph, word)))
        .collect()
}

fn encode_word(graph: &WordGraph, word: &Word) -> WireWord {
    let value_of = |change: Change| graph.resolve(change).value().to_string();
    let options = |changes: &[Change]| -> BTreeMap<char, String> {
        changes
            .iter()
            .filter_map(|&c| c.letter().map(|letter| (letter, value_of(c))))
            .collect()
    };

    let mut record = WireWord::default();

    for letter in word.letters() {
        if let Some(change) = letter.delete_change() {
            record.delete.insert(letter.position(), value_of(change));
        }
        if letter.can_replace() {
            record
                .replace
                .insert(letter.position(), options(letter.replacements()));
        }
    }

    for position in word.positions() {
        if position.can_insert() {
            record
                .insert
                .insert(position.index(), options(position.inserts()));
        }
    }

    record
}

/// Encode a graph as pretty-printed JSON
///
/// # Errors
/// Returns a `serde_json::Error` if serialization fails.
pub fn to_json(graph: &WordGraph) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&encode(graph))
}

/// Decode and validate a JSON payload
///
/// # Errors
/// Returns a `SchemaViolation` for malformed JSON, an unexpected shape,
/// repeated keys, out-of-range indices, results that are not the stated edit of their word,
/// or results missing from the payload.
///
/// # Examples
/// ```
/// use wordhop::wire::{decode, SchemaViolation};
///
/// let graph = decode(r#"{"cat": {"delete": {"0": "at"}}, "at": {}}"#).unwrap();
/// assert!(graph.get("cat").unwrap().letter(0).unwrap().can_delete());
///
/// let err = decode(r#"{"cat": {"delete": {"0": "dog"}}}"#).unwrap_err();
/// assert!(matches!(err, SchemaViolation::WrongResult { .. }));
/// ```
pub fn decode(json: &str) -> Result<WordGraph, SchemaViolation> {
    let wire = parse(json).map_err(SchemaViolation::Shape)?;
    from_wire(&wire)
}

/// Validate an already-parsed payload and build the graph
///
/// Word ids follow key order.
///
/// # Errors
/// See [`decode`].
pub fn from_wire(wire: &WireGraph) -> Result<WordGraph, SchemaViolation> {
    let index: FxHashMap<&str, WordId> = wire
        .keys()
        .enumerate()
        .map(|(i, value)| (value.as_str(), WordId::new(i)))
        .collect();

    let words = wire
        .iter()
        .enumerate()
        .map(|(i, (value, record))| decode_word(WordId::new(i), value, record, &index))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(words = words.len(), "decoded wire graph");
    Ok(WordGraph::from_words(words))
}

fn decode_word(
    id: WordId,
    value: &str,
    record: &WireWord,
    index: &FxHashMap<&str, WordId>,
) -> Result<Word, SchemaViolation> {
    if value.is_empty() {
        return Err(SchemaViolation::EmptyWord);
    }

    let mut word = Word::bare(id, value);
    let len = word.len();

    let out_of_range = |field, i| SchemaViolation::IndexOutOfRange {
        word: value.to_string(),
        field,
        index: i,
    };
    let check = |field, i, kind: ChangeKind, result: &str| -> Result<WordId, SchemaViolation> {
        let expected = kind.apply(value, i).ok_or_else(|| out_of_range(field, i))?;
        if expected != result {
            return Err(SchemaViolation::WrongResult {
                word: value.to_string(),
                field,
                index: i,
                expected,
                result: result.to_string(),
            });
        }
        index
            .get(result)
            .copied()
            .ok_or_else(|| SchemaViolation::UnknownResult {
                word: value.to_string(),
                result: result.to_string(),
            })
    };

    for (&i, result) in &record.delete {
        if i >= len {
            return Err(out_of_range("delete", i));
        }
        let target = check("delete", i, ChangeKind::Delete, result)?;
        word.letter_mut(i).set_delete(Change::delete(target));
    }

    for (&i, options) in &record.replace {
        if i >= len {
            return Err(out_of_range("replace", i));
        }
        let existing = word.letter_mut(i).value();
        for (&letter, result) in options {
            if letter == existing {
                return Err(SchemaViolation::SameLetter {
                    word: value.to_string(),
                    index: i,
                    letter,
                });
            }
            let target = check("replace", i, ChangeKind::Replace(letter), result)?;
            word.letter_mut(i)
                .push_replacement(Change::replace(target, letter));
        }
    }

    for (&j, options) in &record.insert {
        if j > len {
            return Err(out_of_range("insert", j));
        }
        for (&letter, result) in options {
            let target = check("insert", j, ChangeKind::Insert(letter), result)?;
            word.position_mut(j).push_insert(Change::insert(target, letter));
        }
    }

    Ok(word)
}
