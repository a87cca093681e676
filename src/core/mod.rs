//! Core domain types for the word-edit graph
//!
//! Words, their letters and gaps, the single-letter changes between them, and
//! the immutable graph that owns every word. No I/O happens here.

mod alphabet;
mod change;
mod graph;
mod ladder;
mod word;

pub use alphabet::{Alphabet, AlphabetError};
pub use change::{Change, ChangeKind, WordId};
pub use graph::{GraphError, WordGraph};
pub use word::{Letter, Position, Word, WordChanges};
