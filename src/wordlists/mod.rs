//! Dictionaries for the edit graph
//!
//! Provides the embedded default dictionary and a loader for word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
