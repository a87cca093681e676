//! External collaborators of the interaction layer
//!
//! Audio and the "current word changed" reaction live outside the core. The
//! core only calls into them and never inspects a result.

use crate::core::Word;
use tracing::debug;

/// Pronounces words
///
/// Calls are fire-and-forget: implementations should hand the request off
/// and return immediately. Failures stay inside the implementation.
pub trait WordSayer {
    /// Announce a word
    fn say(&self, word: &str);

    /// Warm up audio for a word that may be said soon
    fn preload(&self, _word: &str) {}
}

/// Sayer that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSayer;

impl WordSayer for SilentSayer {
    fn say(&self, _word: &str) {}
}

/// Sayer that only records requests in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSayer;

impl WordSayer for TracingSayer {
    fn say(&self, word: &str) {
        debug!(word, "say");
    }

    fn preload(&self, word: &str) {
        debug!(word, "preload");
    }
}

/// Receives the new current word after each committed edit
///
/// Called exactly once per commit. It must not re-enter the interaction
/// that committed.
pub trait NewWordHandler<'g> {
    fn handle(&mut self, word: &'g Word);
}

impl<'g, F> NewWordHandler<'g> for F
where
    F: FnMut(&'g Word),
{
    fn handle(&mut self, word: &'g Word) {
        self(word);
    }
}
