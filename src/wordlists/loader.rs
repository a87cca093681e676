//! Word list loading utilities
//!
//! Reads dictionaries from files or the embedded constant. Words are taken
//! as written: no case folding or other normalization.

use std::fs;
use std::io;
use std::path::Path;

/// Parse a word list: one word per line
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Order is preserved and duplicates are kept (the graph builder collapses
/// them).
///
/// # Examples
/// ```
/// use wordhop::wordlists::loader::parse_words;
///
/// let words = parse_words("# animals\ncat\n\n  dog  \n");
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordhop::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Convert embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
