//! Candidate enumeration for a single word
//!
//! Tries every single-letter delete, replace and insert and keeps the ones
//! that land on a dictionary word.

use crate::core::{Alphabet, Change, Word, WordId};
use rustc_hash::FxHashMap;

/// Word value → id lookup over the deduplicated input
pub(super) type WordIndex<'a> = FxHashMap<&'a str, WordId>;

/// Build the node for `value` with every valid change attached
///
/// Option lists come out in alphabet order because candidates are tried in
/// that order.
pub(super) fn expand(id: WordId, value: &str, index: &WordIndex<'_>, alphabet: &Alphabet) -> Word {
    let chars: Vec<char> = value.chars().collect();
    let n = chars.len();
    let mut word = Word::bare(id, value);
    let mut candidate = String::with_capacity(value.len() + 4);

    // A one-letter word would delete down to the empty string
    if n > 1 {
        for i in 0..n {
            splice(&mut candidate, &chars, i, i + 1, None);
            if let Some(&result) = index.get(candidate.as_str()) {
                word.letter_mut(i).set_delete(Change::delete(result));
            }
        }
    }

    // Allow: index needed for chars[i] and letter_mut(i)
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        for &c in alphabet.chars() {
            if c == chars[i] {
                continue;
            }
            splice(&mut candidate, &chars, i, i + 1, Some(c));
            if let Some(&result) = index.get(candidate.as_str()) {
                word.letter_mut(i).push_replacement(Change::replace(result, c));
            }
        }
    }

    for j in 0..=n {
        for &c in alphabet.chars() {
            splice(&mut candidate, &chars, j, j, Some(c));
            if let Some(&result) = index.get(candidate.as_str()) {
                word.position_mut(j).push_insert(Change::insert(result, c));
            }
        }
    }

    word
}

/// Write `chars[..start] + fill + chars[end..]` into `out`
fn splice(out: &mut String, chars: &[char], start: usize, end: usize, fill: Option<char>) {
    out.clear();
    out.extend(&chars[..start]);
    out.extend(fill);
    out.extend(&chars[end..]);
}
