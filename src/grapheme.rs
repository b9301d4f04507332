//! Grapheme cluster helpers.
//!
//! "Character" throughout this crate means a user-perceived character, i.e. a
//! grapheme cluster. Counting, splitting, and reversal all respect cluster
//! boundaries so multi-codepoint clusters (emoji ZWJ sequences, combining
//! marks) never tear when a line is reversed or wrapped.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over grapheme clusters in a string.
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Count grapheme clusters in a string.
#[must_use]
pub fn count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset of the `n`-th grapheme cluster boundary.
///
/// Returns `s.len()` when the string holds `n` or fewer clusters, so the
/// result is always a valid split point.
#[must_use]
pub fn boundary(s: &str, n: usize) -> usize {
    s.grapheme_indices(true)
        .nth(n)
        .map_or(s.len(), |(idx, _)| idx)
}

/// Byte length of the first grapheme cluster, or 0 for an empty string.
#[must_use]
pub fn first_len(s: &str) -> usize {
    s.graphemes(true).next().map_or(0, str::len)
}

/// Reverse a string cluster-by-cluster.
#[must_use]
pub fn reverse(s: &str) -> String {
    s.graphemes(true).rev().collect()
}
