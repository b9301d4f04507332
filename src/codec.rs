//! Lossless transforms between inverted storage and serialized text.
//!
//! Two serializations exist, both plain text with no header or framing:
//!
//! - **Normal order** - conventional reading order, lines oldest-first and
//!   characters left to right. Used for opening existing documents, saving
//!   back to them, reading-order export, and copy.
//! - **Inverted order** - the internal representation verbatim, lines joined
//!   newest-first with no per-line character reversal. Used for raw
//!   export and for plain import, where the file's first line becomes the
//!   newest line as-is.
//!
//! Decoding empty input yields the canonical single-empty-line buffer, and
//! encoding that buffer yields the empty string, so
//! `encode_normal(decode_normal(text)) == text` holds for any `\n`-separated
//! document (CRLF input is normalized on the way in). A buffer of several
//! empty lines encodes to bare line breaks, not to the empty string.

use crate::buffer::{LineBuffer, split_line_breaks};
use crate::grapheme;

/// Decode normal reading-order text into an inverted buffer.
///
/// Line order is reversed so the last line read becomes the newest (index
/// 0), and the characters within each line are reversed so each line's first
/// stored character is its newest.
#[must_use]
pub fn decode_normal(text: &str) -> LineBuffer {
    let lines = split_line_breaks(text)
        .map(grapheme::reverse)
        .rev()
        .collect();
    LineBuffer::from_lines(lines)
}

/// Encode an inverted buffer as normal reading-order text.
///
/// Exact inverse of [`decode_normal`]: each line's characters are reversed
/// back, the line order flips to oldest-first, and lines join with `\n`.
#[must_use]
pub fn encode_normal(buffer: &LineBuffer) -> String {
    let lines: Vec<String> = buffer
        .lines()
        .iter()
        .rev()
        .map(|line| grapheme::reverse(line))
        .collect();
    lines.join("\n")
}

/// Decode raw inverted text, taking the line order verbatim.
///
/// The file's first line becomes the newest line; no per-line character
/// reversal is applied.
#[must_use]
pub fn decode_inverted(text: &str) -> LineBuffer {
    LineBuffer::from_lines(split_line_breaks(text).map(str::to_owned).collect())
}

/// Encode an inverted buffer verbatim, newest line first.
#[must_use]
pub fn encode_inverted(buffer: &LineBuffer) -> String {
    buffer.lines().join("\n")
}
