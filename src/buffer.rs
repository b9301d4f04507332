//! Newest-first line storage with anchor-point mutation primitives.
//!
//! [`LineBuffer`] holds the document in inverted order: index 0 is the most
//! recently active line, and the first character of a stored line is the most
//! recently typed character of that line (the one nearest the anchor point
//! when un-reversed for display). New input therefore lands at position 0 of
//! the current line, and older content is pushed away.
//!
//! Two invariants hold at all times and are upheld by every operation:
//!
//! - `lines` is never empty; an empty document is a single empty line
//! - the current line index is always in range
//!
//! All operations are total: no input leaves the buffer in an invalid state.

use crate::grapheme;

/// Read-only aggregates for stat reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Total user-perceived characters across all lines.
    pub characters: usize,
    /// Number of lines.
    pub lines: usize,
}

/// Ordered line storage in inverted (newest-first) order.
///
/// Mutation primitives model the inverted editing discipline:
///
/// - [`insert_char`](Self::insert_char) / [`insert_grapheme`](Self::insert_grapheme):
///   prepend at the anchor point of the current line
/// - [`backspace`](Self::backspace): remove the most recently typed character,
///   merging an exhausted line away
/// - [`newline`](Self::newline): open a fresh line at the anchor
/// - [`paste`](Self::paste): splice multi-line text around the current line
/// - [`clear`](Self::clear): reset to the canonical empty document
///
/// Mutators return whether they changed the buffer, so callers can skip
/// refresh work after no-ops. None of them can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    current: usize,
}

impl LineBuffer {
    /// Create an empty buffer: a single empty line at index 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            current: 0,
        }
    }

    /// Create a buffer from already-inverted lines.
    ///
    /// An empty sequence canonicalizes to the single-empty-line form. The
    /// current line is the newest (index 0).
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            return Self::new();
        }
        Self { lines, current: 0 }
    }

    /// Read-only view of the lines, newest first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the line receiving new characters.
    #[must_use]
    pub fn current_line_index(&self) -> usize {
        self.current
    }

    /// The line receiving new characters.
    #[must_use]
    pub fn current_line(&self) -> &str {
        &self.lines[self.current]
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total user-perceived characters across all lines.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|line| grapheme::count(line)).sum()
    }

    /// Whether the buffer holds zero characters.
    ///
    /// A buffer of several empty lines still counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    /// Aggregates for stat reporting.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats {
            characters: self.char_count(),
            lines: self.lines.len(),
        }
    }

    /// Prepend a character at the anchor point of the current line.
    ///
    /// May leave the line over-length; callers follow with a wrap pass.
    pub fn insert_char(&mut self, ch: char) {
        let mut s = [0u8; 4];
        self.insert_grapheme(ch.encode_utf8(&mut s));
    }

    /// Prepend one grapheme cluster at the anchor point of the current line.
    ///
    /// Input methods deliver user-perceived characters that can span several
    /// codepoints; the whole cluster lands at position 0 as one unit.
    pub fn insert_grapheme(&mut self, cluster: &str) {
        self.lines[self.current].insert_str(0, cluster);
    }

    /// Remove the most recently typed character of the current line.
    ///
    /// On an empty current line with an older line after it, the empty line
    /// is merged away and focus moves toward the next-older line. The last
    /// remaining line is never deleted; backspace on a sole empty line is a
    /// no-op. Returns whether the buffer changed.
    pub fn backspace(&mut self) -> bool {
        let first = grapheme::first_len(&self.lines[self.current]);
        if first > 0 {
            self.lines[self.current].drain(..first);
            return true;
        }
        if self.current < self.lines.len() - 1 {
            self.lines.remove(self.current);
            if self.current > 0 {
                self.current -= 1;
            }
            return true;
        }
        false
    }

    /// Open a fresh line at the anchor and make it current.
    pub fn newline(&mut self) {
        self.lines.insert(0, String::new());
        self.current = 0;
    }

    /// Splice pasted text around the current line.
    ///
    /// The first segment is appended to the *tail* of the current line
    /// (pasted text trails the existing partial line in normal order); every
    /// later segment is unshifted at index 0 in turn, with the current index
    /// advancing so the line that absorbed the first segment stays current.
    /// Pasted segments keep their relative order. Text without line breaks is
    /// a single segment: append only, no new lines.
    pub fn paste(&mut self, text: &str) {
        let mut segments = split_line_breaks(text);
        let first = segments.next().unwrap_or_default();
        self.lines[self.current].push_str(first);
        for segment in segments {
            self.lines.insert(0, segment.to_owned());
            self.current += 1;
        }
    }

    /// Reset to the canonical empty document.
    ///
    /// No-op at zero total characters, even when several empty lines exist.
    /// Returns whether the buffer changed.
    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.lines = vec![String::new()];
        self.current = 0;
        true
    }

    /// Mutable access to the line storage for the wrap cascade.
    pub(crate) fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split on line breaks, accepting `\r\n` by stripping the trailing `\r`.
pub(crate) fn split_line_breaks(text: &str) -> impl DoubleEndedIterator<Item = &str> {
    text.split('\n')
        .map(|segment| segment.strip_suffix('\r').unwrap_or(segment))
}
