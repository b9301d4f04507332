//! Line width enforcement by cascading reflow.
//!
//! [`WrapEngine`] keeps every line of a [`LineBuffer`] within a configured
//! width. Overflow is split off at the width boundary and pushed into the
//! next (older) line, which may itself overflow: the excess dominoes down the
//! buffer until a line fits or a new final line absorbs the remainder.
//!
//! Because position 0 of a stored line is the newest character, the split
//! remainder is the *oldest* excess of its line; prepending it to the next
//! line keeps it adjacent to the content it was typed after, preserving its
//! internal order. The cascade moves each character at most once per pass, so
//! a pass is O(characters moved).

use crate::buffer::LineBuffer;
use crate::grapheme;

/// Smallest permitted line width.
pub const MIN_LINE_LENGTH: usize = 20;
/// Largest permitted line width.
pub const MAX_LINE_LENGTH: usize = 150;
/// Width used when no measurement is available.
pub const DEFAULT_LINE_LENGTH: usize = 100;

/// Wrap width configuration.
///
/// The width is measured in user-perceived characters and clamped to
/// `[MIN_LINE_LENGTH, MAX_LINE_LENGTH]` on construction; out-of-range
/// requests are never rejected. Once an engine holds a config it stays fixed
/// until explicitly reset - recomputation on resize is the caller's decision,
/// never automatic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrapConfig {
    max_line_length: usize,
}

impl WrapConfig {
    /// Create a config, clamping the width into the permitted range.
    #[must_use]
    pub fn new(max_line_length: usize) -> Self {
        Self {
            max_line_length: max_line_length.clamp(MIN_LINE_LENGTH, MAX_LINE_LENGTH),
        }
    }

    /// Derive a width from externally measured display columns.
    ///
    /// The available column count is capped by a configured ceiling (itself
    /// clamped to the permitted range) and floored at [`MIN_LINE_LENGTH`].
    /// This is the lazy one-time computation the display layer performs; the
    /// core never measures any rendering surface itself.
    #[must_use]
    pub fn from_available(columns: usize, ceiling: usize) -> Self {
        let ceiling = ceiling.clamp(MIN_LINE_LENGTH, MAX_LINE_LENGTH);
        Self {
            max_line_length: columns.clamp(MIN_LINE_LENGTH, ceiling),
        }
    }

    /// The enforced maximum line width.
    #[must_use]
    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_LENGTH)
    }
}

/// Cascading reflow over a [`LineBuffer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WrapEngine {
    config: WrapConfig,
}

impl WrapEngine {
    /// Create an engine with the given width config.
    #[must_use]
    pub fn new(config: WrapConfig) -> Self {
        Self { config }
    }

    /// The active width config.
    #[must_use]
    pub fn config(&self) -> WrapConfig {
        self.config
    }

    /// Explicitly replace the width config.
    ///
    /// The one sanctioned recomputation path (e.g. after a resize). Callers
    /// that need the invariant restored under the new width follow with
    /// [`reflow_all`](Self::reflow_all).
    pub fn reset(&mut self, config: WrapConfig) {
        self.config = config;
    }

    /// Run the cascade from the buffer's current line.
    ///
    /// The pass stops at the first line that fits: overflow from line *n* can
    /// only ever reach line *n + 1* and below, so once no overflow was
    /// carried, nothing further down can have grown. Returns whether any line
    /// changed.
    pub fn reflow(&self, buffer: &mut LineBuffer) -> bool {
        let start = buffer.current_line_index();
        self.reflow_from(buffer, start)
    }

    /// Run the cascade from an explicit start line.
    pub fn reflow_from(&self, buffer: &mut LineBuffer, start: usize) -> bool {
        self.run(buffer, start, true)
    }

    /// Enforce the width on every line.
    ///
    /// Same split step as the cascade but without the first-fit
    /// short-circuit; used after load and import, where any line may be over
    /// width. Returns whether any line changed.
    pub fn reflow_all(&self, buffer: &mut LineBuffer) -> bool {
        self.run(buffer, 0, false)
    }

    fn run(&self, buffer: &mut LineBuffer, start: usize, stop_at_first_fit: bool) -> bool {
        let max = self.config.max_line_length;
        let lines = buffer.lines_mut();
        let mut changed = false;
        let mut index = start;

        while index < lines.len() {
            if grapheme::count(&lines[index]) <= max {
                if stop_at_first_fit {
                    break;
                }
                index += 1;
                continue;
            }

            // Keep the newest `max` characters; the remainder is the oldest
            // excess and becomes the newest prefix of the next (older) line.
            let split = grapheme::boundary(&lines[index], max);
            let overflow = lines[index].split_off(split);
            if index + 1 < lines.len() {
                lines[index + 1].insert_str(0, &overflow);
            } else {
                lines.push(overflow);
            }

            changed = true;
            index += 1;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(width: usize) -> WrapEngine {
        WrapEngine::new(WrapConfig::new(width))
    }

    #[test]
    fn test_config_clamps() {
        assert_eq!(WrapConfig::new(5).max_line_length(), MIN_LINE_LENGTH);
        assert_eq!(WrapConfig::new(500).max_line_length(), MAX_LINE_LENGTH);
        assert_eq!(WrapConfig::new(80).max_line_length(), 80);
    }

    #[test]
    fn test_config_from_available() {
        // Measured columns within range pass through
        assert_eq!(WrapConfig::from_available(72, 100).max_line_length(), 72);
        // Narrow surface floors at the minimum
        assert_eq!(
            WrapConfig::from_available(4, 100).max_line_length(),
            MIN_LINE_LENGTH
        );
        // Wide surface caps at the configured ceiling
        assert_eq!(WrapConfig::from_available(300, 120).max_line_length(), 120);
        // Ceiling itself is clamped
        assert_eq!(
            WrapConfig::from_available(300, 9000).max_line_length(),
            MAX_LINE_LENGTH
        );
    }

    #[test]
    fn test_no_overflow_no_change() {
        let mut buf = LineBuffer::from_lines(vec!["short".to_owned()]);
        assert!(!engine(20).reflow(&mut buf));
        assert_eq!(buf.lines(), ["short".to_string()]);
    }

    #[test]
    fn test_overflow_creates_new_line() {
        // Width floor is 20, so use a 26-character line
        let mut buf = LineBuffer::from_lines(vec!["abcdefghijklmnopqrstuvwxyz".to_owned()]);
        assert!(engine(20).reflow(&mut buf));
        assert_eq!(
            buf.lines(),
            ["abcdefghijklmnopqrst".to_string(), "uvwxyz".to_string()]
        );
    }

    #[test]
    fn test_overflow_prepends_to_existing_next_line() {
        let mut buf = LineBuffer::from_lines(vec![
            "abcdefghijklmnopqrstuvwxyz".to_owned(),
            "OLD".to_owned(),
        ]);
        engine(20).reflow(&mut buf);
        assert_eq!(
            buf.lines(),
            ["abcdefghijklmnopqrst".to_string(), "uvwxyzOLD".to_string()]
        );
    }

    #[test]
    fn test_cascade_dominoes() {
        // Both lines start exactly at the limit; overflow into the second
        // pushes it over and the excess dominoes to a fresh third line
        let first = "a".repeat(25);
        let second = "b".repeat(20);
        let mut buf = LineBuffer::from_lines(vec![first, second]);
        engine(20).reflow(&mut buf);
        assert_eq!(
            buf.lines(),
            [
                "a".repeat(20),
                format!("{}{}", "a".repeat(5), "b".repeat(15)),
                "b".repeat(5),
            ]
        );
    }

    #[test]
    fn test_cascade_stops_at_first_fit() {
        // A later over-length line is out of the cascade's reach when no
        // overflow is carried into it
        let long = "x".repeat(30);
        let mut buf = LineBuffer::from_lines(vec!["ok".to_owned(), long.clone()]);
        assert!(!engine(20).reflow(&mut buf));
        assert_eq!(buf.lines()[1], long);
    }

    #[test]
    fn test_reflow_all_reaches_every_line() {
        let long = "x".repeat(30);
        let mut buf = LineBuffer::from_lines(vec!["ok".to_owned(), long]);
        assert!(engine(20).reflow_all(&mut buf));
        assert_eq!(
            buf.lines(),
            ["ok".to_string(), "x".repeat(20), "x".repeat(10)]
        );
    }

    #[test]
    fn test_reflow_starts_at_current_line() {
        // Lines above the current index are left alone by the automatic pass
        let mut buf = LineBuffer::from_lines(vec![String::new(), "seed".to_owned()]);
        buf.paste(&format!("\n{}", "y".repeat(30)));
        assert_eq!(buf.current_line_index(), 1);
        // The over-length pasted line sits at index 0, above the current line
        let engine = engine(20);
        assert!(!engine.reflow(&mut buf));
        assert_eq!(grapheme::count(&buf.lines()[0]), 30);
        // A full pass picks it up
        assert!(engine.reflow_all(&mut buf));
        assert!(buf.lines().iter().all(|l| grapheme::count(l) <= 20));
    }

    #[test]
    fn test_reflow_idempotent() {
        let mut buf = LineBuffer::from_lines(vec!["m".repeat(73)]);
        let engine = engine(20);
        assert!(engine.reflow_all(&mut buf));
        let settled = buf.clone();
        assert!(!engine.reflow_all(&mut buf));
        assert_eq!(buf, settled);
    }

    #[test]
    fn test_split_respects_cluster_boundary() {
        // 19 ASCII then a family emoji: the multi-codepoint cluster is the
        // 20th character and stays whole on the kept side of the split
        let line = format!("{}👨‍👩‍👧tail", "a".repeat(19));
        let mut buf = LineBuffer::from_lines(vec![line]);
        engine(20).reflow(&mut buf);
        assert_eq!(buf.lines()[0], format!("{}👨‍👩‍👧", "a".repeat(19)));
        assert_eq!(buf.lines()[1], "tail");
    }

    #[test]
    fn test_conserves_characters() {
        let first = "q".repeat(95);
        let second = "r".repeat(40);
        let mut buf = LineBuffer::from_lines(vec![first, second]);
        let before = buf.char_count();
        engine(20).reflow_all(&mut buf);
        assert_eq!(buf.char_count(), before);
    }

    #[test]
    fn test_reset_changes_width() {
        let mut engine = WrapEngine::new(WrapConfig::new(100));
        engine.reset(WrapConfig::new(40));
        assert_eq!(engine.config().max_line_length(), 40);
    }
}
