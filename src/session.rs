//! Editing session: buffer, wrap engine, and persistence glue.
//!
//! [`EditSession`] is the surface the input dispatcher talks to. It owns a
//! [`LineBuffer`] and a [`WrapEngine`], applies the mutate-then-reflow
//! discipline (every growing mutation is followed by a cascade pass before
//! the next event is processed), tracks the associated file and a dirty
//! flag, and drives load/save/import/export through the codec.
//!
//! The session holds no rendering state. Observers learn about applied
//! mutations through the change callback and pull [`stats`](EditSession::stats)
//! when they refresh; an external persistence layer watches
//! [`is_dirty`](EditSession::is_dirty) to decide when to auto-save.

use std::fs;
use std::path::{Path, PathBuf};

use crate::buffer::{LineBuffer, Stats};
use crate::codec;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_change, emit_log};
use crate::wrap::{WrapConfig, WrapEngine};

/// A single-document editing session over an inverted buffer.
///
/// All operations run to completion synchronously; one logical caller
/// serializes access. Buffer mutation and reflow never fail - errors arise
/// only from the file persistence methods.
#[derive(Debug)]
pub struct EditSession {
    buffer: LineBuffer,
    engine: WrapEngine,
    path: Option<PathBuf>,
    dirty: bool,
}

impl EditSession {
    /// Create a session over an empty document.
    #[must_use]
    pub fn new(config: WrapConfig) -> Self {
        Self {
            buffer: LineBuffer::new(),
            engine: WrapEngine::new(config),
            path: None,
            dirty: false,
        }
    }

    /// Create a session from normal reading-order text.
    ///
    /// The text is decoded into inverted form and reflowed so the width
    /// invariant holds from the start.
    #[must_use]
    pub fn with_text(text: &str, config: WrapConfig) -> Self {
        let engine = WrapEngine::new(config);
        let mut buffer = codec::decode_normal(text);
        engine.reflow_all(&mut buffer);
        Self {
            buffer,
            engine,
            path: None,
            dirty: false,
        }
    }

    /// Open a document file (normal reading-order serialization).
    pub fn open(path: impl AsRef<Path>, config: WrapConfig) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut session = Self::with_text(&text, config);
        session.path = Some(path.to_path_buf());
        emit_log(LogLevel::Info, &format!("opened {}", path.display()));
        emit_change("load", &session.stats_payload());
        Ok(session)
    }

    /// Read-only view of the underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// The associated file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the session holds unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Aggregates for stat reporting.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.buffer.stats()
    }

    /// The active width config.
    #[must_use]
    pub fn wrap_config(&self) -> WrapConfig {
        self.engine.config()
    }

    /// Prepend a character at the anchor, then run the cascade.
    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert_char(ch);
        self.engine.reflow(&mut self.buffer);
        self.mutated("edit");
    }

    /// Prepend one grapheme cluster at the anchor, then run the cascade.
    pub fn insert_grapheme(&mut self, cluster: &str) {
        self.buffer.insert_grapheme(cluster);
        self.engine.reflow(&mut self.buffer);
        self.mutated("edit");
    }

    /// Remove the most recently typed character.
    pub fn backspace(&mut self) {
        if self.buffer.backspace() {
            self.mutated("edit");
        }
    }

    /// Open a fresh line at the anchor.
    pub fn newline(&mut self) {
        self.buffer.newline();
        self.mutated("edit");
    }

    /// Splice pasted text around the current line, then run the cascade.
    pub fn paste(&mut self, text: &str) {
        self.buffer.paste(text);
        self.engine.reflow(&mut self.buffer);
        self.mutated("edit");
    }

    /// Reset to the canonical empty document.
    pub fn clear(&mut self) {
        if self.buffer.clear() {
            self.mutated("clear");
        }
    }

    /// Explicitly recompute the wrap width (e.g. after a resize) and restore
    /// the invariant under the new width.
    pub fn set_width(&mut self, config: WrapConfig) {
        self.engine.reset(config);
        if self.engine.reflow_all(&mut self.buffer) {
            self.mutated("reflow");
        }
    }

    /// Save to the associated file in normal reading order.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.path.clone() else {
            return Err(Error::NoPath);
        };
        self.write_to(&path)
    }

    /// Save to a new file and associate the session with it.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        self.write_to(&path)?;
        self.path = Some(path);
        Ok(())
    }

    /// Replace the document with normal reading-order text.
    pub fn import_normal(&mut self, text: &str) {
        self.buffer = codec::decode_normal(text);
        self.engine.reflow_all(&mut self.buffer);
        self.mutated("import");
    }

    /// Replace the document with raw inverted text, line order verbatim.
    pub fn import_inverted(&mut self, text: &str) {
        self.buffer = codec::decode_inverted(text);
        self.engine.reflow_all(&mut self.buffer);
        self.mutated("import");
    }

    /// The document in normal reading order (save/copy payload).
    #[must_use]
    pub fn export_normal(&self) -> String {
        codec::encode_normal(&self.buffer)
    }

    /// The document in raw inverted order (raw export payload).
    #[must_use]
    pub fn export_inverted(&self) -> String {
        codec::encode_inverted(&self.buffer)
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        fs::write(path, codec::encode_normal(&self.buffer))?;
        self.dirty = false;
        emit_log(LogLevel::Info, &format!("saved {}", path.display()));
        emit_change("save", &self.stats_payload());
        Ok(())
    }

    fn mutated(&mut self, kind: &str) {
        self.dirty = true;
        emit_change(kind, &self.stats_payload());
    }

    fn stats_payload(&self) -> String {
        let stats = self.buffer.stats();
        format!("chars={} lines={}", stats.characters, stats.lines)
    }
}
