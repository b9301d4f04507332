//! `mirrorbuf` - Inverted text editing core
//!
//! A text document maintained under an inverted editing discipline: the
//! newest input appears at a fixed anchor point and older content is pushed
//! away from it. Lines are stored newest-first, and the characters inside
//! each stored line are newest-first too. A pair of lossless transforms maps
//! the internal representation to and from normal reading-order text, so the
//! on-disk document is always recoverable exactly.
//!
//! The crate has three cooperating parts:
//!
//! - [`LineBuffer`]: newest-first line storage with the mutation primitives
//!   (prepend a character, backspace, open a line, paste, clear)
//! - [`WrapEngine`]: enforces a maximum line width by cascading overflow
//!   characters down the buffer
//! - [`codec`]: converts between the inverted buffer and normal or raw
//!   serializations for load, save, import, export, and copy
//!
//! [`EditSession`] ties the three together for callers that want the
//! mutate-then-reflow discipline and file persistence handled for them.

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // LineBuffer, WrapConfig etc. read better qualified
#![allow(clippy::missing_errors_doc)] // Error conditions documented on the Error type
#![allow(clippy::must_use_candidate)] // Query methods are obviously queries
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical

pub mod buffer;
pub mod codec;
pub mod error;
pub mod event;
pub mod grapheme;
pub mod session;
pub mod wrap;

// Re-export core types at crate root
pub use buffer::{LineBuffer, Stats};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_change, emit_log, set_change_callback, set_log_callback};
pub use session::EditSession;
pub use wrap::{DEFAULT_LINE_LENGTH, MAX_LINE_LENGTH, MIN_LINE_LENGTH, WrapConfig, WrapEngine};

// Re-export codec entry points
pub use codec::{decode_inverted, decode_normal, encode_inverted, encode_normal};
