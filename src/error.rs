//! Error types for mirrorbuf.

use std::fmt;
use std::io;

/// Result type alias for mirrorbuf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for mirrorbuf operations.
///
/// Buffer mutation, reflow, and codec operations are total and never fail;
/// errors arise only from session-level file persistence.
#[derive(Debug)]
pub enum Error {
    /// I/O error from reading or writing a document file.
    Io(io::Error),
    /// Save was requested on a session with no associated file path.
    NoPath,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::NoPath => write!(f, "session has no associated file path"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NoPath => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
