//! Error types for the file codecs.

use std::fmt;
use std::io;

use gol_grid::GridError;

/// Errors that can occur while encoding or decoding a grid.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The input ended before the declared amount of data was read.
    Truncated {
        /// Bytes the header declared.
        expected: usize,
        /// Bytes actually available.
        found: usize,
    },
    /// A width or height is negative or cannot be represented.
    InvalidDimension {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The offending value.
        value: i64,
    },
    /// Text input is not in the expected layout.
    MalformedContent {
        /// 1-based line number where the problem was found.
        line: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The decoded dimensions were rejected by the grid.
    Grid(GridError),
}

impl CodecError {
    pub(crate) fn malformed(line: usize, detail: impl Into<String>) -> Self {
        Self::MalformedContent {
            line,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated { expected, found } => {
                write!(f, "truncated body: expected {expected} bytes, found {found}")
            }
            Self::InvalidDimension { name, value } => {
                write!(f, "invalid {name} {value}")
            }
            Self::MalformedContent { line, detail } => {
                write!(f, "malformed content at line {line}: {detail}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for CodecError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
