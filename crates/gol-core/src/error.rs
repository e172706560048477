//! Error types for cell conversions.

use std::error::Error;
use std::fmt;

/// Errors from converting an external representation into a [`Cell`](crate::Cell).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellError {
    /// A character is neither the ALIVE (`'#'`) nor the DEAD (`' '`) symbol.
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },
    /// A raw byte is neither the ALIVE nor the DEAD symbol.
    InvalidByte {
        /// The offending byte.
        byte: u8,
    },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { symbol } => {
                write!(f, "invalid cell symbol {symbol:?} (expected ' ' or '#')")
            }
            Self::InvalidByte { byte } => {
                write!(f, "invalid cell byte {byte:#04x} (expected 0x20 or 0x23)")
            }
        }
    }
}

impl Error for CellError {}
