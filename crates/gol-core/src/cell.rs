//! The binary cell state.

use std::fmt;

use crate::error::CellError;

/// A single cell of a Game-of-Life grid.
///
/// Exactly two states exist. Because the type is an enum, an invalid state
/// can never be stored in a grid; conversions from external symbols go
/// through [`Cell::from_char`] / [`Cell::from_byte`], which reject anything
/// other than the two recognized symbols.
///
/// # Examples
///
/// ```
/// use gol_core::Cell;
///
/// assert_eq!(Cell::from_char('#').unwrap(), Cell::Alive);
/// assert_eq!(Cell::Dead.as_char(), ' ');
/// assert!(Cell::from_char('x').is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// An empty cell, rendered as `' '`.
    #[default]
    Dead = b' ',
    /// A live cell, rendered as `'#'`.
    Alive = b'#',
}

impl Cell {
    /// Symbol used for [`Cell::Dead`] in text formats.
    pub const DEAD_CHAR: char = ' ';
    /// Symbol used for [`Cell::Alive`] in text formats.
    pub const ALIVE_CHAR: char = '#';

    /// Whether the cell is alive.
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Whether the cell is dead.
    pub fn is_dead(self) -> bool {
        self == Cell::Dead
    }

    /// The text symbol for this state.
    pub fn as_char(self) -> char {
        match self {
            Cell::Dead => Self::DEAD_CHAR,
            Cell::Alive => Self::ALIVE_CHAR,
        }
    }

    /// The raw byte for this state (the ASCII code of its symbol).
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parse a text symbol.
    pub fn from_char(symbol: char) -> Result<Self, CellError> {
        match symbol {
            Self::DEAD_CHAR => Ok(Cell::Dead),
            Self::ALIVE_CHAR => Ok(Cell::Alive),
            _ => Err(CellError::InvalidSymbol { symbol }),
        }
    }

    /// Parse a raw byte.
    pub fn from_byte(byte: u8) -> Result<Self, CellError> {
        match byte {
            b' ' => Ok(Cell::Dead),
            b'#' => Ok(Cell::Alive),
            _ => Err(CellError::InvalidByte { byte }),
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

impl TryFrom<char> for Cell {
    type Error = CellError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Cell::from_char(symbol)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn symbols_round_trip() {
        for cell in [Cell::Dead, Cell::Alive] {
            assert_eq!(Cell::from_char(cell.as_char()).unwrap(), cell);
            assert_eq!(Cell::from_byte(cell.as_byte()).unwrap(), cell);
        }
    }

    #[test]
    fn repr_matches_symbol() {
        assert_eq!(Cell::Dead as u8, b' ');
        assert_eq!(Cell::Alive as u8, b'#');
    }

    #[test]
    fn bool_conversions() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(bool::from(Cell::Alive));
        assert!(!bool::from(Cell::Dead));
    }

    #[test]
    fn rejects_newline_symbol() {
        assert_eq!(
            Cell::from_char('\n'),
            Err(CellError::InvalidSymbol { symbol: '\n' })
        );
    }

    proptest! {
        #[test]
        fn only_two_symbols_are_accepted(c in any::<char>()) {
            let parsed = Cell::try_from(c);
            prop_assert_eq!(parsed.is_ok(), c == ' ' || c == '#');
        }

        #[test]
        fn only_two_bytes_are_accepted(b in any::<u8>()) {
            prop_assert_eq!(Cell::from_byte(b).is_ok(), b == b' ' || b == b'#');
        }
    }
}
