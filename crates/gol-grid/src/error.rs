//! Error types for grid construction and access.

use std::fmt;

/// Errors arising from grid construction, access, or geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A single-cell coordinate is outside the grid.
    CoordOutOfBounds {
        /// Column of the offending coordinate.
        x: i32,
        /// Row of the offending coordinate.
        y: i32,
        /// Grid width at the time of access.
        width: u32,
        /// Grid height at the time of access.
        height: u32,
    },
    /// A crop rectangle extends outside the source grid.
    RegionOutOfBounds {
        /// Requested rectangle as `[x0, y0, x1, y1]` (half-open).
        rect: [i32; 4],
        /// Source grid width.
        width: u32,
        /// Source grid height.
        height: u32,
    },
    /// A crop rectangle is inverted (`x1 < x0` or `y1 < y0`).
    InvalidRegion {
        /// What went wrong.
        reason: String,
    },
    /// A dimension exceeds [`Grid::MAX_DIM`](crate::Grid::MAX_DIM).
    DimensionTooLarge {
        /// Which dimension ("width" or "height").
        name: &'static str,
        /// The rejected value.
        value: u64,
        /// The maximum allowed value.
        max: u32,
    },
    /// A cell buffer does not hold `width * height` cells.
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate ({x}, {y}) out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::RegionOutOfBounds {
                rect: [x0, y0, x1, y1],
                width,
                height,
            } => {
                write!(
                    f,
                    "region [{x0}, {x1}) x [{y0}, {y1}) extends outside [0, {width}) x [0, {height})"
                )
            }
            Self::InvalidRegion { reason } => write!(f, "invalid region: {reason}"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
