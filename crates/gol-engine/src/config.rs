//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder-input for constructing a [`World`](crate::World).
//! [`validate()`](WorldConfig::validate) checks structural invariants before
//! any buffer is allocated.

use std::error::Error;
use std::fmt;

use gol_grid::{Grid, GridError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`WorldConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested dimensions are not valid grid dimensions.
    Grid(GridError),
    /// The initial state does not match the configured dimensions.
    DimensionMismatch {
        /// Configured `(width, height)`.
        expected: (u32, u32),
        /// `(width, height)` of the supplied initial state.
        found: (u32, u32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "initial state is {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::DimensionMismatch { .. } => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Configuration for constructing a [`World`](crate::World).
///
/// # Examples
///
/// ```
/// use gol_engine::{World, WorldConfig};
///
/// let config = WorldConfig {
///     width: 16,
///     height: 8,
///     initial_state: None,
/// };
/// let world = World::from_config(config).unwrap();
/// assert_eq!(world.total_cells(), 128);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WorldConfig {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Starting generation. `None` starts with every cell dead.
    pub initial_state: Option<Grid>,
}

impl WorldConfig {
    /// Configuration for an all-dead `width × height` world.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            initial_state: None,
        }
    }

    /// Configuration seeded with `grid`, taking its dimensions.
    pub fn with_initial_state(grid: Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            initial_state: Some(grid),
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must be representable as a grid.
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > Grid::MAX_DIM {
                return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                    name,
                    value: value as u64,
                    max: Grid::MAX_DIM,
                }));
            }
        }
        // 2. A supplied initial state must match.
        if let Some(grid) = &self.initial_state {
            let found = (grid.width(), grid.height());
            if found != (self.width, self.height) {
                return Err(ConfigError::DimensionMismatch {
                    expected: (self.width, self.height),
                    found,
                });
            }
        }
        Ok(())
    }
}
