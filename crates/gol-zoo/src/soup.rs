//! Seeded random soups.
//!
//! Uses a `ChaCha8` RNG seeded from the caller's `seed`, so the same
//! `(width, height, density, seed)` always yields the same grid.

use gol_core::Cell;
use gol_grid::{Grid, GridError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A `width × height` grid where each cell is alive with probability
/// `density`.
///
/// `density` is clamped to `[0, 1]`; NaN counts as `0`. Cells are drawn in
/// row-major order, one RNG sample per cell.
///
/// Returns `Err(GridError::DimensionTooLarge)` for dimensions
/// [`Grid::new`] rejects.
pub fn soup(width: u32, height: u32, density: f64, seed: u64) -> Result<Grid, GridError> {
    let mut grid = Grid::new(width, height)?;
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for i in 0..grid.total_cells() {
        let p: f64 = rng.gen();
        *grid.cell_at_mut(i) = Cell::from(p < density);
    }
    Ok(grid)
}
