//! Benchmark profiles and utilities for the gol engine.
//!
//! Provides pre-built [`WorldConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 100x100 random soup (10K cells)
//! - [`stress_profile`]: 316x316 random soup (~100K cells)
//! - [`glider_field`]: a grid tiled with gliders, for steady-state workloads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gol_engine::WorldConfig;
use gol_grid::{Grid, GridError};

/// Live-cell probability used by the soup profiles.
pub const SOUP_DENSITY: f64 = 0.35;

/// Build a reference benchmark profile: 100x100 soup (10K cells).
pub fn reference_profile(seed: u64) -> Result<WorldConfig, GridError> {
    soup_profile(100, seed)
}

/// Build a stress benchmark profile: 316x316 soup (~100K cells).
///
/// Same density as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> Result<WorldConfig, GridError> {
    soup_profile(316, seed)
}

fn soup_profile(size: u32, seed: u64) -> Result<WorldConfig, GridError> {
    let grid = gol_zoo::soup(size, size, SOUP_DENSITY, seed)?;
    Ok(WorldConfig::with_initial_state(grid))
}

/// A `size × size` grid with a glider in every 5x5 tile.
///
/// On a torus whose side is a multiple of 5 the gliders never collide, so
/// the population stays constant and every step does the same work.
pub fn glider_field(size: u32) -> Result<Grid, GridError> {
    let mut grid = Grid::square(size)?;
    let glider = gol_zoo::glider();
    for y in (0..size as i32).step_by(5) {
        for x in (0..size as i32).step_by(5) {
            grid.merge(&glider, x, y, true);
        }
    }
    Ok(grid)
}
