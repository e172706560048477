//! Test utilities and fixtures for gol development.
//!
//! Provides compact grid builders ([`grid_from_rows`]), population helpers
//! ([`alive_set`]), torus-aware pattern matching for oscillators and
//! spaceships ([`find_on_torus`]), and scratch file paths ([`temp_path`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use gol_core::Cell;
use gol_grid::Grid;

pub mod fixtures;

pub use fixtures::{glider_phase_on_torus, BLINKER_H, BLINKER_V, BLOCK, GLIDER_PHASES};

/// Build a grid from text rows, `'#'` for live cells and anything else dead.
///
/// All rows must have the same length. Panics on ragged input.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let mut grid = Grid::new(width, height).unwrap();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.chars().count() as u32,
            width,
            "row {y} has a different width"
        );
        for (x, ch) in row.chars().enumerate() {
            if ch == '#' {
                grid.set(x as i32, y as i32, Cell::Alive).unwrap();
            }
        }
    }
    grid
}

/// Render a grid back into rows (inverse of [`grid_from_rows`]).
pub fn grid_to_rows(grid: &Grid) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().map(|c| c.as_char()).collect())
        .collect()
}

/// Place `alive` coordinates into a fresh `width × height` grid.
pub fn grid_with_alive(width: u32, height: u32, alive: &[(i32, i32)]) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    for &(x, y) in alive {
        grid.set(x, y, Cell::Alive).unwrap();
    }
    grid
}

/// Coordinates of every live cell.
pub fn alive_set(grid: &Grid) -> BTreeSet<(i32, i32)> {
    grid.iter_alive().collect()
}

/// Translate a pattern so its bounding box starts at `(0, 0)`.
pub fn normalize(cells: &BTreeSet<(i32, i32)>) -> BTreeSet<(i32, i32)> {
    let min_x = cells.iter().map(|c| c.0).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.1).min().unwrap_or(0);
    cells.iter().map(|&(x, y)| (x - min_x, y - min_y)).collect()
}

/// Find a translation `(dx, dy)` such that the live cells of `grid` are
/// exactly `pattern` shifted by `(dx, dy)` modulo the grid dimensions.
pub fn find_on_torus(grid: &Grid, pattern: &BTreeSet<(i32, i32)>) -> Option<(i32, i32)> {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    if w == 0 || h == 0 {
        return None;
    }
    let alive = alive_set(grid);
    if alive.len() != pattern.len() {
        return None;
    }
    for dy in 0..h {
        for dx in 0..w {
            let shifted: BTreeSet<(i32, i32)> = pattern
                .iter()
                .map(|&(x, y)| ((x + dx).rem_euclid(w), (y + dy).rem_euclid(h)))
                .collect();
            if shifted == alive {
                return Some((dx, dy));
            }
        }
    }
    None
}

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique path in the system temp directory; the file is not created.
pub fn temp_path(name: &str) -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("gol-test-{}-{n}-{name}", std::process::id()))
}
