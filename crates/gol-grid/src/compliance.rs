//! Neighbourhood compliance test helpers.
//!
//! These functions verify that neighbourhood resolution satisfies the
//! invariants the stepping engine relies on, for any grid size and
//! topology.

use crate::grid::Grid;
use crate::topology::Topology;

/// Assert that every resolved neighbour is a valid coordinate.
pub fn assert_neighbours_in_bounds(grid: &Grid, topology: Topology) {
    for (x, y) in all_coords(grid) {
        for (nx, ny) in grid.neighbours(x, y, topology) {
            assert!(
                grid.index_of(nx, ny).is_some(),
                "neighbour ({nx}, {ny}) of ({x}, {y}) is out of bounds"
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid, topology: Topology) {
    for (x, y) in all_coords(grid) {
        for nb in grid.neighbours(x, y, topology) {
            let back = grid.neighbours(nb.0, nb.1, topology);
            assert!(
                back.contains(&(x, y)),
                "({x}, {y}) -> {nb:?} but not {nb:?} -> ({x}, {y})"
            );
        }
    }
}

/// Assert the neighbour count matches the topology's contract.
pub fn assert_neighbour_counts(grid: &Grid, topology: Topology) {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    for (x, y) in all_coords(grid) {
        let n = grid.neighbours(x, y, topology).len();
        let expected = match topology {
            Topology::Toroidal => 8,
            Topology::Bounded => {
                let cols = (x + 1).min(w - 1) - (x - 1).max(0) + 1;
                let rows = (y + 1).min(h - 1) - (y - 1).max(0) + 1;
                (cols * rows - 1) as usize
            }
        };
        assert_eq!(n, expected, "neighbour count at ({x}, {y})");
    }
}

/// Run every compliance check.
pub fn run_full_compliance(grid: &Grid, topology: Topology) {
    assert_neighbours_in_bounds(grid, topology);
    assert_neighbours_symmetric(grid, topology);
    assert_neighbour_counts(grid, topology);
}

fn all_coords(grid: &Grid) -> impl Iterator<Item = (i32, i32)> {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
}
