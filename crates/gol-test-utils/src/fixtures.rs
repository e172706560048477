//! Reference patterns for scenario tests.
//!
//! - [`GLIDER_PHASES`] — the four phases of a south-east glider.
//! - [`BLINKER_H`] / [`BLINKER_V`] — the two phases of a blinker.
//! - [`BLOCK`] — the 2×2 still life.

use std::collections::BTreeSet;

use gol_grid::Grid;

use crate::{alive_set, find_on_torus, grid_from_rows};

/// The glider's four phases, each in its own 3×3 bounding box.
///
/// Phase 0 is ALIVE at (1,0),(2,1),(0,2),(1,2),(2,2). After four
/// generations the glider returns to phase 0 shifted by (+1, +1).
pub const GLIDER_PHASES: [[&str; 3]; 4] = [
    [" # ", "  #", "###"],
    ["# #", " ##", " # "],
    ["  #", "# #", " ##"],
    ["#  ", " ##", "## "],
];

/// Horizontal blinker phase.
pub const BLINKER_H: [&str; 3] = ["   ", "###", "   "];

/// Vertical blinker phase.
pub const BLINKER_V: [&str; 3] = [" # ", " # ", " # "];

/// 2×2 block.
pub const BLOCK: [&str; 2] = ["##", "##"];

fn phase_cells(phase: usize) -> BTreeSet<(i32, i32)> {
    alive_set(&grid_from_rows(&GLIDER_PHASES[phase]))
}

/// Which glider phase `grid` holds, matched anywhere on the torus.
///
/// Returns `(phase, (dx, dy))` where `(dx, dy)` is the translation of the
/// phase's bounding box, or `None` if the grid holds no glider phase.
pub fn glider_phase_on_torus(grid: &Grid) -> Option<(usize, (i32, i32))> {
    (0..GLIDER_PHASES.len())
        .find_map(|phase| find_on_torus(grid, &phase_cells(phase)).map(|offset| (phase, offset)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    #[test]
    fn phases_have_five_cells() {
        for phase in 0..4 {
            assert_eq!(phase_cells(phase).len(), 5);
            assert_eq!(normalize(&phase_cells(phase)), phase_cells(phase));
        }
    }

    #[test]
    fn phase_zero_matches_canonical_coordinates() {
        let expected: BTreeSet<(i32, i32)> =
            [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)].into_iter().collect();
        assert_eq!(phase_cells(0), expected);
    }

    #[test]
    fn finds_translated_phase() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.merge(&grid_from_rows(&GLIDER_PHASES[2]), 3, 2, true);
        assert_eq!(glider_phase_on_torus(&grid), Some((2, (3, 2))));
    }
}
