//! Named patterns, each in its own bounding box.

use gol_core::Cell;
use gol_grid::Grid;

/// Names accepted by [`by_name`].
pub const PATTERN_NAMES: [&str; 3] = ["glider", "r-pentomino", "lwss"];

fn draw(width: u16, height: u16, alive: &[(i32, i32)]) -> Grid {
    let mut grid = Grid::small(width, height);
    for &xy in alive {
        grid[xy] = Cell::Alive;
    }
    grid
}

/// A 3×3 glider heading south-east.
///
/// ```text
/// +---+
/// | # |
/// |  #|
/// |###|
/// +---+
/// ```
pub fn glider() -> Grid {
    draw(3, 3, &[(0, 2), (1, 2), (2, 2), (2, 1), (1, 0)])
}

/// A 3×3 R-pentomino.
///
/// ```text
/// +---+
/// | ##|
/// |## |
/// | # |
/// +---+
/// ```
pub fn r_pentomino() -> Grid {
    draw(3, 3, &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
}

/// A 5×4 light-weight spaceship heading west.
///
/// ```text
/// +-----+
/// | #  #|
/// |#    |
/// |#   #|
/// |#### |
/// +-----+
/// ```
pub fn light_weight_spaceship() -> Grid {
    draw(
        5,
        4,
        &[
            (1, 0),
            (4, 0),
            (0, 1),
            (0, 2),
            (4, 2),
            (0, 3),
            (1, 3),
            (2, 3),
            (3, 3),
        ],
    )
}

/// Look up a pattern by one of [`PATTERN_NAMES`].
pub fn by_name(name: &str) -> Option<Grid> {
    match name {
        "glider" => Some(glider()),
        "r-pentomino" => Some(r_pentomino()),
        "lwss" => Some(light_weight_spaceship()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gol_test_utils::{grid_from_rows, GLIDER_PHASES};

    // ── Shapes ──────────────────────────────────────────────────

    #[test]
    fn glider_is_phase_zero() {
        assert_eq!(glider(), grid_from_rows(&GLIDER_PHASES[0]));
    }

    #[test]
    fn r_pentomino_shape() {
        assert_eq!(r_pentomino(), grid_from_rows(&[" ##", "## ", " # "]));
    }

    #[test]
    fn light_weight_spaceship_shape() {
        assert_eq!(
            light_weight_spaceship(),
            grid_from_rows(&[" #  #", "#    ", "#   #", "#### "])
        );
    }

    #[test]
    fn display_matches_documented_drawing() {
        assert_eq!(glider().to_string(), "+---+\n| # |\n|  #|\n|###|\n+---+");
    }

    // ── Lookup ──────────────────────────────────────────────────

    #[test]
    fn every_listed_name_resolves() {
        for name in PATTERN_NAMES {
            assert!(by_name(name).is_some(), "{name}");
        }
        assert_eq!(by_name("lwss"), Some(light_weight_spaceship()));
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(by_name("gosper-gun").is_none());
    }
}
