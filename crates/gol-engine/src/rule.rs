//! Conway's transition rule (B3/S23).

use gol_core::Cell;

/// Neighbour count that brings a dead cell to life.
pub const BIRTH: u8 = 3;

/// Neighbour counts that keep a live cell alive.
pub const SURVIVAL: [u8; 2] = [2, 3];

/// The state of a cell in the next generation.
///
/// A live cell survives with 2 or 3 live neighbours, a dead cell is born
/// with exactly 3, and every other cell is dead.
pub fn next_state(cell: Cell, alive_neighbours: u8) -> Cell {
    match (cell, alive_neighbours) {
        (Cell::Alive, n) if SURVIVAL.contains(&n) => Cell::Alive,
        (Cell::Dead, BIRTH) => Cell::Alive,
        _ => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_transition_table() {
        for n in 0..=8u8 {
            let alive = next_state(Cell::Alive, n);
            let dead = next_state(Cell::Dead, n);
            assert_eq!(alive.is_alive(), n == 2 || n == 3, "alive cell, {n} neighbours");
            assert_eq!(dead.is_alive(), n == 3, "dead cell, {n} neighbours");
        }
    }
}
