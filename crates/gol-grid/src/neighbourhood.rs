//! Moore neighbourhood resolution.

use smallvec::SmallVec;

use crate::grid::Grid;
use crate::topology::Topology;

/// The eight Moore offsets: W, E, N, S, NW, NE, SW, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Resolved neighbour coordinates; at most eight, so never heap-allocated.
pub type Neighbours = SmallVec<[(i32, i32); 8]>;

impl Grid {
    /// Resolve the Moore neighbourhood of `(x, y)` under `topology`.
    ///
    /// Under [`Topology::Bounded`] out-of-range positions are omitted, so
    /// corners have 3 neighbours and edges 5. Under [`Topology::Toroidal`]
    /// every position wraps and exactly 8 coordinates are returned; on grids
    /// narrower than 3 cells the same coordinate (or `(x, y)` itself) can
    /// appear more than once.
    ///
    /// `(x, y)` itself is not required to be in bounds.
    pub fn neighbours(&self, x: i32, y: i32, topology: Topology) -> Neighbours {
        let mut result = Neighbours::new();
        for (dx, dy) in MOORE_OFFSETS {
            let nx = topology.resolve_axis(x.wrapping_add(dx), self.width());
            let ny = topology.resolve_axis(y.wrapping_add(dy), self.height());
            if let (Some(nx), Some(ny)) = (nx, ny) {
                result.push((nx, ny));
            }
        }
        result
    }

    /// Count live cells in the Moore neighbourhood of `(x, y)`.
    ///
    /// Positions outside the grid under [`Topology::Bounded`] count as dead.
    /// This never fails: out-of-range lookups are a sentinel, not an error.
    pub fn alive_neighbours(&self, x: i32, y: i32, topology: Topology) -> u8 {
        let w = self.width() as usize;
        self.neighbours(x, y, topology)
            .into_iter()
            .filter(|&(nx, ny)| self.cell_at(ny as usize * w + nx as usize).is_alive())
            .count() as u8
    }
}
