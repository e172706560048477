//! Edge topology for neighbour lookups.

/// How a grid treats neighbour positions that fall outside its bounds.
///
/// This only affects neighbourhood resolution (and therefore stepping).
/// Single-cell access through [`Grid::get`](crate::Grid::get) is always
/// bounds-checked regardless of topology.
///
/// # Examples
///
/// ```
/// use gol_grid::{Grid, Topology};
///
/// let grid = Grid::new(4, 4).unwrap();
///
/// // Bounded: a corner has 3 neighbours, an interior cell has 8.
/// assert_eq!(grid.neighbours(0, 0, Topology::Bounded).len(), 3);
/// assert_eq!(grid.neighbours(1, 1, Topology::Bounded).len(), 8);
///
/// // Toroidal: every cell has exactly 8 neighbours.
/// assert_eq!(grid.neighbours(0, 0, Topology::Toroidal).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Out-of-bounds neighbours are omitted and count as DEAD.
    #[default]
    Bounded,
    /// Out-of-bounds neighbours wrap to the opposite edge (torus).
    Toroidal,
}

impl Topology {
    /// Whether this topology wraps around the edges.
    pub fn is_toroidal(self) -> bool {
        self == Topology::Toroidal
    }

    /// Resolve one axis value against an axis of length `len`.
    ///
    /// Returns `Some(v)` with `v ∈ [0, len)`, or `None` when the value is
    /// out of range under [`Topology::Bounded`] or the axis is empty.
    pub fn resolve_axis(self, val: i32, len: u32) -> Option<i32> {
        let n = len as i64;
        let v = val as i64;
        if v >= 0 && v < n {
            return Some(val);
        }
        match self {
            Topology::Bounded => None,
            Topology::Toroidal if n == 0 => None,
            Topology::Toroidal => Some(v.rem_euclid(n) as i32),
        }
    }
}

impl From<bool> for Topology {
    /// Maps a `toroidal` flag onto a topology.
    fn from(toroidal: bool) -> Self {
        if toroidal {
            Topology::Toroidal
        } else {
            Topology::Bounded
        }
    }
}
