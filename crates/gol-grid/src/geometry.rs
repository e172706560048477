//! Geometric operations: crop, merge, and rotate.
//!
//! `crop` and `rotate` always return a new, independent [`Grid`]; `merge`
//! only reads the overlaid grid.

use gol_core::Cell;

use crate::error::GridError;
use crate::grid::Grid;

impl Grid {
    /// Extract the half-open rectangle `[x0, x1) × [y0, y1)` as a new grid.
    ///
    /// The result is `(x1 - x0) × (y1 - y0)`. Returns
    /// `Err(GridError::InvalidRegion)` if the rectangle is inverted and
    /// `Err(GridError::RegionOutOfBounds)` if it extends outside this grid.
    ///
    /// ```
    /// use gol_core::Cell;
    /// use gol_grid::Grid;
    ///
    /// let mut grid = Grid::new(4, 4).unwrap();
    /// grid.set(2, 1, Cell::Alive).unwrap();
    /// let part = grid.crop(1, 1, 3, 3).unwrap();
    /// assert_eq!((part.width(), part.height()), (2, 2));
    /// assert_eq!(part.get(1, 0).unwrap(), Cell::Alive);
    /// ```
    pub fn crop(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Grid, GridError> {
        if x1 < x0 || y1 < y0 {
            return Err(GridError::InvalidRegion {
                reason: format!("inverted rectangle [{x0}, {x1}) x [{y0}, {y1})"),
            });
        }
        if x0 < 0 || y0 < 0 || x1 as i64 > self.width() as i64 || y1 as i64 > self.height() as i64
        {
            return Err(GridError::RegionOutOfBounds {
                rect: [x0, y0, x1, y1],
                width: self.width(),
                height: self.height(),
            });
        }

        let out_w = (x1 - x0) as usize;
        let out_h = (y1 - y0) as usize;
        let src_w = self.width() as usize;
        let mut cells = Vec::with_capacity(out_w * out_h);
        for y in y0 as usize..y1 as usize {
            let start = y * src_w + x0 as usize;
            cells.extend_from_slice(&self.cells()[start..start + out_w]);
        }
        Grid::from_cells(out_w as u32, out_h as u32, cells)
    }

    /// Overlay `other` onto this grid with its origin at `(x0, y0)`.
    ///
    /// Parts of `other` that land outside this grid are clipped. With
    /// `alive_only` set, dead cells of `other` leave the destination
    /// untouched; otherwise every cell of `other` is copied.
    ///
    /// ```
    /// use gol_core::Cell;
    /// use gol_grid::Grid;
    ///
    /// let mut stamp = Grid::new(2, 2).unwrap();
    /// stamp.set(1, 1, Cell::Alive).unwrap();
    ///
    /// let mut grid = Grid::new(3, 3).unwrap();
    /// grid.merge(&stamp, 2, 2, false); // only (0, 0) of the stamp fits
    /// assert_eq!(grid.alive_cells(), 0);
    ///
    /// grid.merge(&stamp, -1, -1, true);
    /// assert_eq!(grid.get(0, 0).unwrap(), Cell::Alive);
    /// ```
    pub fn merge(&mut self, other: &Grid, x0: i32, y0: i32, alive_only: bool) {
        let w = self.width() as i64;
        let h = self.height() as i64;
        // Clip the overlay's row/column ranges to the destination.
        let ox_start = (-(x0 as i64)).max(0);
        let oy_start = (-(y0 as i64)).max(0);
        let ox_end = (other.width() as i64).min(w - x0 as i64);
        let oy_end = (other.height() as i64).min(h - y0 as i64);
        if ox_start >= ox_end || oy_start >= oy_end {
            return;
        }

        let src_w = other.width() as usize;
        let dst_w = self.width() as usize;
        for oy in oy_start..oy_end {
            let ty = (oy + y0 as i64) as usize;
            for ox in ox_start..ox_end {
                let tx = (ox + x0 as i64) as usize;
                let cell = other.cell_at(oy as usize * src_w + ox as usize);
                if alive_only && cell.is_dead() {
                    continue;
                }
                *self.cell_at_mut(ty * dst_w + tx) = cell;
            }
        }
    }

    /// Return a copy rotated clockwise by `rotation × 90°`.
    ///
    /// Any integer is accepted; the effective rotation is
    /// `rotation.rem_euclid(4)`. Width and height swap for odd quarter turns.
    ///
    /// ```
    /// use gol_core::Cell;
    /// use gol_grid::Grid;
    ///
    /// let mut grid = Grid::new(3, 1).unwrap();
    /// grid.set(0, 0, Cell::Alive).unwrap();
    ///
    /// let r = grid.rotate(1);
    /// assert_eq!((r.width(), r.height()), (1, 3));
    /// assert_eq!(r.get(0, 0).unwrap(), Cell::Alive);
    /// assert_eq!(grid.rotate(-3), r);
    /// ```
    pub fn rotate(&self, rotation: i32) -> Grid {
        let quarter_turns = rotation.rem_euclid(4);
        if quarter_turns == 0 {
            return self.clone();
        }

        let w = self.width() as usize;
        let h = self.height() as usize;
        let (out_w, out_h) = if quarter_turns % 2 == 1 { (h, w) } else { (w, h) };
        let mut cells = vec![Cell::Dead; w * h];
        for y in 0..h {
            for x in 0..w {
                let (nx, ny) = match quarter_turns {
                    1 => (h - 1 - y, x),
                    2 => (w - 1 - x, h - 1 - y),
                    _ => (y, w - 1 - x),
                };
                cells[ny * out_w + nx] = self.cell_at(y * w + x);
            }
        }
        Grid::from_raw(out_w as u32, out_h as u32, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_with(w: u32, h: u32, alive: &[(i32, i32)]) -> Grid {
        let mut g = Grid::new(w, h).unwrap();
        for &(x, y) in alive {
            g.set(x, y, Cell::Alive).unwrap();
        }
        g
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (0u32..9, 0u32..9).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<bool>(), (w * h) as usize).prop_map(move |bits| {
                Grid::from_cells(w, h, bits.into_iter().map(Cell::from).collect()).unwrap()
            })
        })
    }

    // ── Crop tests ──────────────────────────────────────────────

    #[test]
    fn crop_full_grid_is_copy() {
        let g = grid_with(3, 2, &[(0, 0), (2, 1)]);
        assert_eq!(g.crop(0, 0, 3, 2).unwrap(), g);
    }

    #[test]
    fn crop_empty_rectangle() {
        let g = grid_with(3, 3, &[(1, 1)]);
        let c = g.crop(3, 3, 3, 3).unwrap();
        assert_eq!(c.total_cells(), 0);
    }

    #[test]
    fn crop_keeps_source_order() {
        let g = grid_with(4, 4, &[(1, 1), (3, 2), (2, 3)]);
        let c = g.crop(1, 1, 4, 4).unwrap();
        assert_eq!(c.iter_alive().collect::<Vec<_>>(), vec![(0, 0), (2, 1), (1, 2)]);
    }

    #[test]
    fn crop_outside_is_bounds_error() {
        let g = Grid::new(3, 3).unwrap();
        for rect in [(-1, 0, 2, 2), (0, -1, 2, 2), (0, 0, 4, 3), (0, 0, 3, 4)] {
            let (x0, y0, x1, y1) = rect;
            assert!(matches!(
                g.crop(x0, y0, x1, y1),
                Err(GridError::RegionOutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn crop_inverted_is_invalid_region() {
        let g = Grid::new(3, 3).unwrap();
        assert!(matches!(g.crop(2, 0, 1, 3), Err(GridError::InvalidRegion { .. })));
        assert!(matches!(g.crop(0, 2, 3, 1), Err(GridError::InvalidRegion { .. })));
    }

    // ── Merge tests ─────────────────────────────────────────────

    #[test]
    fn merge_alive_only_keeps_destination() {
        let mut dst = grid_with(3, 3, &[(0, 0)]);
        let src = grid_with(2, 2, &[(1, 1)]);
        dst.merge(&src, 0, 0, true);
        assert_eq!(dst.get(0, 0).unwrap(), Cell::Alive);
        assert_eq!(dst.get(1, 1).unwrap(), Cell::Alive);
    }

    #[test]
    fn merge_all_overwrites_with_dead() {
        let mut dst = grid_with(3, 3, &[(0, 0)]);
        let src = grid_with(2, 2, &[(1, 1)]);
        dst.merge(&src, 0, 0, false);
        assert_eq!(dst.get(0, 0).unwrap(), Cell::Dead);
        assert_eq!(dst.get(1, 1).unwrap(), Cell::Alive);
    }

    #[test]
    fn merge_clips_every_side() {
        let src = grid_with(3, 3, &[(0, 0), (2, 0), (0, 2), (2, 2)]);
        let mut dst = Grid::new(3, 3).unwrap();
        dst.merge(&src, -2, -2, false);
        assert_eq!(dst.iter_alive().collect::<Vec<_>>(), vec![(0, 0)]);

        let mut dst = Grid::new(3, 3).unwrap();
        dst.merge(&src, 2, 2, false);
        assert_eq!(dst.iter_alive().collect::<Vec<_>>(), vec![(2, 2)]);
    }

    #[test]
    fn merge_entirely_outside_is_noop() {
        let src = grid_with(2, 2, &[(0, 0)]);
        let mut dst = Grid::new(3, 3).unwrap();
        dst.merge(&src, 10, 0, false);
        dst.merge(&src, i32::MIN, i32::MAX, false);
        assert_eq!(dst.alive_cells(), 0);
    }

    #[test]
    fn merge_does_not_mutate_source() {
        let src = grid_with(2, 2, &[(0, 1)]);
        let before = src.clone();
        let mut dst = grid_with(4, 4, &[(0, 0), (1, 1)]);
        dst.merge(&src, 1, 1, false);
        assert_eq!(src, before);
    }

    // ── Rotate tests ────────────────────────────────────────────

    #[test]
    fn rotate_quarter_turn_clockwise() {
        // #..      .#
        // ...  ->  ..
        //          ..  (top-left moves to top-right)
        let g = grid_with(3, 2, &[(0, 0)]);
        let r = g.rotate(1);
        assert_eq!((r.width(), r.height()), (2, 3));
        assert_eq!(r.iter_alive().collect::<Vec<_>>(), vec![(1, 0)]);
    }

    #[test]
    fn rotate_half_turn() {
        let g = grid_with(3, 2, &[(0, 0)]);
        let r = g.rotate(2);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert_eq!(r.iter_alive().collect::<Vec<_>>(), vec![(2, 1)]);
    }

    #[test]
    fn rotate_three_quarters_is_counter_clockwise() {
        let g = grid_with(3, 2, &[(0, 0)]);
        let r = g.rotate(3);
        assert_eq!(r.iter_alive().collect::<Vec<_>>(), vec![(0, 2)]);
        assert_eq!(g.rotate(-1), r);
    }

    #[test]
    fn rotate_empty_grid_swaps_dims() {
        let g = Grid::new(0, 5).unwrap();
        let r = g.rotate(1);
        assert_eq!((r.width(), r.height()), (5, 0));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn crop_then_merge_restores(g in arb_grid(), a in 0i32..9, b in 0i32..9, c in 0i32..9, d in 0i32..9) {
            let w = g.width() as i32;
            let h = g.height() as i32;
            let (x0, x1) = (a.min(c).min(w), a.max(c).min(w));
            let (y0, y1) = (b.min(d).min(h), b.max(d).min(h));
            let part = g.crop(x0, y0, x1, y1).unwrap();
            let mut scratch = g.clone();
            scratch.fill(Cell::Dead);
            scratch.merge(&part, x0, y0, false);
            prop_assert_eq!(scratch.crop(x0, y0, x1, y1).unwrap(), part.clone());

            let mut restored = g.clone();
            restored.merge(&part, x0, y0, false);
            prop_assert_eq!(restored, g);
        }

        #[test]
        fn four_quarter_turns_is_identity(g in arb_grid(), k in -5i32..5) {
            prop_assert_eq!(g.rotate(4 * k), g.clone());
            let mut r = g.clone();
            for _ in 0..4 {
                r = r.rotate(1);
            }
            prop_assert_eq!(r, g);
        }

        #[test]
        fn rotation_preserves_population(g in arb_grid(), rot in any::<i32>()) {
            prop_assert_eq!(g.rotate(rot).alive_cells(), g.alive_cells());
        }
    }
}
