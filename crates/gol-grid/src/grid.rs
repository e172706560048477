//! The rectangular cell buffer.

use std::fmt;
use std::ops::{Index, IndexMut};

use gol_core::Cell;

use crate::error::GridError;

/// A rectangular buffer of [`Cell`]s stored in row-major order.
///
/// Cell `(x, y)` lives at index `y * width + x`. A zero width or height is
/// legal and denotes an empty grid. Every constructor initializes all cells
/// to [`Cell::Dead`].
///
/// # Examples
///
/// ```
/// use gol_core::Cell;
/// use gol_grid::Grid;
///
/// let mut grid = Grid::new(4, 3).unwrap();
/// grid.set(1, 2, Cell::Alive).unwrap();
/// assert_eq!(grid.get(1, 2).unwrap(), Cell::Alive);
/// assert_eq!(grid.alive_cells(), 1);
/// assert_eq!(grid.dead_cells(), 11);
/// assert!(grid.get(4, 0).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum size of either dimension.
    ///
    /// Coordinates are `i32`, so every valid column and row must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `width × height` grid of dead cells.
    ///
    /// Returns `Err(GridError::DimensionTooLarge)` if either dimension
    /// exceeds [`Grid::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; cell_count(width, height)],
        })
    }

    /// Create a `size × size` grid of dead cells.
    pub fn square(size: u32) -> Result<Self, GridError> {
        Self::new(size, size)
    }

    /// Create a dead grid whose dimensions cannot exceed [`Grid::MAX_DIM`].
    ///
    /// Infallible counterpart of [`Grid::new`] for patterns with small,
    /// statically known sizes.
    pub fn small(width: u16, height: u16) -> Self {
        let (width, height) = (u32::from(width), u32::from(height));
        Self::from_raw(width, height, vec![Cell::Dead; cell_count(width, height)])
    }

    /// Build a grid from a row-major cell buffer.
    ///
    /// Returns `Err(GridError::CellCountMismatch)` if `cells.len()` is not
    /// `width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Result<Self, GridError> {
        check_dims(width, height)?;
        let expected = cell_count(width, height);
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Assemble a grid whose dimensions are already known to be valid.
    pub(crate) fn from_raw(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), cell_count(width, height));
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`.
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds zero cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of live cells.
    pub fn alive_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Number of dead cells (`total_cells - alive_cells`).
    pub fn dead_cells(&self) -> usize {
        self.total_cells() - self.alive_cells()
    }

    /// The cell buffer in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the rows, top to bottom.
    ///
    /// Yields `height` slices of `width` cells each (empty slices when the
    /// width is zero).
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let w = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * w..(y + 1) * w])
    }

    /// Coordinates of every live cell in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| ((i % w) as i32, (i / w) as i32))
    }

    /// Flat index of `(x, y)`, or `None` when out of bounds.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        self.index_of(x, y).ok_or(GridError::CoordOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        let i = self.checked_index(x, y)?;
        Ok(self.cells[i])
    }

    /// Write the cell at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Read a cell by flat index without a coordinate check.
    ///
    /// Panics if `index >= total_cells()`.
    pub fn cell_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Mutable access to a cell by flat index.
    ///
    /// Panics if `index >= total_cells()`.
    pub fn cell_at_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    /// Set every cell to `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Resize to a `size × size` square. See [`Grid::resize`].
    pub fn resize_square(&mut self, size: u32) -> Result<(), GridError> {
        self.resize(size, size)
    }

    /// Change the dimensions, keeping every cell whose coordinates exist in
    /// both the old and the new grid. Newly exposed cells are dead.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        check_dims(width, height)?;
        if width == self.width && height == self.height {
            return Ok(());
        }
        let mut cells = vec![Cell::Dead; cell_count(width, height)];
        let keep_w = self.width.min(width) as usize;
        let keep_h = self.height.min(height) as usize;
        let old_w = self.width as usize;
        let new_w = width as usize;
        for y in 0..keep_h {
            cells[y * new_w..y * new_w + keep_w]
                .copy_from_slice(&self.cells[y * old_w..y * old_w + keep_w]);
        }
        self.width = width;
        self.height = height;
        self.cells = cells;
        Ok(())
    }
}

fn check_dims(width: u32, height: u32) -> Result<(), GridError> {
    if width > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "width",
            value: width as u64,
            max: Grid::MAX_DIM,
        });
    }
    if height > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "height",
            value: height as u64,
            max: Grid::MAX_DIM,
        });
    }
    Ok(())
}

fn cell_count(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize)
}

impl Index<(i32, i32)> for Grid {
    type Output = Cell;

    /// Panics if `(x, y)` is out of bounds; use [`Grid::get`] to handle that case.
    fn index(&self, (x, y): (i32, i32)) -> &Cell {
        match self.index_of(x, y) {
            Some(i) => &self.cells[i],
            None => panic!(
                "coordinate ({x}, {y}) out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl IndexMut<(i32, i32)> for Grid {
    fn index_mut(&mut self, (x, y): (i32, i32)) -> &mut Cell {
        match self.index_of(x, y) {
            Some(i) => &mut self.cells[i],
            None => panic!(
                "coordinate ({x}, {y}) out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

/// Renders the grid framed by a border, dead cells as `' '` and live cells
/// as `'#'`.
///
/// ```text
/// +---+
/// | # |
/// |  #|
/// |###|
/// +---+
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width as usize);
        writeln!(f, "+{border}+")?;
        for row in self.rows() {
            f.write_str("|")?;
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "+{border}+")
    }
}
