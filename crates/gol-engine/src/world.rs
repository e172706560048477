//! Double-buffered simulation world.
//!
//! [`World`] is the user-facing API for running a simulation. Each call to
//! [`step()`](World::step) evaluates the rule for every cell against the
//! current generation, writes the results into the future buffer, and then
//! swaps the two buffers.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`. [`state()`](World::state) borrows
//! the current generation read-only, and [`get_state()`](World::get_state)
//! returns an independent copy, so callers can never write into the
//! engine's buffers.

use std::mem;
use std::time::Instant;

use gol_core::Cell;
use gol_grid::{Grid, GridError, Topology};

use crate::config::{ConfigError, WorldConfig};
use crate::metrics::StepMetrics;
use crate::rule;

// Compile-time assertion: World is Send + Sync (plain owned buffers).
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<World>();
    }
};

/// A Game-of-Life simulation over a fixed-size grid.
///
/// Holds two grids of identical dimensions: `current` (the generation
/// callers observe) and `future` (scratch space for the next generation).
///
/// # Examples
///
/// ```
/// use gol_core::Cell;
/// use gol_engine::World;
/// use gol_grid::{Grid, Topology};
///
/// // A horizontal blinker.
/// let mut grid = Grid::new(5, 5).unwrap();
/// for x in 1..4 {
///     grid.set(x, 2, Cell::Alive).unwrap();
/// }
/// let mut world = World::from_grid(grid.clone());
///
/// world.step(Topology::Bounded);
/// assert_eq!(world.state().get(2, 1).unwrap(), Cell::Alive);
/// assert_eq!(world.state().get(1, 2).unwrap(), Cell::Dead);
///
/// world.step(Topology::Bounded);
/// assert_eq!(world.get_state(), grid);
/// ```
#[derive(Clone, Debug, Default)]
pub struct World {
    current: Grid,
    future: Grid,
    generation: u64,
    last_metrics: StepMetrics,
}

impl World {
    /// Create an all-dead `width × height` world.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }

    /// Create an all-dead `size × size` world.
    pub fn square(size: u32) -> Result<Self, GridError> {
        Self::new(size, size)
    }

    /// Create a world whose first generation is `initial_state`.
    ///
    /// The future buffer is allocated with matching dimensions.
    pub fn from_grid(initial_state: Grid) -> Self {
        let mut future = initial_state.clone();
        future.fill(Cell::Dead);
        Self {
            current: initial_state,
            future,
            generation: 0,
            last_metrics: StepMetrics::default(),
        }
    }

    /// Create a world from a validated [`WorldConfig`].
    pub fn from_config(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial = match config.initial_state {
            Some(grid) => grid,
            None => Grid::new(config.width, config.height)?,
        };
        Ok(Self::from_grid(initial))
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.current.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.current.height()
    }

    /// `width * height`.
    pub fn total_cells(&self) -> usize {
        self.current.total_cells()
    }

    /// Live cells in the current generation.
    pub fn alive_cells(&self) -> usize {
        self.current.alive_cells()
    }

    /// Dead cells in the current generation.
    pub fn dead_cells(&self) -> usize {
        self.current.dead_cells()
    }

    /// A copy of the current generation.
    pub fn get_state(&self) -> Grid {
        self.current.clone()
    }

    /// Read-only view of the current generation.
    pub fn state(&self) -> &Grid {
        &self.current
    }

    /// Number of steps taken since construction or the last resize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Metrics from the most recent step (all zero before the first one).
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Resize to a `size × size` square. See [`World::resize`].
    pub fn resize_square(&mut self, size: u32) -> Result<(), GridError> {
        self.resize(size, size)
    }

    /// Resize both buffers, preserving the current generation where the old
    /// and new dimensions overlap. Resets the generation counter.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        self.current.resize(width, height)?;
        self.future.resize(width, height)?;
        self.generation = 0;
        self.last_metrics = StepMetrics::default();
        Ok(())
    }

    /// Count live cells among the eight neighbours of `(x, y)` in the
    /// current generation.
    fn count_neighbours(&self, x: i32, y: i32, topology: Topology) -> u8 {
        self.current.alive_neighbours(x, y, topology)
    }

    /// Advance one generation.
    ///
    /// Every cell of the future buffer is computed from the current buffer
    /// only; the buffers are then swapped. Returns the metrics for this
    /// step, which are also kept as [`last_metrics()`](World::last_metrics).
    pub fn step(&mut self, topology: Topology) -> StepMetrics {
        let start = Instant::now();
        debug_assert_eq!(
            (self.current.width(), self.current.height()),
            (self.future.width(), self.future.height()),
        );

        let width = self.current.width() as usize;
        let mut births = 0;
        let mut deaths = 0;
        let mut alive = 0;
        for index in 0..self.current.total_cells() {
            let x = (index % width) as i32;
            let y = (index / width) as i32;
            let cell = self.current.cell_at(index);
            let next = rule::next_state(cell, self.count_neighbours(x, y, topology));
            match (cell, next) {
                (Cell::Dead, Cell::Alive) => births += 1,
                (Cell::Alive, Cell::Dead) => deaths += 1,
                _ => {}
            }
            if next.is_alive() {
                alive += 1;
            }
            *self.future.cell_at_mut(index) = next;
        }

        mem::swap(&mut self.current, &mut self.future);
        self.generation += 1;
        self.last_metrics = StepMetrics {
            generation: self.generation,
            total_us: start.elapsed().as_micros() as u64,
            births,
            deaths,
            alive,
        };
        self.last_metrics
    }

    /// Call [`step()`](World::step) exactly `steps` times. Zero is a no-op.
    pub fn advance(&mut self, steps: u64, topology: Topology) {
        for _ in 0..steps {
            self.step(topology);
        }
    }
}

impl From<Grid> for World {
    fn from(grid: Grid) -> Self {
        Self::from_grid(grid)
    }
}
