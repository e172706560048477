//! Rectangular cell grids for the gol cellular-automaton engine.
//!
//! This crate defines [`Grid`], the flat row-major buffer of
//! [`Cell`](gol_core::Cell)s that every other part of the engine reads and
//! writes, together with the [`Topology`] that decides how the Moore
//! neighbourhood behaves at the grid's edges.
//!
//! # Operations
//!
//! - Bounds-checked access: [`Grid::get`], [`Grid::set`], and panicking
//!   `grid[(x, y)]` indexing
//! - Content-preserving [`Grid::resize`]
//! - Geometry: [`Grid::crop`], [`Grid::merge`], [`Grid::rotate`]
//! - Neighbourhood resolution: [`Grid::neighbours`]
//!
//! # Coordinates
//!
//! `x` is the column and `y` the row; both are `i32` so that callers can
//! express out-of-range positions, which are rejected with
//! [`GridError::CoordOutOfBounds`] rather than wrapped or clamped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod grid;
pub mod neighbourhood;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::GridError;
pub use grid::Grid;
pub use neighbourhood::{Neighbours, MOORE_OFFSETS};
pub use topology::Topology;
