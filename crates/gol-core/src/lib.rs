//! Core types for the gol cellular-automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! binary [`Cell`] state shared by the grid, the stepping engine, and the
//! file codecs, along with the error raised when an external symbol does
//! not name a cell state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;

pub use cell::Cell;
pub use error::CellError;
