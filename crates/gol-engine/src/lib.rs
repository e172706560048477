//! Simulation engine for Game-of-Life worlds.
//!
//! Provides [`World`], which owns two equally sized
//! [`Grid`](gol_grid::Grid)s and advances them one generation at a time
//! under Conway's B3/S23 rule on a bounded or toroidal
//! [`Topology`](gol_grid::Topology).
//!
//! Each step reads only the current generation and writes only the future
//! one; the two buffers are swapped after the full pass, so no cell ever
//! sees a partially updated neighbourhood.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod rule;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use metrics::StepMetrics;
pub use world::World;
