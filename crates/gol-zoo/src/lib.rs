//! Named Game-of-Life patterns and seeded random soups.
//!
//! Every pattern is drawn on a [`Grid`](gol_grid::Grid) the size of its
//! bounding box, using nothing but the grid's public API, so it can be
//! placed into a larger world with [`Grid::merge`](gol_grid::Grid::merge).
//!
//! # Patterns
//!
//! - [`glider`] — 3×3 spaceship, period 4, moves one cell diagonally
//! - [`r_pentomino`] — 3×3 methuselah
//! - [`light_weight_spaceship`] — 5×4 spaceship, period 4, moves two cells
//!   horizontally
//!
//! [`soup`] fills a grid at random from a seeded `ChaCha8` RNG, producing
//! identical grids for identical seeds on every platform.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;
pub mod soup;

pub use patterns::{by_name, glider, light_weight_spaceship, r_pentomino, PATTERN_NAMES};
pub use soup::soup;
