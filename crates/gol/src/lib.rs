//! gol: Conway's Game of Life on bounded or toroidal grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gol sub-crates. For most users, adding `gol` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gol::prelude::*;
//!
//! // Drop a glider into an 8×8 torus.
//! let mut grid = Grid::square(8).unwrap();
//! grid.merge(&gol::zoo::glider(), 0, 0, true);
//!
//! let mut world = World::from_grid(grid);
//! world.advance(4, Topology::Toroidal);
//!
//! // Four generations later the glider has moved one cell south-east.
//! let mut expected = Grid::square(8).unwrap();
//! expected.merge(&gol::zoo::glider(), 1, 1, true);
//! assert_eq!(world.get_state(), expected);
//! assert_eq!(world.generation(), 4);
//!
//! // Persist it in the compact binary format.
//! let mut bytes = Vec::new();
//! gol::codec::encode_binary(&mut bytes, world.state()).unwrap();
//! let restored = gol::codec::decode_binary(&mut bytes.as_slice()).unwrap();
//! assert_eq!(&restored, world.state());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gol-core` | `Cell` and its conversions |
//! | [`grid`] | `gol-grid` | `Grid`, `Topology`, geometry, neighbourhoods |
//! | [`engine`] | `gol-engine` | `World`, the transition rule, step metrics |
//! | [`codec`] | `gol-codec` | `.bgol` binary and `.gol` text formats |
//! | [`zoo`] | `gol-zoo` | Named patterns and random soups |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell states (`gol-core`).
pub use gol_core as types;

/// Grids, topology, and neighbourhoods (`gol-grid`).
///
/// [`grid::Grid`] supports bounds-checked access, resizing, cropping,
/// merging, and rotation.
pub use gol_grid as grid;

/// The stepping engine (`gol-engine`).
///
/// [`engine::World`] double-buffers a grid and applies the B3/S23 rule.
pub use gol_engine as engine;

/// File formats (`gol-codec`).
///
/// Save and load grids with [`codec::save_binary`] / [`codec::load_binary`]
/// or the text pair [`codec::save_ascii`] / [`codec::load_ascii`].
pub use gol_codec as codec;

/// Named patterns and random soups (`gol-zoo`).
pub use gol_zoo as zoo;

/// Common imports for typical gol usage.
///
/// ```rust
/// use gol::prelude::*;
/// ```
pub mod prelude {
    // Cells and grids
    pub use gol_core::Cell;
    pub use gol_grid::{Grid, Topology};

    // Errors
    pub use gol_codec::CodecError;
    pub use gol_core::CellError;
    pub use gol_engine::ConfigError;
    pub use gol_grid::GridError;

    // Engine
    pub use gol_engine::{StepMetrics, World, WorldConfig};

    // Codecs
    pub use gol_codec::{load_ascii, load_binary, save_ascii, save_binary};
}
