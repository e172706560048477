//! File formats for gol grids.
//!
//! Two formats are supported, both carrying only width, height, and cell
//! states:
//!
//! - [`binary`]: the compact `.bgol` format, a fixed little-endian header
//!   followed by bit-packed cells
//! - [`ascii`]: the human-readable `.gol` format, one text line per row
//!
//! Each format offers stream-level functions over any `Read`/`Write`
//! ([`encode_binary`], [`decode_binary`], [`encode_ascii`], [`decode_ascii`])
//! and path-level wrappers ([`save_binary`], [`load_binary`], [`save_ascii`],
//! [`load_ascii`]). All I/O uses a small hand-written codec (no serde
//! dependency).
//!
//! # Binary format
//!
//! ```text
//! [WIDTH i32 LE] [HEIGHT i32 LE] [ceil(WIDTH * HEIGHT / 8) bytes]
//! ```
//!
//! Cell `i = y * width + x` is bit `i % 8` of body byte `i / 8`; 1 is
//! alive. Unused high bits of the last byte are zero.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ascii;
pub mod binary;
pub mod bits;
pub mod error;

pub use ascii::{decode_ascii, encode_ascii, load_ascii, save_ascii};
pub use binary::{decode_binary, encode_binary, load_binary, save_binary};
pub use bits::{pack_cells, packed_len, unpack_cells};
pub use error::CodecError;

/// Conventional file extension of the binary format.
pub const BINARY_EXTENSION: &str = "bgol";

/// Conventional file extension of the text format.
pub const ASCII_EXTENSION: &str = "gol";
