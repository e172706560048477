//! LSB-first bit packing of cell runs.

use gol_core::Cell;

use crate::error::CodecError;

/// Number of bytes needed to pack `cells` cells.
pub fn packed_len(cells: usize) -> usize {
    cells.div_ceil(8)
}

/// Pack cells into bytes, cell `i` at bit `i % 8` of byte `i / 8`.
///
/// The unused high bits of the final byte are zero.
pub fn pack_cells(cells: &[Cell]) -> Vec<u8> {
    let mut bytes = vec![0u8; packed_len(cells.len())];
    for (i, cell) in cells.iter().enumerate() {
        if cell.is_alive() {
            bytes[i / 8] |= 1 << (i % 8);
        }
    }
    bytes
}

/// Unpack `count` cells from `bytes`.
///
/// Returns `Err(CodecError::Truncated)` if `bytes` is shorter than
/// [`packed_len(count)`](packed_len). Extra bytes and padding bits are
/// ignored.
pub fn unpack_cells(bytes: &[u8], count: usize) -> Result<Vec<Cell>, CodecError> {
    let expected = packed_len(count);
    if bytes.len() < expected {
        return Err(CodecError::Truncated {
            expected,
            found: bytes.len(),
        });
    }
    Ok((0..count)
        .map(|i| Cell::from(bytes[i / 8] & (1 << (i % 8)) != 0))
        .collect())
}
