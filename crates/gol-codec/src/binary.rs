//! Binary encode/decode for the `.bgol` format.
//!
//! All integers are little-endian. The format is intentionally minimal: no
//! magic, no version byte, no compression. Readers take exactly the number
//! of body bytes the header declares and never zero-fill a short body.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use gol_grid::Grid;

use crate::bits::{pack_cells, packed_len, unpack_cells};
use crate::error::CodecError;

/// Size of the `width`/`height` header in bytes.
pub const HEADER_LEN: usize = 8;

// ── Primitive writers ───────────────────────────────────────────

/// Write a little-endian i32.
pub fn write_i32_le(w: &mut dyn Write, v: i32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a little-endian i32.
pub fn read_i32_le(r: &mut dyn Read) -> Result<i32, CodecError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// Fill `buf` as far as the input allows, returning the byte count.
///
/// Unlike `read_exact`, a short input is not an error; the caller decides
/// how to report it.
fn read_up_to(r: &mut dyn Read, buf: &mut [u8]) -> Result<usize, CodecError> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CodecError::Io(e)),
        }
    }
    Ok(filled)
}

fn header_dimension(name: &'static str, value: u32) -> Result<i32, CodecError> {
    i32::try_from(value).map_err(|_| CodecError::InvalidDimension {
        name,
        value: value as i64,
    })
}

fn parse_dimension(name: &'static str, value: i32) -> Result<u32, CodecError> {
    u32::try_from(value).map_err(|_| CodecError::InvalidDimension {
        name,
        value: value as i64,
    })
}

// ── Grid encode/decode ──────────────────────────────────────────

/// Encode `grid` as header plus bit-packed body.
pub fn encode_binary(w: &mut dyn Write, grid: &Grid) -> Result<(), CodecError> {
    write_i32_le(w, header_dimension("width", grid.width())?)?;
    write_i32_le(w, header_dimension("height", grid.height())?)?;
    w.write_all(&pack_cells(grid.cells()))?;
    Ok(())
}

/// Decode a grid from header plus bit-packed body.
///
/// Reads exactly `ceil(width * height / 8)` body bytes; anything after them
/// is left unread.
///
/// # Errors
///
/// - [`CodecError::Truncated`] if the header or body is short
/// - [`CodecError::InvalidDimension`] if a header dimension is negative or
///   the cell count does not fit in memory
/// - [`CodecError::Io`] on any other read failure
pub fn decode_binary(r: &mut dyn Read) -> Result<Grid, CodecError> {
    let mut header = [0u8; HEADER_LEN];
    let found = read_up_to(r, &mut header)?;
    if found < HEADER_LEN {
        return Err(CodecError::Truncated {
            expected: HEADER_LEN,
            found,
        });
    }
    let mut header = &header[..];
    let width = parse_dimension("width", read_i32_le(&mut header)?)?;
    let height = parse_dimension("height", read_i32_le(&mut header)?)?;

    let count = usize::try_from(width as u64 * height as u64).map_err(|_| {
        CodecError::InvalidDimension {
            name: "height",
            value: height as i64,
        }
    })?;
    let expected = packed_len(count);

    // Grow the body as bytes arrive so a lying header cannot force a huge
    // allocation up front.
    let mut body = Vec::new();
    (&mut *r).take(expected as u64).read_to_end(&mut body)?;
    if body.len() < expected {
        return Err(CodecError::Truncated {
            expected,
            found: body.len(),
        });
    }

    let cells = unpack_cells(&body, count)?;
    Ok(Grid::from_cells(width, height, cells)?)
}

// ── File wrappers ───────────────────────────────────────────────

/// Write `grid` to `path` in the binary format, replacing any existing file.
pub fn save_binary(path: impl AsRef<Path>, grid: &Grid) -> Result<(), CodecError> {
    let mut w = BufWriter::new(File::create(path)?);
    encode_binary(&mut w, grid)?;
    w.flush()?;
    Ok(())
}

/// Read a grid from a binary file at `path`.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Grid, CodecError> {
    let mut r = BufReader::new(File::open(path)?);
    decode_binary(&mut r)
}
