//! Plain-text encode/decode for the `.gol` format.
//!
//! ```text
//! <width> <height>\n
//! <width cells>\n      (height times, ' ' dead, '#' alive)
//! ```
//!
//! Decoding is strict: every row must hold exactly `width` cell symbols
//! followed by `'\n'`. Content after the last row is ignored.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use gol_core::Cell;
use gol_grid::Grid;

use crate::error::CodecError;

/// Encode `grid` as a header line and one text line per row.
pub fn encode_ascii(w: &mut dyn Write, grid: &Grid) -> Result<(), CodecError> {
    writeln!(w, "{} {}", grid.width(), grid.height())?;
    let mut line = Vec::with_capacity(grid.width() as usize + 1);
    for row in grid.rows() {
        line.clear();
        line.extend(row.iter().map(|c| c.as_byte()));
        line.push(b'\n');
        w.write_all(&line)?;
    }
    Ok(())
}

fn parse_dimension(name: &'static str, token: Option<&str>) -> Result<u32, CodecError> {
    let token = token.ok_or_else(|| CodecError::malformed(1, format!("missing {name}")))?;
    let value: i64 = token
        .parse()
        .map_err(|_| CodecError::malformed(1, format!("invalid {name} {token:?}")))?;
    if value < 0 || value > Grid::MAX_DIM as i64 {
        return Err(CodecError::InvalidDimension { name, value });
    }
    Ok(value as u32)
}

/// Decode a grid from its text form.
///
/// # Errors
///
/// - [`CodecError::MalformedContent`] for an unparsable header, a symbol
///   other than `' '` or `'#'`, a short or long row, or a missing newline
/// - [`CodecError::InvalidDimension`] for a negative or oversized header
///   dimension
/// - [`CodecError::Io`] if the input cannot be read
pub fn decode_ascii(r: &mut dyn Read) -> Result<Grid, CodecError> {
    let mut text = Vec::new();
    r.read_to_end(&mut text)?;

    let header_end = text
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| CodecError::malformed(1, "missing newline after header"))?;
    let header = std::str::from_utf8(&text[..header_end])
        .map_err(|_| CodecError::malformed(1, "header is not valid UTF-8"))?;
    let mut tokens = header.split_ascii_whitespace();
    let width = parse_dimension("width", tokens.next())?;
    let height = parse_dimension("height", tokens.next())?;
    if let Some(extra) = tokens.next() {
        return Err(CodecError::malformed(
            1,
            format!("unexpected header token {extra:?}"),
        ));
    }

    let body = &text[header_end + 1..];
    let count = width as usize * height as usize;
    let mut cells = Vec::with_capacity(count.min(body.len()));
    let mut bytes = body.iter().copied();
    for y in 0..height as usize {
        let line = y + 2;
        for x in 0..width as usize {
            match bytes.next() {
                None => return Err(CodecError::malformed(line, "unexpected end of input")),
                Some(b'\n') => {
                    return Err(CodecError::malformed(
                        line,
                        format!("row has {x} cells, expected {width}"),
                    ))
                }
                Some(b) => {
                    let cell = Cell::from_byte(b)
                        .map_err(|e| CodecError::malformed(line, e.to_string()))?;
                    cells.push(cell);
                }
            }
        }
        match bytes.next() {
            Some(b'\n') => {}
            None => return Err(CodecError::malformed(line, "missing newline at end of row")),
            Some(_) => {
                return Err(CodecError::malformed(
                    line,
                    format!("row longer than {width} cells"),
                ))
            }
        }
    }

    Ok(Grid::from_cells(width, height, cells)?)
}

/// Write `grid` to `path` in the text format, replacing any existing file.
pub fn save_ascii(path: impl AsRef<Path>, grid: &Grid) -> Result<(), CodecError> {
    let mut w = BufWriter::new(File::create(path)?);
    encode_ascii(&mut w, grid)?;
    w.flush()?;
    Ok(())
}

/// Read a grid from a text file at `path`.
pub fn load_ascii(path: impl AsRef<Path>) -> Result<Grid, CodecError> {
    let mut r = BufReader::new(File::open(path)?);
    decode_ascii(&mut r)
}
