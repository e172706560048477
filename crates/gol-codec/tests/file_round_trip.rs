//! File-level round trips through both formats.

use std::fs;

use gol_codec::{load_ascii, load_binary, save_ascii, save_binary, CodecError};
use gol_grid::Grid;
use gol_test_utils::{grid_from_rows, temp_path};

fn sample() -> Grid {
    grid_from_rows(&[" # ", "  #", "###"])
}

// ── Binary ──────────────────────────────────────────────────────

#[test]
fn binary_three_by_three_round_trip() {
    let path = temp_path("glider.bgol");
    save_binary(&path, &sample()).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), 8 + 2);
    let loaded = load_binary(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn binary_zero_sized_round_trip() {
    let path = temp_path("empty.bgol");
    save_binary(&path, &Grid::default()).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), 8);
    let loaded = load_binary(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded.total_cells(), 0);
}

#[test]
fn binary_soup_round_trip() {
    let soup = gol_zoo::soup(37, 19, 0.4, 7).unwrap();
    let path = temp_path("soup.bgol");
    save_binary(&path, &soup).unwrap();
    let loaded = load_binary(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded, soup);
}

#[test]
fn binary_truncated_file_is_reported() {
    let path = temp_path("short.bgol");
    save_binary(&path, &Grid::square(10).unwrap()).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();
    let result = load_binary(&path);
    fs::remove_file(&path).unwrap();
    match result {
        Err(CodecError::Truncated { expected, found }) => {
            assert_eq!((expected, found), (13, 10));
        }
        other => panic!("expected Truncated, got {other:?}"),
    }
}

#[test]
fn binary_missing_file_is_io_error() {
    let result = load_binary(temp_path("does-not-exist.bgol"));
    assert!(matches!(result, Err(CodecError::Io(_))));
}

#[test]
fn binary_unwritable_destination_is_io_error() {
    let dir = temp_path("missing-dir");
    let result = save_binary(dir.join("grid.bgol"), &sample());
    assert!(matches!(result, Err(CodecError::Io(_))));
}

// ── Text ────────────────────────────────────────────────────────

#[test]
fn ascii_round_trip() {
    let path = temp_path("glider.gol");
    save_ascii(&path, &sample()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "3 3\n # \n  #\n###\n");
    let loaded = load_ascii(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn ascii_malformed_file_is_reported() {
    let path = temp_path("bad.gol");
    fs::write(&path, "3 3\n###\n#x#\n###\n").unwrap();
    let result = load_ascii(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(
        result,
        Err(CodecError::MalformedContent { line: 3, .. })
    ));
}

#[test]
fn formats_agree() {
    let grid = gol_zoo::light_weight_spaceship();
    let (a, b) = (temp_path("lwss.gol"), temp_path("lwss.bgol"));
    save_ascii(&a, &grid).unwrap();
    save_binary(&b, &grid).unwrap();
    let from_text = load_ascii(&a).unwrap();
    let from_binary = load_binary(&b).unwrap();
    fs::remove_file(&a).unwrap();
    fs::remove_file(&b).unwrap();
    assert_eq!(from_text, from_binary);
}
