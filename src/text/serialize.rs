//! Grid to text.

use super::charset::Charset;
use crate::board::Grid;

/// Serialize a board with the default charset (`'x'` alive, `'.'` dead).
#[must_use]
pub fn serialize(grid: &Grid) -> String {
    serialize_with(grid, Charset::default())
}

/// Serialize a board: one line per row, rows joined by `'\n'`, no
/// trailing newline.
///
/// Exact inverse of [`parse_with`](super::parse_with) for the same
/// charset.
#[must_use]
pub fn serialize_with(grid: &Grid, charset: Charset) -> String {
    let (rows, cols) = grid.dimensions();
    let mut out = String::with_capacity(rows * (cols + 1));
    for row in 0..rows {
        if row > 0 {
            out.push('\n');
        }
        for cell in grid.row(row) {
            out.push(charset.encode(cell));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{parse, parse_with};

    #[test]
    fn test_serialize_default_charset() {
        let grid = parse(".x.\n.x.\n.x.").unwrap();
        assert_eq!(serialize(&grid), ".x.\n.x.\n.x.");
    }

    #[test]
    fn test_no_trailing_newline() {
        let grid = parse("x").unwrap();
        assert_eq!(serialize(&grid), "x");
    }

    #[test]
    fn test_custom_charset_round_trip() {
        let charset = Charset::new('O', '_');
        let text = "O_O\n_O_";
        let grid = parse_with(text, charset).unwrap();
        assert_eq!(serialize_with(&grid, charset), text);
    }

    #[test]
    fn test_serialize_wide_row() {
        let grid = parse("x.x.x").unwrap();
        assert_eq!(serialize(&grid), "x.x.x");
    }
}
