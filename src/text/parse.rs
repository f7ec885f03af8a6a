//! Text to grid.

use log::debug;

use super::charset::Charset;
use crate::board::{Grid, GridError};

/// Errors from [`parse`] and [`parse_with`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character matched neither configured marker.
    #[error("unrecognized cell character {ch:?} at line {line}, column {column}")]
    UnrecognizedChar {
        /// The offending character.
        ch: char,
        /// 1-based line of the character.
        line: usize,
        /// 1-based column of the character.
        column: usize,
    },

    /// The decoded rows did not form a non-empty rectangular grid.
    #[error("malformed grid: {0}")]
    Grid(#[from] GridError),
}

/// Parse a board with the default charset (`'x'` alive, `'.'` dead).
pub fn parse(text: &str) -> Result<Grid, ParseError> {
    parse_with(text, Charset::default())
}

/// Parse a board: one line per row, one character per cell.
///
/// Rows are separated by `'\n'` exactly. A trailing newline reads as a
/// trailing empty row and is rejected, which keeps [`serialize_with`]
/// and `parse_with` exact inverses of each other.
///
/// [`serialize_with`]: super::serialize_with
pub fn parse_with(text: &str, charset: Charset) -> Result<Grid, ParseError> {
    let mut rows = Vec::new();
    for (line_idx, line) in text.split('\n').enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            let cell = charset.decode(ch).ok_or(ParseError::UnrecognizedChar {
                ch,
                line: line_idx + 1,
                column: col_idx + 1,
            })?;
            row.push(cell);
        }
        rows.push(row);
    }

    let grid = Grid::from_rows(rows)?;
    debug!(
        "parsed {}x{} grid, population {}",
        grid.rows(),
        grid.cols(),
        grid.population()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardRng, Cell, Coord};
    use crate::text::serialize;
    use proptest::prelude::*;

    #[test]
    fn test_parse_default_charset() {
        let grid = parse("x.\n.x").unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.cell_at(Coord::new(0, 0)), Cell::Alive);
        assert_eq!(grid.cell_at(Coord::new(0, 1)), Cell::Dead);
        assert_eq!(grid.cell_at(Coord::new(1, 1)), Cell::Alive);
    }

    #[test]
    fn test_parse_single_row() {
        let grid = parse("xxx").unwrap();
        assert_eq!(grid.dimensions(), (1, 3));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_parse_custom_charset() {
        let charset = Charset::new('#', ' ');
        let grid = parse_with("# \n #", charset).unwrap();
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_unrecognized_char_named() {
        let result = parse("xy\nxx");
        assert_eq!(
            result,
            Err(ParseError::UnrecognizedChar {
                ch: 'y',
                line: 1,
                column: 2
            })
        );
    }

    #[test]
    fn test_ragged_lines_rejected() {
        let result = parse("xx\nx");
        assert_eq!(
            result,
            Err(ParseError::Grid(GridError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            }))
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        // "" reads as a single empty line.
        assert_eq!(
            parse(""),
            Err(ParseError::Grid(GridError::EmptyRow { row: 0 }))
        );
    }

    #[test]
    fn test_trailing_newline_rejected() {
        assert_eq!(
            parse("xx\n"),
            Err(ParseError::Grid(GridError::EmptyRow { row: 1 }))
        );
    }

    #[test]
    fn test_error_display_names_position() {
        let err = parse("x?").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 1"), "got: {message}");
        assert!(message.contains("column 2"), "got: {message}");
    }

    proptest! {
        // serialize(parse(text)) == text for any valid board text. Valid
        // texts are generated by serializing a random grid.
        #[test]
        fn prop_round_trip(
            rows in 1usize..10,
            cols in 1usize..10,
            seed in any::<u64>(),
        ) {
            let mut rng = BoardRng::new(seed);
            let grid = Grid::random(rows, cols, 0.5, &mut rng).unwrap();

            let text = serialize(&grid);
            let reparsed = parse(&text).unwrap();

            prop_assert_eq!(&reparsed, &grid);
            prop_assert_eq!(serialize(&reparsed), text);
        }
    }
}
