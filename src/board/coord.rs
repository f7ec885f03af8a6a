//! Board coordinates.

use serde::{Deserialize, Serialize};

/// Position of a cell on the board: `(row, col)`, both 0-based.
///
/// Coordinates are not stored on cells. They are produced by iteration
/// (`Grid::coords`) and consumed by lookups.
///
/// ```
/// use rust_life::Coord;
///
/// let at = Coord::new(2, 3);
/// assert_eq!(at.offset(-1, 0), Some(Coord::new(1, 3)));
///
/// // Offsets never leave the non-negative quadrant.
/// assert_eq!(Coord::new(0, 0).offset(-1, -1), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 = top.
    pub row: usize,
    /// Column index, 0 = left.
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a signed offset, returning `None` if either component would
    /// go negative.
    ///
    /// The upper bounds belong to a specific grid and are checked there;
    /// this only guards the underflow side.
    #[must_use]
    pub fn offset(self, d_row: i64, d_col: i64) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row as isize)?;
        let col = self.col.checked_add_signed(d_col as isize)?;
        Some(Self { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_in_quadrant() {
        let at = Coord::new(5, 5);
        assert_eq!(at.offset(1, 1), Some(Coord::new(6, 6)));
        assert_eq!(at.offset(-1, 0), Some(Coord::new(4, 5)));
        assert_eq!(at.offset(0, -5), Some(Coord::new(5, 0)));
    }

    #[test]
    fn test_offset_underflow() {
        assert_eq!(Coord::new(0, 3).offset(-1, 0), None);
        assert_eq!(Coord::new(3, 0).offset(0, -1), None);
        assert_eq!(Coord::new(0, 0).offset(-1, -1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(2, 7)), "(2, 7)");
    }
}
