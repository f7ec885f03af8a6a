//! The board: an immutable rectangular grid of cells.
//!
//! ## Immutability
//!
//! A `Grid` is never modified after construction. Advancing the simulation
//! (`rules::step`) and point edits (`Grid::with_cell`) produce new `Grid`
//! values. Cells are held in an `im::Vector`, so cloning a grid into a
//! generation sequence is O(1) and point edits share structure with the
//! original.
//!
//! ## Rectangularity
//!
//! Every grid has at least one row and one column, and all rows have the
//! same length. A grid violating this is never constructed: `from_rows`
//! fails with a [`GridError`] instead.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::coord::Coord;
use super::rng::BoardRng;

/// Structural violations detected at grid construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The input had no rows.
    #[error("grid has no rows")]
    Empty,

    /// A row had no cells.
    #[error("row {row} is empty")]
    EmptyRow {
        /// Index of the offending row.
        row: usize,
    },

    /// A row's length differed from the first row's.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Its actual length.
        len: usize,
        /// The length of the first row.
        expected: usize,
    },

    /// A cell would land outside the board.
    #[error("coordinate {coord} is outside a {rows}x{cols} board")]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
        /// Board row count.
        rows: usize,
        /// Board column count.
        cols: usize,
    },
}

/// An immutable rectangular board of cells, one generation of the
/// simulation.
///
/// ```
/// use rust_life::{Cell, Coord, Grid};
///
/// let grid = Grid::from_rows(vec![
///     vec![Cell::Dead, Cell::Alive],
///     vec![Cell::Alive, Cell::Dead],
/// ]).unwrap();
///
/// assert_eq!(grid.dimensions(), (2, 2));
/// assert_eq!(grid.cell_at(Coord::new(0, 1)), Cell::Alive);
/// assert_eq!(grid.population(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Cells in row-major order, exactly `rows * cols` long.
    cells: Vector<Cell>,
}

impl Grid {
    /// Build a grid from rows of cells.
    ///
    /// Fails if there are no rows, any row is empty, or row lengths
    /// differ. A malformed input is never truncated or padded.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let expected = first.len();

        let mut cells = Vector::new();
        for (row, row_cells) in rows.iter().enumerate() {
            if row_cells.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if row_cells.len() != expected {
                return Err(GridError::RaggedRow {
                    row,
                    len: row_cells.len(),
                    expected,
                });
            }
            cells.extend(row_cells.iter().copied());
        }

        Ok(Self {
            rows: rows.len(),
            cols: expected,
            cells,
        })
    }

    /// Build from a row-major cell buffer.
    ///
    /// Fast path for `rules::step`; the caller guarantees non-zero
    /// dimensions and `cells.len() == rows * cols`.
    pub(crate) fn from_row_major(rows: usize, cols: usize, cells: Vector<Cell>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Grid with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: Cell) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::Empty);
        }
        if cols == 0 {
            return Err(GridError::EmptyRow { row: 0 });
        }
        let cells = std::iter::repeat(fill).take(rows * cols).collect();
        Ok(Self { rows, cols, cells })
    }

    /// All-dead grid.
    pub fn dead(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::filled(rows, cols, Cell::Dead)
    }

    /// Random soup: each cell is independently alive with probability
    /// `density`.
    ///
    /// Deterministic for a given RNG seed. Panics if `density` is outside
    /// `[0, 1]`.
    pub fn random(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut BoardRng,
    ) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::Empty);
        }
        if cols == 0 {
            return Err(GridError::EmptyRow { row: 0 });
        }
        let cells = (0..rows * cols)
            .map(|_| Cell::from_alive(rng.gen_bool(density)))
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Board dimensions as `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `at`.
    ///
    /// Panics if `at` is out of bounds - out-of-range access is a caller
    /// bug, not a data case. Use [`Grid::get`] for a checked lookup.
    #[must_use]
    pub fn cell_at(&self, at: Coord) -> Cell {
        self.get(at).unwrap_or_else(|| {
            panic!(
                "coordinate {} out of bounds for {}x{} grid",
                at, self.rows, self.cols
            )
        })
    }

    /// Checked lookup: `None` if `at` is off the board.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Cell> {
        if at.row < self.rows && at.col < self.cols {
            self.cells.get(at.row * self.cols + at.col).copied()
        } else {
            None
        }
    }

    /// Check if the cell at `at` is alive.
    ///
    /// Panics out of bounds, like [`Grid::cell_at`].
    #[must_use]
    pub fn is_alive(&self, at: Coord) -> bool {
        self.cell_at(at).is_alive()
    }

    /// Copy of this grid with the cell at `at` replaced.
    ///
    /// The receiver is unchanged; structural sharing keeps the copy cheap.
    pub fn with_cell(&self, at: Coord, cell: Cell) -> Result<Self, GridError> {
        if at.row >= self.rows || at.col >= self.cols {
            return Err(GridError::OutOfBounds {
                coord: at,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.update(at.row * self.cols + at.col, cell),
        })
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterate all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (rows, cols) = self.dimensions();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// Iterate the cells of one row, left to right.
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        assert!(
            row < self.rows,
            "row {} out of bounds for {} rows",
            row,
            self.rows
        );
        let start = row * self.cols;
        self.cells.iter().skip(start).take(self.cols).copied()
    }
}
