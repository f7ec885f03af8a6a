//! The transition rule: one generation at a time.

use im::Vector;

use super::neighbors::count_live_neighbors;
use crate::board::{Cell, Grid};

/// Compute the next generation.
///
/// The rule reads only from the input grid, so every cell updates
/// simultaneously:
///
/// - exactly 3 live neighbors: alive (birth, and survival at 3),
/// - exactly 2 live neighbors and currently alive: alive,
/// - anything else: dead.
///
/// Total over valid grids, pure, and dimension-preserving.
///
/// ```
/// use rust_life::{parse, serialize, step};
///
/// let vertical = parse(".x.\n.x.\n.x.").unwrap();
/// let horizontal = step(&vertical);
/// assert_eq!(serialize(&horizontal), "...\nxxx\n...");
/// ```
#[must_use]
pub fn step(grid: &Grid) -> Grid {
    let mut next = Vector::new();
    for at in grid.coords() {
        let count = count_live_neighbors(grid, at);
        let cell = match (grid.is_alive(at), count) {
            (_, 3) => Cell::Alive,
            (true, 2) => Cell::Alive,
            _ => Cell::Dead,
        };
        next.push_back(cell);
    }
    Grid::from_row_major(grid.rows(), grid.cols(), next)
}
