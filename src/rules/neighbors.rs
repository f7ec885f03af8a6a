//! Live-neighbor counting on the bounded board.
//!
//! The board does not wrap. A cell on an edge simply has fewer than eight
//! in-bounds neighbors, and off-board positions contribute nothing to the
//! count.

use smallvec::SmallVec;

use crate::board::{Coord, Grid};

/// The eight neighbor offsets as `(d_row, d_col)`.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds coordinates adjacent to `at`, including diagonals.
///
/// Between 3 (corner of a large board) and 8 (interior cell) entries;
/// a 1x1 board has none.
#[must_use]
pub fn neighbor_coords(grid: &Grid, at: Coord) -> SmallVec<[Coord; 8]> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| at.offset(d_row, d_col))
        .filter(|&c| grid.get(c).is_some())
        .collect()
}

/// Count the live neighbors of `at`, always in `0..=8`.
#[must_use]
pub fn count_live_neighbors(grid: &Grid, at: Coord) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| at.offset(d_row, d_col))
        .filter_map(|c| grid.get(c))
        .filter(|c| c.is_alive())
        .count() as u8
}
