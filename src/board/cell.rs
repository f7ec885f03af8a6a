//! Cell state for a single board position.

use serde::{Deserialize, Serialize};

/// State of one board position.
///
/// A cell is either `Alive` or `Dead` - nothing else, and no internal
/// structure. How a cell reads and writes as text is decided by
/// `text::Charset`, not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// A live cell.
    Alive,
    /// A dead cell.
    #[default]
    Dead,
}

impl Cell {
    /// Check if this cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Build a cell from a liveness flag.
    #[must_use]
    pub const fn from_alive(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
