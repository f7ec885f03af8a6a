//! Character mapping between cells and text.

use serde::{Deserialize, Serialize};

use crate::board::Cell;

/// The two characters the text format recognizes.
///
/// Defaults to `'x'` for alive and `'.'` for dead. The markers must
/// differ and neither may be the row separator `'\n'`.
///
/// ```
/// use rust_life::{Cell, Charset};
///
/// let charset = Charset::default().with_alive('#').with_dead(' ');
/// assert_eq!(charset.encode(Cell::Alive), '#');
/// assert_eq!(charset.decode(' '), Some(Cell::Dead));
/// assert_eq!(charset.decode('?'), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charset {
    /// Character for a live cell.
    pub alive: char,
    /// Character for a dead cell.
    pub dead: char,
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            alive: 'x',
            dead: '.',
        }
    }
}

impl Charset {
    /// Create a charset from its two markers.
    ///
    /// Panics if the markers coincide or either is `'\n'`.
    #[must_use]
    pub fn new(alive: char, dead: char) -> Self {
        assert!(alive != dead, "alive and dead markers must differ");
        assert!(
            alive != '\n' && dead != '\n',
            "cell markers cannot be the row separator"
        );
        Self { alive, dead }
    }

    /// Replace the alive marker.
    #[must_use]
    pub fn with_alive(self, alive: char) -> Self {
        Self::new(alive, self.dead)
    }

    /// Replace the dead marker.
    #[must_use]
    pub fn with_dead(self, dead: char) -> Self {
        Self::new(self.alive, dead)
    }

    /// The character for `cell`.
    #[must_use]
    pub fn encode(self, cell: Cell) -> char {
        if cell.is_alive() {
            self.alive
        } else {
            self.dead
        }
    }

    /// The cell for `ch`, or `None` if `ch` is neither marker.
    #[must_use]
    pub fn decode(self, ch: char) -> Option<Cell> {
        if ch == self.alive {
            Some(Cell::Alive)
        } else if ch == self.dead {
            Some(Cell::Dead)
        } else {
            None
        }
    }
}
