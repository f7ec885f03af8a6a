//! The simulation runner: repeated application of the transition rule.

use log::debug;

use crate::board::Grid;
use crate::rules::step;

/// Errors from [`play`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The requested number of generations was negative.
    #[error("invalid move count: {0}")]
    InvalidMoveCount(i64),
}

/// Lazy stream of generations starting from an initial grid.
///
/// The first item is the initial grid unchanged; item `k` is [`step`]
/// applied `k` times. The stream never ends - bound it with `take`, or
/// use [`play`] for an eagerly materialized sequence.
#[derive(Clone, Debug)]
pub struct Generations {
    current: Grid,
    started: bool,
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.started {
            self.current = step(&self.current);
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }
}

/// Iterate generations lazily from `initial`.
#[must_use]
pub fn generations(initial: &Grid) -> Generations {
    Generations {
        current: initial.clone(),
        started: false,
    }
}

/// Produce the sequence of `moves + 1` grids: the initial grid followed
/// by each successive generation.
///
/// Element 0 is `initial` unchanged; element `k` is [`step`] applied `k`
/// times. Pure and restartable: the same arguments always yield the same
/// sequence. Fails if `moves` is negative.
///
/// ```
/// use rust_life::{parse, play};
///
/// let blinker = parse(".x.\n.x.\n.x.").unwrap();
/// let sequence = play(&blinker, 2).unwrap();
///
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence[0], blinker);
/// // Period-2 oscillator: two steps return to the start.
/// assert_eq!(sequence[2], sequence[0]);
/// ```
pub fn play(initial: &Grid, moves: i64) -> Result<Vec<Grid>, SimError> {
    if moves < 0 {
        return Err(SimError::InvalidMoveCount(moves));
    }

    debug!(
        "playing {} generations on a {}x{} board",
        moves,
        initial.rows(),
        initial.cols()
    );
    Ok(generations(initial).take(moves as usize + 1).collect())
}
