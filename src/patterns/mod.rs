//! Named seed patterns.
//!
//! A small library of classic Life patterns - still lifes, oscillators,
//! a spaceship, a methuselah - plus a registry for lookup by name.
//! Pattern cells are `(row, col)` offsets from a stamp origin; stamping
//! produces a fresh board with only the pattern alive.

use rustc_hash::FxHashMap;

use crate::board::{Cell, Coord, Grid, GridError};

/// A named arrangement of live cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Human-readable name ("Blinker", "Glider", ...).
    pub name: &'static str,
    /// Live cells as offsets from the stamp origin.
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding-box size as `(rows, cols)`.
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }

    /// Stamp this pattern onto a fresh dead `rows` x `cols` board, with
    /// the pattern origin at `origin`.
    ///
    /// Fails if any live cell would fall outside the board; cells are
    /// never silently clipped.
    pub fn on_grid(&self, rows: usize, cols: usize, origin: Coord) -> Result<Grid, GridError> {
        let mut grid = Grid::dead(rows, cols)?;
        for &(d_row, d_col) in self.cells {
            let at = Coord::new(origin.row + d_row, origin.col + d_col);
            grid = grid.with_cell(at, Cell::Alive)?;
        }
        Ok(grid)
    }
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// Period-2 oscillator, vertical phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

/// Period-2 oscillator built from two blocks.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
    ],
};

/// The classic diagonal spaceship.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Methuselah: five cells that run for over a thousand generations
/// before stabilizing (on an unbounded board).
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// The built-in patterns.
pub const BUILTIN: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

/// Pattern lookup by name.
///
/// ```
/// use rust_life::patterns::PatternRegistry;
///
/// let registry = PatternRegistry::builtin();
/// let glider = registry.get("Glider").unwrap();
/// assert_eq!(glider.size(), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternRegistry {
    patterns: FxHashMap<&'static str, Pattern>,
}

impl PatternRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with [`BUILTIN`].
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &pattern in BUILTIN {
            registry.register(pattern);
        }
        registry
    }

    /// Register a pattern.
    ///
    /// Panics if a pattern with the same name already exists.
    pub fn register(&mut self, pattern: Pattern) {
        if self.patterns.contains_key(pattern.name) {
            panic!("Pattern {:?} already registered", pattern.name);
        }
        self.patterns.insert(pattern.name, pattern);
    }

    /// Look up a pattern by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    /// Number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over all registered patterns.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::step;
    use crate::sim::play;
    use crate::text::serialize;

    #[test]
    fn test_pattern_size() {
        assert_eq!(BLOCK.size(), (2, 2));
        assert_eq!(BLINKER.size(), (3, 1));
        assert_eq!(TOAD.size(), (2, 4));
        assert_eq!(GLIDER.size(), (3, 3));
    }

    #[test]
    fn test_stamp_places_cells() {
        let grid = BLINKER.on_grid(3, 3, Coord::new(0, 1)).unwrap();
        assert_eq!(serialize(&grid), ".x.\n.x.\n.x.");
    }

    #[test]
    fn test_stamp_out_of_bounds_rejected() {
        let result = BLOCK.on_grid(2, 2, Coord::new(1, 1));
        assert_eq!(
            result,
            Err(GridError::OutOfBounds {
                coord: Coord::new(1, 2),
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = BLOCK.on_grid(4, 4, Coord::new(1, 1)).unwrap();
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_beacon_period_two() {
        let grid = BEACON.on_grid(6, 6, Coord::new(1, 1)).unwrap();
        let sequence = play(&grid, 2).unwrap();

        assert_ne!(sequence[1], sequence[0]);
        assert_eq!(sequence[2], sequence[0]);
    }

    #[test]
    fn test_glider_population_is_stable() {
        // Away from the edges a glider keeps exactly five live cells.
        let grid = GLIDER.on_grid(10, 10, Coord::new(1, 1)).unwrap();
        let sequence = play(&grid, 4).unwrap();

        for generation in &sequence {
            assert_eq!(generation.population(), 5);
        }
    }

    #[test]
    fn test_registry_lookup() {
        let registry = PatternRegistry::builtin();

        assert_eq!(registry.len(), BUILTIN.len());
        assert!(registry.get("Blinker").is_some());
        assert!(registry.get("Glider").is_some());
        assert!(registry.get("Nonesuch").is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut registry = PatternRegistry::builtin();
        registry.register(BLINKER);
    }
}
