//! Deterministic random number generation for seeded boards.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG behind `Grid::random`.
///
/// Uses ChaCha8 for speed while keeping output reproducible: the same
/// seed always produces the same board.
///
/// ```
/// use rust_life::{BoardRng, Grid};
///
/// let mut rng1 = BoardRng::new(42);
/// let mut rng2 = BoardRng::new(42);
///
/// let a = Grid::random(8, 8, 0.5, &mut rng1).unwrap();
/// let b = Grid::random(8, 8, 0.5, &mut rng2).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug)]
pub struct BoardRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BoardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with the given probability of `true`.
    ///
    /// Panics if `probability` is outside `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = BoardRng::new(42);
        let mut rng2 = BoardRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_bool(0.5), rng2.gen_bool(0.5));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = BoardRng::new(1);
        let mut rng2 = BoardRng::new(2);

        let seq1: Vec<_> = (0..64).map(|_| rng1.gen_bool(0.5)).collect();
        let seq2: Vec<_> = (0..64).map(|_| rng2.gen_bool(0.5)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_degenerate_probabilities() {
        let mut rng = BoardRng::new(7);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn test_seed_accessor() {
        assert_eq!(BoardRng::new(99).seed(), 99);
    }
}
