//! Simulation runner: generation sequences from an initial board.
//!
//! The runner holds no state beyond the current grid and the remaining
//! step count. It runs a fixed number of generations and stops; it does
//! not detect stable, oscillating, or extinct boards.

pub mod runner;

pub use runner::{generations, play, Generations, SimError};
