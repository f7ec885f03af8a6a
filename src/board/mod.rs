//! Board model: cells, coordinates, and the immutable grid.
//!
//! This module contains the data the rest of the engine operates on.
//! Nothing here knows about the transition rule or the text format.

pub mod cell;
pub mod coord;
pub mod grid;
pub mod rng;

pub use cell::Cell;
pub use coord::Coord;
pub use grid::{Grid, GridError};
pub use rng::BoardRng;
