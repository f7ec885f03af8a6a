//! The text format: the only persisted board representation.
//!
//! Plain text, one line per row, one character per cell, rows separated
//! by `'\n'`, no header - dimensions are inferred from line count and
//! line length. The two recognized characters are configured by
//! [`Charset`] and default to `'x'` (alive) and `'.'` (dead); anything
//! else is rejected with a position-carrying error.
//!
//! `serialize_with` and `parse_with` are exact inverses for the same
//! charset.

pub mod charset;
pub mod parse;
pub mod serialize;

pub use charset::Charset;
pub use parse::{parse, parse_with, ParseError};
pub use serialize::{serialize, serialize_with};
