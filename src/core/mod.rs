//! Board primitives.
//!
//! - [`coord`]: integer coordinates with row-major ordering.
//! - [`square`]: a single cell and its optional occupant.
//! - [`board`]: the fixed 8x8 arena of squares, piece-id allocation and the two-cell
//!   snapshot used for look-ahead.

pub mod board;
pub mod coord;
pub mod square;
