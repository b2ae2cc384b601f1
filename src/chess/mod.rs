//! Chess pieces and their movement patterns on the 8x8 board.

pub mod direction;
pub mod layout;
pub mod movegen;
pub mod piece;
