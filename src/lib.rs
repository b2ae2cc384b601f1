//! A two-player, local chess rule engine.
//!
//! Tracks the board, generates moves per piece type, filters out moves that would leave the
//! mover in check, and drives a select-then-move turn loop that reports check, checkmate
//! and stalemate. Rendering and input mapping are left to the caller.

pub mod core;
pub mod chess;
pub mod rules;
pub mod state;
pub mod game;
pub mod error;

pub use crate::core::board::Board;
pub use crate::core::coord::Coord;
pub use crate::core::square::Square;
pub use crate::chess::piece::{Piece, PieceId, PieceKind, Player};
pub use crate::error::ChessError;
pub use crate::game::GameManager;
pub use crate::state::GameState;
