use thiserror::Error;

use crate::chess::piece::Player;

/// Caller contract violations and broken engine invariants.
///
/// Rejected user actions (clicking an empty square, an illegal destination, ...) are not
/// errors; the game manager reports those as `Ok(false)`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A lookup outside the 8x8 board.
    #[error("can not get square at invalid coordinates: ({x}, {y})")]
    InvalidCoordinates { x: i32, y: i32 },

    /// A piece was placed onto an occupied square while setting up a position.
    #[error("square ({x}, {y}) is already occupied")]
    SquareOccupied { x: i32, y: i32 },

    /// A custom position failed the sanity checks: one king per side, and the side not on
    /// turn must not be in check.
    #[error("invalid position: {reason}")]
    InvalidPosition { reason: &'static str },

    /// The board has no king for `player`; the position is corrupt.
    #[error("could not find the {player} king on the board")]
    MissingKing { player: Player },
}
