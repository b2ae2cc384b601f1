use crate::chess::piece::{PieceKind, Player};
use crate::core::board::Board;
use crate::error::ChessError;
use crate::state::GameState;

use super::attacks::is_in_check;
use super::legality::has_any_legal_move;

/// Sanity checks for a position handed in from outside, with `to_move` on turn.
///
/// Each side needs exactly one king, and the side that just moved must not be left in check.
pub fn validate(board: &Board, to_move: Player) -> Result<(), ChessError> {
    for player in [Player::White, Player::Black] {
        let kings = board
            .pieces_of(player)
            .filter(|(_, p)| p.kind() == PieceKind::King)
            .count();
        match kings {
            0 => return Err(ChessError::MissingKing { player }),
            1 => {}
            _ => {
                return Err(ChessError::InvalidPosition {
                    reason: "more than one king for a side",
                })
            }
        }
    }
    if is_in_check(board, to_move.opponent())? {
        return Err(ChessError::InvalidPosition {
            reason: "the side not on turn is in check",
        });
    }
    Ok(())
}

/// Status of the game with `to_move` about to play.
///
/// | any legal move | in check | result               |
/// |----------------|----------|----------------------|
/// | yes            | yes      | `<colour>Check`      |
/// | no             | yes      | `<colour>Checkmate`  |
/// | no             | no       | `Stalemate`          |
/// | yes            | no       | `Playing`            |
pub fn evaluate(board: &mut Board, to_move: Player) -> Result<GameState, ChessError> {
    let mobile = has_any_legal_move(board, to_move)?;
    let in_check = is_in_check(board, to_move)?;
    Ok(match (mobile, in_check) {
        (true, true) => GameState::check(to_move),
        (false, true) => GameState::checkmate(to_move),
        (false, false) => GameState::Stalemate,
        (true, false) => GameState::Playing,
    })
}
