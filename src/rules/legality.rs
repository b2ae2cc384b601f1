//! Self-check filtering on top of pseudo-legal generation.

use tracing::trace;

use crate::chess::movegen::{pseudo_legal_moves, MoveSet};
use crate::chess::piece::Player;
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::error::ChessError;

use super::attacks::is_in_check;

/// Would moving the piece on `from` to `to` leave its owner in check?
///
/// Plays the move on `board`, probes, and puts both cells back exactly as they were,
/// including the identity of any captured piece. Returns `Ok(false)` when `from` is empty.
pub fn is_in_check_after_move(
    board: &mut Board,
    from: Coord,
    to: Coord,
) -> Result<bool, ChessError> {
    let Some(mover) = board.square_at(from)?.piece() else {
        return Ok(false);
    };

    let snap = board.snapshot(from, to)?;
    board.relocate(from, to)?;
    let probe = is_in_check(board, mover.player());
    board.restore(snap)?;

    let check = probe?;
    trace!(%from, %to, check, "look-ahead");
    Ok(check)
}

/// Pseudo-legal moves from `from` minus those that leave the mover in check.
pub fn legal_moves(board: &mut Board, from: Coord) -> Result<MoveSet, ChessError> {
    let mut out = MoveSet::new();
    for to in pseudo_legal_moves(board, from) {
        if !is_in_check_after_move(board, from, to)? {
            out.insert(to);
        }
    }
    Ok(out)
}

/// True iff `player` has at least one legal move anywhere on the board.
pub fn has_any_legal_move(board: &mut Board, player: Player) -> Result<bool, ChessError> {
    let origins: Vec<Coord> = board.pieces_of(player).map(|(c, _)| c).collect();
    for from in origins {
        if !legal_moves(board, from)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}
