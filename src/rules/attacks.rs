use crate::chess::movegen::piece_moves;
use crate::chess::piece::{PieceKind, Player};
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::error::ChessError;

/// Where `player`'s king stands. A missing king means the position is corrupt.
pub fn king_square(board: &Board, player: Player) -> Result<Coord, ChessError> {
    board
        .pieces_of(player)
        .find(|(_, p)| p.kind() == PieceKind::King)
        .map(|(c, _)| c)
        .ok_or(ChessError::MissingKing { player })
}

/// True iff some piece of `player`'s opponent pseudo-legally reaches `player`'s king.
///
/// Uses raw movement patterns only; filtering attacker moves for self-check here would
/// recurse back into this probe.
pub fn is_in_check(board: &Board, player: Player) -> Result<bool, ChessError> {
    let king = king_square(board, player)?;
    Ok(is_attacked_by(board, king, player.opponent()))
}

/// True iff any piece of `attacker` has `target` among its pseudo-legal destinations.
pub fn is_attacked_by(board: &Board, target: Coord, attacker: Player) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, piece)| piece_moves(board, piece, from).contains(&target))
}
