//! Pseudo-legal move generation.
//!
//! Nothing here looks at the mover's own king; the self-check filter lives in
//! [`crate::rules::legality`].

use std::collections::BTreeSet;

use crate::chess::direction::{Direction, ALL, DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL};
use crate::chess::layout::pawn_rank;
use crate::chess::piece::{Piece, PieceKind, Player};
use crate::core::board::{Board, BOARD_SIZE};
use crate::core::coord::Coord;

/// Destination squares, iterated in board-scan order.
pub type MoveSet = BTreeSet<Coord>;

/// Walks from `from` in `dir` for at most `range` steps, adding reachable squares to `out`.
///
/// Empty squares are added and the walk continues. An enemy piece is added and stops the
/// walk. A friendly piece stops the walk without being added.
pub fn ray_walk(
    board: &Board,
    from: Coord,
    player: Player,
    dir: Direction,
    range: i32,
    out: &mut MoveSet,
) {
    let step = dir.delta();
    for i in 1..=range {
        let to = from + step * i;
        if !board.contains(to) {
            break;
        }
        match board.piece_at(to) {
            None => {
                out.insert(to);
            }
            Some(other) => {
                if other.player() != player {
                    out.insert(to);
                }
                break;
            }
        }
    }
}

fn ray_walk_all(
    board: &Board,
    from: Coord,
    player: Player,
    dirs: &[Direction],
    range: i32,
) -> MoveSet {
    let mut out = MoveSet::new();
    for &dir in dirs {
        ray_walk(board, from, player, dir, range, &mut out);
    }
    out
}

/// Pseudo-legal destinations for whatever stands on `from`. Empty when `from` is empty or
/// off the board.
pub fn pseudo_legal_moves(board: &Board, from: Coord) -> MoveSet {
    match board.piece_at(from) {
        Some(piece) => piece_moves(board, piece, from),
        None => MoveSet::new(),
    }
}

/// Pseudo-legal destinations for `piece` standing on `from`.
pub fn piece_moves(board: &Board, piece: Piece, from: Coord) -> MoveSet {
    let player = piece.player();
    match piece.kind() {
        PieceKind::Rook => ray_walk_all(board, from, player, &ORTHOGONAL, BOARD_SIZE),
        PieceKind::Bishop => ray_walk_all(board, from, player, &DIAGONAL, BOARD_SIZE),
        PieceKind::Queen => ray_walk_all(board, from, player, &ALL, BOARD_SIZE),
        PieceKind::King => ray_walk_all(board, from, player, &ALL, 1),
        PieceKind::Knight => knight_moves(board, from, player),
        PieceKind::Pawn => pawn_moves(board, from, player),
    }
}

fn knight_moves(board: &Board, from: Coord, player: Player) -> MoveSet {
    KNIGHT_JUMPS
        .iter()
        .map(|&d| from + d)
        .filter(|&to| board.contains(to))
        .filter(|&to| board.piece_at(to).map_or(true, |p| p.player() != player))
        .collect()
}

fn pawn_directions(player: Player) -> (Direction, [Direction; 2]) {
    match player {
        Player::Black => (Direction::South, [Direction::SouthWest, Direction::SouthEast]),
        Player::White => (Direction::North, [Direction::NorthWest, Direction::NorthEast]),
    }
}

fn pawn_moves(board: &Board, from: Coord, player: Player) -> MoveSet {
    let (advance, attacks) = pawn_directions(player);

    // Rank-based: a pawn off its starting row is treated as having moved.
    let range = if from.y == pawn_rank(player) { 2 } else { 1 };

    let mut out: MoveSet = ray_walk_all(board, from, player, &[advance], range)
        .into_iter()
        .filter(|&to| board.piece_at(to).is_none())
        .collect();

    out.extend(
        ray_walk_all(board, from, player, &attacks, 1)
            .into_iter()
            .filter(|&to| board.piece_at(to).is_some()),
    );
    out
}
