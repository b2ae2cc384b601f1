use crate::chess::piece::{PieceKind, Player};
use crate::core::board::BOARD_SIZE;
use crate::core::coord::Coord;

/// Back-rank order from x = 0 to x = 7, identical for both players.
pub const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row holding `player`'s pieces at the start.
#[inline]
pub fn home_rank(player: Player) -> i32 {
    match player {
        Player::Black => 0,
        Player::White => BOARD_SIZE - 1,
    }
}

/// Row holding `player`'s pawns at the start. A pawn anywhere else counts as moved.
#[inline]
pub fn pawn_rank(player: Player) -> i32 {
    match player {
        Player::Black => 1,
        Player::White => BOARD_SIZE - 2,
    }
}

/// Row on which `player`'s pawns turn into queens: the opponent's home rank.
#[inline]
pub fn promotion_rank(player: Player) -> i32 {
    home_rank(player.opponent())
}

/// The 32 pieces of the standard starting position, in scan order.
pub fn standard_pieces() -> impl Iterator<Item = (Coord, PieceKind, Player)> {
    [Player::Black, Player::White]
        .into_iter()
        .flat_map(|player| {
            let back = (0..BOARD_SIZE)
                .map(move |x| (Coord::new(x, home_rank(player)), BACK_RANK[x as usize], player));
            let pawns = (0..BOARD_SIZE)
                .map(move |x| (Coord::new(x, pawn_rank(player)), PieceKind::Pawn, player));
            back.chain(pawns)
        })
}
