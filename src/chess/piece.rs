use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::White => "White",
            Player::Black => "Black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// Opaque piece handle, unique across every board in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u32);

static NEXT_PIECE_ID: AtomicU32 = AtomicU32::new(0);

impl PieceId {
    /// A fresh id that no other piece has been given.
    pub(crate) fn next() -> Self {
        Self(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// A piece instance on a board.
///
/// Equality is identity: two pawns of the same colour compare unequal because the board
/// hands every piece its own [`PieceId`].
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    player: Player,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, player: Player) -> Self {
        Self { id, kind, player }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn is(&self, kind: PieceKind, player: Player) -> bool {
        self.kind == kind && self.player == player
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}
