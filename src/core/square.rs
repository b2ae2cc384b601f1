use crate::chess::piece::{Piece, Player};
use crate::core::coord::Coord;

/// One board cell. The coordinate is fixed at construction; only the occupant changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    coord: Coord,
    occupant: Option<Piece>,
}

impl Square {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            occupant: None,
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.coord.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.coord.y
    }

    #[inline]
    pub fn piece(&self) -> Option<Piece> {
        self.occupant
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// True iff the square holds a piece owned by `player`.
    #[inline]
    pub fn is_owned_by(&self, player: Player) -> bool {
        self.occupant.is_some_and(|p| p.player() == player)
    }

    /// Replaces the occupant, returning whatever was there.
    pub(crate) fn set_piece(&mut self, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.occupant, piece)
    }
}
