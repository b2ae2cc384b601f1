use crate::chess::layout;
use crate::chess::piece::{Piece, PieceId, PieceKind, Player};
use crate::core::coord::Coord;
use crate::core::square::Square;
use crate::error::ChessError;

/// Number of squares along each edge.
pub const BOARD_SIZE: i32 = 8;

const N: usize = BOARD_SIZE as usize;

/// The 8x8 board. Every cell is a [`Square`] from construction on; cells are indexed `[y][x]`.
///
/// Pieces created on a board get a fresh [`PieceId`]; cloning a board keeps the ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; N]; N],
}

/// Saved occupants of two cells, produced by [`Board::snapshot`] for a reversible look-ahead.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    cells: [(Coord, Option<Piece>); 2],
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (c, kind, player) in layout::standard_pieces() {
            let piece = spawn(kind, player);
            board.squares[c.y as usize][c.x as usize].set_piece(Some(piece));
        }
        board
    }

    /// A board with all 64 squares present and unoccupied.
    pub fn empty() -> Self {
        let squares = std::array::from_fn(|y| {
            std::array::from_fn(|x| Square::new(Coord::new(x as i32, y as i32)))
        });
        Self { squares }
    }

    #[inline]
    pub fn is_coordinates_valid(&self, x: i32, y: i32) -> bool {
        (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.is_coordinates_valid(c.x, c.y)
    }

    pub fn square(&self, x: i32, y: i32) -> Result<&Square, ChessError> {
        if !self.is_coordinates_valid(x, y) {
            return Err(ChessError::InvalidCoordinates { x, y });
        }
        Ok(&self.squares[y as usize][x as usize])
    }

    pub fn square_at(&self, c: Coord) -> Result<&Square, ChessError> {
        self.square(c.x, c.y)
    }

    fn square_mut(&mut self, c: Coord) -> Result<&mut Square, ChessError> {
        if !self.contains(c) {
            return Err(ChessError::InvalidCoordinates { x: c.x, y: c.y });
        }
        Ok(&mut self.squares[c.y as usize][c.x as usize])
    }

    /// Occupant of `c`; `None` for empty or off-board coordinates.
    #[inline]
    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        self.square_at(c).ok().and_then(Square::piece)
    }

    /// All 64 squares, row 0 first, left to right within a row.
    pub fn iter(&self) -> impl Iterator<Item = &Square> + '_ {
        self.squares.iter().flat_map(|row| row.iter())
    }

    /// Squares holding a piece of `player`, in scan order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.iter()
            .filter_map(|sq| sq.piece().map(|p| (sq.coord(), p)))
            .filter(move |(_, p)| p.player() == player)
    }

    pub fn piece_count(&self) -> usize {
        self.iter().filter(|sq| !sq.is_empty()).count()
    }

    /// Puts a freshly created piece on an empty square.
    pub fn place(
        &mut self,
        c: Coord,
        kind: PieceKind,
        player: Player,
    ) -> Result<Piece, ChessError> {
        if !self.square_at(c)?.is_empty() {
            return Err(ChessError::SquareOccupied { x: c.x, y: c.y });
        }
        let piece = spawn(kind, player);
        self.square_mut(c)?.set_piece(Some(piece));
        Ok(piece)
    }

    /// Overwrites whatever stands on `c` with a freshly created piece.
    pub(crate) fn replace(
        &mut self,
        c: Coord,
        kind: PieceKind,
        player: Player,
    ) -> Result<Piece, ChessError> {
        self.square_at(c)?;
        let piece = spawn(kind, player);
        self.square_mut(c)?.set_piece(Some(piece));
        Ok(piece)
    }

    pub fn remove(&mut self, c: Coord) -> Result<Option<Piece>, ChessError> {
        Ok(self.square_mut(c)?.set_piece(None))
    }

    /// Moves the occupant of `from` onto `to` without any rule checks.
    ///
    /// Returns the piece previously standing on `to`, if any.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> Result<Option<Piece>, ChessError> {
        self.square_mut(to)?;
        let moving = self.square_mut(from)?.set_piece(None);
        Ok(self.square_mut(to)?.set_piece(moving))
    }

    /// Saves the occupants of `a` and `b`.
    pub fn snapshot(&self, a: Coord, b: Coord) -> Result<Snapshot, ChessError> {
        Ok(Snapshot {
            cells: [(a, self.square_at(a)?.piece()), (b, self.square_at(b)?.piece())],
        })
    }

    /// Puts back exactly the occupants recorded in `snap`.
    pub fn restore(&mut self, snap: Snapshot) -> Result<(), ChessError> {
        // Reverse order so restoring a snapshot of (c, c) is still exact.
        for (c, piece) in snap.cells.into_iter().rev() {
            self.square_mut(c)?.set_piece(piece);
        }
        Ok(())
    }
}

fn spawn(kind: PieceKind, player: Player) -> Piece {
    Piece::new(PieceId::next(), kind, player)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
