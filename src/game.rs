use tracing::{debug, error, info, warn};

use crate::chess::layout::promotion_rank;
use crate::chess::movegen::MoveSet;
use crate::chess::piece::{PieceKind, Player};
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::square::Square;
use crate::error::ChessError;
use crate::rules::legality::legal_moves;
use crate::rules::status;
use crate::state::GameState;

/// One two-player game: the board, whose turn it is, and the current selection.
///
/// Input arrives as square clicks: [`GameManager::select`] picks up a piece of the side to
/// move, [`GameManager::move_to`] drops it. Both return `Ok(false)` for rejected actions;
/// `Err` is reserved for off-board coordinates and corrupt positions.
///
/// Games are plain values; any number can coexist.
#[derive(Debug, Clone)]
pub struct GameManager {
    board: Board,
    current_player: Player,
    state: GameState,
    selected: Option<Coord>,
    possible_moves: MoveSet,
}

impl GameManager {
    /// A new game from the standard position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::White,
            state: GameState::Playing,
            selected: None,
            possible_moves: MoveSet::new(),
        }
    }

    /// A game starting from an arbitrary position with `to_move` on turn.
    ///
    /// The status is evaluated for `to_move`, so a position can start in check or already
    /// be decided. Positions without exactly one king per side, or with the side not on turn
    /// in check, are rejected.
    pub fn from_position(mut board: Board, to_move: Player) -> Result<Self, ChessError> {
        status::validate(&board, to_move).map_err(logged)?;
        let state = status::evaluate(&mut board, to_move).map_err(logged)?;
        Ok(Self {
            board,
            current_player: to_move,
            state,
            selected: None,
            possible_moves: MoveSet::new(),
        })
    }

    /// Throws the current game away and starts over from the standard position.
    pub fn restart(&mut self) {
        *self = Self::new();
        info!("game restarted");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn selected_square(&self) -> Option<&Square> {
        self.selected.and_then(|c| self.board.square_at(c).ok())
    }

    /// Legal destinations for the selected piece; empty when nothing is selected.
    #[inline]
    pub fn selected_possible_moves(&self) -> &MoveSet {
        &self.possible_moves
    }

    /// Selects the piece on `at` if it belongs to the side to move.
    ///
    /// Empty squares and enemy pieces are rejected with `Ok(false)` and leave any existing
    /// selection untouched.
    pub fn select(&mut self, at: Coord) -> Result<bool, ChessError> {
        let square = self.board.square_at(at).map_err(logged)?;
        match square.piece() {
            None => {
                debug!(%at, "select rejected: empty square");
                Ok(false)
            }
            Some(piece) if piece.player() != self.current_player => {
                debug!(%at, owner = %piece.player(), "select rejected: not the mover's piece");
                Ok(false)
            }
            Some(piece) => {
                let moves = legal_moves(&mut self.board, at).map_err(logged)?;
                debug!(%at, kind = ?piece.kind(), moves = moves.len(), "selected");
                self.selected = Some(at);
                self.possible_moves = moves;
                Ok(true)
            }
        }
    }

    /// Moves the selected piece to `dest` if that is one of its legal destinations.
    ///
    /// The selection is cleared whatever the outcome. On success the move is committed,
    /// promotion applied, the status re-evaluated for the opponent and the turn passed.
    pub fn move_to(&mut self, dest: Coord) -> Result<bool, ChessError> {
        let selected = self.selected.take();
        let legal = std::mem::take(&mut self.possible_moves);
        self.board.square_at(dest).map_err(logged)?;

        let Some(from) = selected else {
            debug!(%dest, "move rejected: nothing selected");
            return Ok(false);
        };
        if !legal.contains(&dest) {
            debug!(%from, %dest, "move rejected: not a legal destination");
            return Ok(false);
        }

        self.commit(from, dest).map_err(logged)?;
        Ok(true)
    }

    /// Applies the move and advances the turn. On error the board is put back as it was.
    fn commit(&mut self, from: Coord, to: Coord) -> Result<(), ChessError> {
        let snap = self.board.snapshot(from, to)?;
        match self.apply(from, to) {
            Ok(state) => {
                if state != self.state {
                    info!(%state, "game status changed");
                }
                self.state = state;
                self.current_player = self.current_player.opponent();
                Ok(())
            }
            Err(err) => {
                self.board.restore(snap)?;
                Err(err)
            }
        }
    }

    fn apply(&mut self, from: Coord, to: Coord) -> Result<GameState, ChessError> {
        let captured = self.board.relocate(from, to)?;
        debug!(
            player = %self.current_player,
            %from,
            %to,
            capture = captured.is_some(),
            "moved"
        );

        if let Some(piece) = self.board.piece_at(to) {
            if piece.kind() == PieceKind::Pawn && to.y == promotion_rank(piece.player()) {
                self.board.replace(to, PieceKind::Queen, piece.player())?;
                debug!(%to, player = %piece.player(), "pawn promoted to queen");
            }
        }

        status::evaluate(&mut self.board, self.current_player.opponent())
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

fn logged(err: ChessError) -> ChessError {
    match &err {
        ChessError::MissingKing { .. } => error!(%err, "engine invariant violated"),
        _ => warn!(%err, "invalid call"),
    }
    err
}
