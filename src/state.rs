use std::fmt;

use crate::chess::piece::Player;

/// Game status, recomputed after every committed move.
///
/// The colour in `*Check` / `*Checkmate` names the side that is in check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    WhiteCheck,
    BlackCheck,
    WhiteCheckmate,
    BlackCheckmate,
    Stalemate,
}

impl GameState {
    pub fn check(player: Player) -> Self {
        match player {
            Player::White => GameState::WhiteCheck,
            Player::Black => GameState::BlackCheck,
        }
    }

    pub fn checkmate(player: Player) -> Self {
        match player {
            Player::White => GameState::WhiteCheckmate,
            Player::Black => GameState::BlackCheckmate,
        }
    }

    /// True for plain check; checkmate is reported by [`GameState::is_over`].
    pub fn is_check(self) -> bool {
        matches!(self, GameState::WhiteCheck | GameState::BlackCheck)
    }

    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameState::WhiteCheckmate | GameState::BlackCheckmate | GameState::Stalemate
        )
    }

    /// The winner, if the game ended in checkmate.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::WhiteCheckmate => Some(Player::Black),
            GameState::BlackCheckmate => Some(Player::White),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameState::Playing => "Playing...",
            GameState::BlackCheck => "Black is in check!",
            GameState::WhiteCheck => "White is in check!",
            GameState::BlackCheckmate => "White wins, Black is in checkmate!",
            GameState::WhiteCheckmate => "Black wins, White is in checkmate!",
            GameState::Stalemate => "No one wins, stalemate!",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
