use thiserror::Error;

use crate::board::color::Color;
use crate::shobu_move::Move;

#[derive(Error, Debug, PartialEq)]
pub enum RulesError {
    #[error("Illegal move {mv}")]
    IllegalMove { mv: Move },
    #[error("{turn} has no legal moves but the game is not over")]
    NoLegalMoves { turn: Color },
}
