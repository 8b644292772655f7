use thiserror::Error;

use super::quadrant::Quadrant;
use common::bitboard::Square;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a stone on {square} of quadrant {quadrant}, it is already occupied")]
    SquareOccupiedBoardPutError { quadrant: Quadrant, square: Square },
    #[error("Quadrant {quadrant} already holds the maximum number of stones of that color")]
    TooManyStonesError { quadrant: Quadrant },
    #[error("Invalid board diagram: {msg}")]
    InvalidDiagramError { msg: String },
    #[error("Invalid move notation `{input}`, expected e.g. `0a1 1a1 n1`")]
    InvalidMoveNotationError { input: String },
}
