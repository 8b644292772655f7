//! Game-agnostic search: the traits a game implements, cooperative time control,
//! iterative-deepening alpha-beta and UCT Monte Carlo Tree Search.

pub mod alpha_beta;
pub mod mcts;
pub mod time_control;
mod traits;

use thiserror::Error;

pub use time_control::{allocate_move_time, TimeControl};
pub use traits::{
    Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, MoveOrderer, NoOpMoveOrderer,
};

/// Scores at or beyond this magnitude are proven wins or losses.
pub const DECISIVE_SCORE: i16 = i16::MAX / 4;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("time ran out before the first search depth completed")]
    TimeExhaustedBeforeFirstDepth,
}
