//! Shobu implementation of the game-agnostic search traits.

pub mod implementation;
mod move_orderer;

#[cfg(test)]
mod tests;

pub use implementation::{
    find_winning_move, mcts_best_move, search_best_move, ShobuEvaluator, ShobuMoveGenerator,
};
pub use move_orderer::ShobuMoveOrderer;
