//! Shobu move ordering for alpha-beta pruning.

use crate::board::Board;
use crate::rules::is_push;
use crate::searcher::MoveOrderer;
use crate::shobu_move::Move;

/// Puts pushes (including removals off the edge) ahead of quiet moves, keeping
/// generation order within each group.
#[derive(Clone, Default, Debug)]
pub struct ShobuMoveOrderer;

impl MoveOrderer<Board, Move> for ShobuMoveOrderer {
    #[inline]
    fn order_moves(&self, moves: &mut [Move], state: &Board) {
        moves.sort_by_cached_key(|mv| !is_push(state, mv));
    }
}
