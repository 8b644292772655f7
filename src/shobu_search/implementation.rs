//! Shobu-specific trait implementations for the searchers.

use crate::board::color::Color;
use crate::board::Board;
use crate::evaluate;
use crate::rules::{self, game_ending, GameEnding};
use crate::searcher::alpha_beta::{alpha_beta_search, SearchContext, SearchOutcome};
use crate::searcher::mcts::{mcts_search, MctsConfig, MctsOutcome};
use crate::searcher::{
    Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, SearchError, TimeControl,
};
use crate::shobu_move::{Move, MoveList};

use super::move_orderer::ShobuMoveOrderer;

impl GameState for Board {
    #[inline]
    fn position_hash(&self) -> u64 {
        Board::position_hash(self)
    }

    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.turn().maximize_score()
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        game_ending(self).is_some()
    }
}

impl GameMove for Move {
    type State = Board;

    #[inline]
    fn apply(&self, state: &Board) -> Board {
        rules::play_unchecked(state, self)
    }

    #[inline]
    fn is_tactical(&self, state: &Board) -> bool {
        rules::is_push(state, self)
    }
}

impl MoveCollection<Move> for MoveList {}

#[derive(Clone, Default, Debug)]
pub struct ShobuMoveGenerator;

impl MoveGenerator<Board> for ShobuMoveGenerator {
    type Move = Move;
    type MoveList = MoveList;

    /// Moves for the side to move; none once the game is decided.
    #[inline]
    fn generate_moves(&self, state: &Board) -> MoveList {
        if game_ending(state).is_some() {
            MoveList::new()
        } else {
            rules::generate_moves(state)
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct ShobuEvaluator;

impl Evaluator<Board> for ShobuEvaluator {
    #[inline]
    fn evaluate(&self, state: &Board, remaining_depth: u8) -> i16 {
        evaluate::score(state, remaining_depth)
    }

    fn win_probability(&self, state: &Board, maximizing: bool) -> f64 {
        let perspective = if maximizing { Color::White } else { Color::Black };
        evaluate::win_probability(state, perspective)
    }
}

/// Iterative-deepening alpha-beta from `board` until `time_control` stops it
/// or the context's maximum depth is reached.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext<Move>,
    board: &Board,
    time_control: &TimeControl,
) -> Result<SearchOutcome<Move>, SearchError> {
    alpha_beta_search(
        context,
        board,
        &ShobuMoveGenerator,
        &ShobuEvaluator,
        &ShobuMoveOrderer,
        time_control,
    )
}

#[must_use = "search returns the best move found"]
pub fn mcts_best_move(
    board: &Board,
    config: &MctsConfig,
    time_control: &TimeControl,
) -> Result<MctsOutcome<Move>, SearchError> {
    mcts_search(board, &ShobuMoveGenerator, &ShobuEvaluator, config, time_control)
}

/// First legal move, in generation order, that wins the game on the spot.
pub fn find_winning_move(board: &Board) -> Option<Move> {
    let mover = board.turn();
    ShobuMoveGenerator
        .generate_moves(board)
        .into_iter()
        .filter(|mv| rules::is_push(board, mv))
        .find(|mv| {
            game_ending(&rules::play_unchecked(board, mv)) == Some(GameEnding::Victory(mover))
        })
}
