//! The Shobu rules engine: legal moves, move application and the end of the game.

pub mod error;
pub mod move_generator;

#[cfg(test)]
mod tests;

use crate::board::color::Color;
use crate::board::quadrant::Quadrant;
use crate::board::Board;
use crate::shobu_move::{Move, MoveList};

use error::RulesError;
use move_generator::{aggressive_outcome, passive_path_clear, AggressiveOutcome};

pub use move_generator::{count_positions, generate_moves};

/// Consecutive moves without a push after which the game is drawn.
pub const QUIET_TURN_LIMIT: u16 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnding {
    Victory(Color),
    Draw,
}

/// Reports how the game ended, or `None` while it is still going.
///
/// A colour loses as soon as one quadrant holds none of its stones. If a board
/// somehow has both colours wiped from a quadrant, the player who just moved wins.
pub fn game_ending(board: &Board) -> Option<GameEnding> {
    let last_mover = board.turn().opposite();
    for loser in [last_mover.opposite(), last_mover] {
        if Quadrant::ALL.iter().any(|&q| board.stones(q, loser).is_empty()) {
            return Some(GameEnding::Victory(loser.opposite()));
        }
    }

    if board.quiet_turns() >= QUIET_TURN_LIMIT {
        return Some(GameEnding::Draw);
    }

    None
}

/// Legal moves for the side to move. Empty once the game is over; an ongoing
/// game without any legal move is reported as an error rather than a pass.
pub fn legal_moves(board: &Board) -> Result<MoveList, RulesError> {
    if game_ending(board).is_some() {
        return Ok(MoveList::new());
    }

    let moves = generate_moves(board);
    if moves.is_empty() {
        return Err(RulesError::NoLegalMoves { turn: board.turn() });
    }
    Ok(moves)
}

pub fn is_legal(board: &Board, mv: &Move) -> bool {
    if game_ending(board).is_some() {
        return false;
    }

    let mover = board.turn();
    let passive_quadrant = mv.passive_quadrant();
    let aggressive_quadrant = mv.aggressive_quadrant();

    if passive_quadrant.home_of() != mover
        || !passive_quadrant.aggressive_partners().contains(&aggressive_quadrant)
        || !(1..=2).contains(&mv.distance())
    {
        return false;
    }

    if !board.stones(passive_quadrant, mover).contains(mv.passive_from())
        || !board.stones(aggressive_quadrant, mover).contains(mv.aggressive_from())
    {
        return false;
    }

    passive_path_clear(board, passive_quadrant, mv.passive_from(), mv.direction(), mv.distance())
        && aggressive_outcome(
            board,
            aggressive_quadrant,
            mv.aggressive_from(),
            mv.direction(),
            mv.distance(),
            mover,
        )
        .is_some()
}

/// True when the aggressive sub-move of `mv` pushes an opponent stone.
pub fn is_push(board: &Board, mv: &Move) -> bool {
    matches!(
        aggressive_outcome(
            board,
            mv.aggressive_quadrant(),
            mv.aggressive_from(),
            mv.direction(),
            mv.distance(),
            board.turn(),
        ),
        Some(AggressiveOutcome::Push { .. })
    )
}

/// Validates `mv` and returns the board after it. The input board is untouched.
pub fn apply_move(board: &Board, mv: &Move) -> Result<Board, RulesError> {
    if !is_legal(board, mv) {
        return Err(RulesError::IllegalMove { mv: *mv });
    }
    Ok(play_unchecked(board, mv))
}

/// Plays a move known to be legal, e.g. one produced by `generate_moves`.
pub fn play_unchecked(board: &Board, mv: &Move) -> Board {
    let mover = board.turn();
    let outcome = aggressive_outcome(
        board,
        mv.aggressive_quadrant(),
        mv.aggressive_from(),
        mv.direction(),
        mv.distance(),
        mover,
    );
    debug_assert!(outcome.is_some(), "play_unchecked called with illegal move {}", mv);

    let mut next = *board;
    next.move_stone(mv.passive_quadrant(), mover, mv.passive_from(), mv.passive_to());

    let pushed = match outcome {
        Some(AggressiveOutcome::Push { from, to }) => {
            next.move_stone(mv.aggressive_quadrant(), mover.opposite(), from, to);
            true
        }
        _ => false,
    };
    next.move_stone(mv.aggressive_quadrant(), mover, mv.aggressive_from(), mv.aggressive_to());
    next.end_turn(pushed);
    next
}
