//! Move generation for Shobu.
//!
//! Moves are produced in a fixed order: passive quadrant, aggressive quadrant,
//! aggressive stone, direction, distance and passive stone, each ascending.
//! Callers (tests, the MCTS shuffle seed, the alpha-beta fallback) rely on it.

use rayon::prelude::*;

use crate::board::color::Color;
use crate::board::direction::Direction;
use crate::board::quadrant::Quadrant;
use crate::board::{Bitboard, Board, Square};
use crate::shobu_move::{Move, MoveList};

use super::{game_ending, play_unchecked};

pub const DISTANCES: [u8; 2] = [1, 2];

/// Below this many moves `count_positions` stays on the current thread.
const PARALLEL_MOVE_THRESHOLD: usize = 10;

/// What the aggressive sub-move does to an opponent stone, if anything.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum AggressiveOutcome {
    Quiet,
    /// The opponent stone on `from` ends on `to`, or leaves the grid when `to` is `None`.
    Push { from: Square, to: Option<Square> },
}

/// True when every cell from `from` (exclusive) to the landing cell is on the grid
/// and empty. The passive sub-move never pushes.
pub(crate) fn passive_path_clear(
    board: &Board,
    quadrant: Quadrant,
    from: Square,
    direction: Direction,
    distance: u8,
) -> bool {
    let occupied = board.occupied(quadrant);
    let (d_row, d_col) = direction.delta();
    (1..=distance).all(|step| match from.shift(d_row, d_col, step) {
        Some(sq) => !occupied.contains(sq),
        None => false,
    })
}

/// Resolves the aggressive sub-move of `mover` from `from`, or `None` when it is
/// illegal: landing off the grid, an own stone in the way, two opponent stones in
/// the way, or a pushed stone that would land on an occupied cell.
pub(crate) fn aggressive_outcome(
    board: &Board,
    quadrant: Quadrant,
    from: Square,
    direction: Direction,
    distance: u8,
    mover: Color,
) -> Option<AggressiveOutcome> {
    let (d_row, d_col) = direction.delta();
    let landing = from.shift(d_row, d_col, distance)?;
    let own = board.stones(quadrant, mover);
    let opponent = board.stones(quadrant, mover.opposite());

    let mut pushed = None;
    for step in 1..=distance {
        let sq = from.shift(d_row, d_col, step)?;
        if own.contains(sq) {
            return None;
        }
        if opponent.contains(sq) {
            if pushed.is_some() {
                return None;
            }
            pushed = Some(sq);
        }
    }

    match pushed {
        None => Some(AggressiveOutcome::Quiet),
        Some(pushed_from) => {
            let beyond = landing.shift(d_row, d_col, 1);
            match beyond {
                Some(sq) if board.occupied(quadrant).contains(sq) => None,
                _ => Some(AggressiveOutcome::Push {
                    from: pushed_from,
                    to: beyond,
                }),
            }
        }
    }
}

/// Own stones in `quadrant` that can make a passive sub-move of this shape.
fn passive_sources(board: &Board, quadrant: Quadrant, mover: Color, direction: Direction, distance: u8) -> Bitboard {
    board
        .stones(quadrant, mover)
        .squares()
        .filter(|&sq| passive_path_clear(board, quadrant, sq, direction, distance))
        .fold(Bitboard::EMPTY, |acc, sq| acc.with(sq))
}

/// Every legal move for the side to move, ignoring whether the game has ended.
pub fn generate_moves(board: &Board) -> MoveList {
    let mover = board.turn();
    let mut moves = MoveList::new();

    for passive_quadrant in Quadrant::homes(mover) {
        // [direction][distance - 1]
        let mut sources = [[Bitboard::EMPTY; 2]; 8];
        for (d, &direction) in Direction::ALL.iter().enumerate() {
            for &distance in DISTANCES.iter() {
                sources[d][distance as usize - 1] =
                    passive_sources(board, passive_quadrant, mover, direction, distance);
            }
        }

        for aggressive_quadrant in passive_quadrant.aggressive_partners() {
            for aggressive_from in board.stones(aggressive_quadrant, mover).squares() {
                for (d, &direction) in Direction::ALL.iter().enumerate() {
                    for &distance in DISTANCES.iter() {
                        let passive = sources[d][distance as usize - 1];
                        if passive.is_empty() {
                            continue;
                        }
                        if aggressive_outcome(board, aggressive_quadrant, aggressive_from, direction, distance, mover)
                            .is_none()
                        {
                            continue;
                        }
                        for passive_from in passive.squares() {
                            moves.push(Move::new(
                                passive_quadrant,
                                passive_from,
                                aggressive_quadrant,
                                aggressive_from,
                                direction,
                                distance,
                            ));
                        }
                    }
                }
            }
        }
    }

    moves
}

/// Counts the leaf positions reachable in exactly `depth` moves. Finished games
/// count as a single leaf. Used for perft-style checks and benchmarks.
pub fn count_positions(board: &Board, depth: u8) -> usize {
    if depth == 0 || game_ending(board).is_some() {
        return 1;
    }

    let moves = generate_moves(board);
    if depth == 1 {
        return moves.len();
    }

    if moves.len() >= PARALLEL_MOVE_THRESHOLD {
        moves
            .par_iter()
            .map(|mv| count_positions(&play_unchecked(board, mv), depth - 1))
            .sum()
    } else {
        moves
            .iter()
            .map(|mv| count_positions(&play_unchecked(board, mv), depth - 1))
            .sum()
    }
}
