use crate::board::color::Color;
use crate::board::quadrant::Quadrant;
use crate::board::Board;
use crate::rules::{game_ending, GameEnding};

use self::evaluation_tables::{CENTRALITY_BONUS, STONE_VALUES, WEAKEST_QUADRANT_PENALTY};

mod evaluation_tables;

// These scores are significantly larger than any heuristic value, and therefore
// will incentivize the engine to select for (or against) its own (or the
// opponent's) win condition.
pub const BLACK_WINS: i16 = i16::MIN / 2;
pub const WHITE_WINS: i16 = i16::MAX / 2;

// Scale of the logistic curve used to turn scores into win probabilities.
const PROBABILITY_SCALE: f64 = 250.0;

/// Returns the score of the board from White's (the maximizing player's) side.
/// Wins found with more `remaining_depth` are worth more, so sooner wins are
/// preferred and losses are delayed.
#[inline(always)]
pub fn score(board: &Board, remaining_depth: u8) -> i16 {
    match game_ending(board) {
        Some(GameEnding::Victory(Color::White)) => WHITE_WINS + remaining_depth as i16,
        Some(GameEnding::Victory(Color::Black)) => BLACK_WINS - remaining_depth as i16,
        Some(GameEnding::Draw) => 0,
        None => board_heuristic_score(board),
    }
}

/// Returns the score of the board from the perspective of `perspective`.
pub fn evaluate(board: &Board, perspective: Color) -> i16 {
    let white_score = score(board, 0);
    if perspective.maximize_score() {
        white_score
    } else {
        -white_score
    }
}

/// Squashes `evaluate` into `[0, 1]`: the estimated chance that `perspective`
/// wins from here. Decided games map to exactly 0, 0.5 or 1.
pub fn win_probability(board: &Board, perspective: Color) -> f64 {
    match game_ending(board) {
        Some(GameEnding::Victory(winner)) if winner == perspective => 1.0,
        Some(GameEnding::Victory(_)) => 0.0,
        Some(GameEnding::Draw) => 0.5,
        None => {
            let value = evaluate(board, perspective) as f64;
            1.0 / (1.0 + (-value / PROBABILITY_SCALE).exp())
        }
    }
}

#[inline(always)]
pub fn board_heuristic_score(board: &Board) -> i16 {
    player_score(board, Color::White) - player_score(board, Color::Black)
}

fn player_score(board: &Board, color: Color) -> i16 {
    let mut total = 0;
    let mut weakest = u32::MAX;

    for quadrant in Quadrant::ALL {
        let stones = board.stones(quadrant, color);
        let count = stones.count_ones();
        weakest = weakest.min(count);

        total += STONE_VALUES[count as usize];
        for sq in stones.squares() {
            total += CENTRALITY_BONUS[sq.index() as usize];
        }
    }

    total - WEAKEST_QUADRANT_PENALTY[weakest as usize]
}
