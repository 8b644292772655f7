use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::color::Color;
use super::quadrant::Quadrant;
use super::Board;
use crate::rules::QUIET_TURN_LIMIT;

// Zobrist hashing
// * One number for each colour at each cell of each quadrant ( 4 * 2 * 16 )
// * One number to indicate the side to move is white
// * One number per quiet-turn count up to the draw limit ( 50 + 1 ), so that
//   positions at different distances from the quiet-turn draw never share a
//   transposition entry
// Total numbers: 4 * 2 * 16 + 1 + 51 = 180
//
// The table is generated from a fixed seed so hashes are stable between runs.

const STONE_NUMBERS: usize = 4 * 2 * 16;
const WHITE_TO_MOVE: usize = STONE_NUMBERS;
const QUIET_NUMBERS: usize = QUIET_TURN_LIMIT as usize + 1;
const TOTAL_NUMBERS: usize = STONE_NUMBERS + 1 + QUIET_NUMBERS;
const ZOBRIST_SEED: u64 = 0x5480_b0ba_5eed_2024;

pub static ZOBRIST: Lazy<Zobrist> = Lazy::new(Zobrist::new);

pub struct Zobrist {
    numbers: [u64; TOTAL_NUMBERS],
}

impl Zobrist {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut numbers = [0; TOTAL_NUMBERS];
        for num in numbers.iter_mut() {
            *num = rng.gen();
        }
        Self { numbers }
    }

    pub fn hash(&self, board: &Board) -> u64 {
        let mut hash = 0;
        for quadrant in Quadrant::ALL {
            for color in Color::ALL {
                for sq in board.stones(quadrant, color).squares() {
                    hash ^= self.numbers[index_of(quadrant, color, sq.index())];
                }
            }
        }
        if board.turn() == Color::White {
            hash ^= self.numbers[WHITE_TO_MOVE];
        }
        let quiet = board.quiet_turns().min(QUIET_TURN_LIMIT) as usize;
        hash ^= self.numbers[WHITE_TO_MOVE + 1 + quiet];
        hash
    }
}

// maps (quadrant, color, cell) onto the flat table
fn index_of(quadrant: Quadrant, color: Color, cell: u8) -> usize {
    (quadrant.index() * 2 + color.index()) * 16 + cell as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::bitboard::square::A1;

    #[test]
    fn test_hash_depends_on_side_to_move() {
        let board = Board::starting_position();
        let mut other = board;
        other.toggle_turn();
        assert_ne!(ZOBRIST.hash(&board), ZOBRIST.hash(&other));
    }

    #[test]
    fn test_hash_is_stable_for_equal_positions() {
        let mut a = Board::new();
        let mut b = Board::new();
        a.put(Quadrant::WhiteDark, A1, Color::Black).unwrap();
        b.put(Quadrant::WhiteDark, A1, Color::Black).unwrap();
        assert_eq!(ZOBRIST.hash(&a), ZOBRIST.hash(&b));
        assert_ne!(ZOBRIST.hash(&a), ZOBRIST.hash(&Board::new()));
    }

    #[test]
    fn test_hash_depends_on_quiet_turns() {
        let board = Board::starting_position();
        let mut near_draw = board;
        near_draw.set_quiet_turns(QUIET_TURN_LIMIT - 1);
        let mut drawn = board;
        drawn.set_quiet_turns(QUIET_TURN_LIMIT);
        let mut past_limit = board;
        past_limit.set_quiet_turns(QUIET_TURN_LIMIT + 5);

        assert_ne!(ZOBRIST.hash(&board), ZOBRIST.hash(&near_draw));
        assert_ne!(ZOBRIST.hash(&near_draw), ZOBRIST.hash(&drawn));
        assert_eq!(ZOBRIST.hash(&drawn), ZOBRIST.hash(&past_limit));
    }
}
