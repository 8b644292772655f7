pub mod color;
pub mod direction;
pub mod error;
pub mod quadrant;
pub mod zobrist;

mod display;


pub use common::bitboard::{Bitboard, Square};

use color::Color;
use error::BoardError;
use quadrant::Quadrant;
use zobrist::ZOBRIST;

/// Most stones a single colour can have in one quadrant.
pub const MAX_STONES_PER_QUADRANT: u32 = 4;

/// Represents the full state of a Shobu game: the stones of both colours in each
/// of the four quadrants, the side to move, and the counters used by the draw rules.
///
/// `Board` is a small `Copy` value. Applying a move produces a new board, so search
/// branches never share mutable state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    // indexed by [quadrant][color]
    stones: [[Bitboard; 2]; 4],
    turn: Color,
    turn_count: u32,
    quiet_turns: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            stones: [[Bitboard::EMPTY; 2]; 4],
            turn: Color::Black,
            turn_count: 0,
            quiet_turns: 0,
        }
    }
}

impl Board {
    /// An empty board with Black to move.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::new();
        for quadrant in Quadrant::ALL {
            board.stones[quadrant.index()][Color::Black.index()] = Bitboard::ROW_1;
            board.stones[quadrant.index()][Color::White.index()] = Bitboard::ROW_4;
        }
        board
    }

    pub fn stones(&self, quadrant: Quadrant, color: Color) -> Bitboard {
        self.stones[quadrant.index()][color.index()]
    }

    pub fn occupied(&self, quadrant: Quadrant) -> Bitboard {
        let [black, white] = self.stones[quadrant.index()];
        black | white
    }

    pub fn count(&self, quadrant: Quadrant, color: Color) -> u32 {
        self.stones(quadrant, color).count_ones()
    }

    pub fn get(&self, quadrant: Quadrant, square: Square) -> Option<Color> {
        Color::ALL
            .iter()
            .copied()
            .find(|&color| self.stones(quadrant, color).contains(square))
    }

    pub fn put(&mut self, quadrant: Quadrant, square: Square, color: Color) -> Result<(), BoardError> {
        if self.occupied(quadrant).contains(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { quadrant, square });
        }
        if self.count(quadrant, color) >= MAX_STONES_PER_QUADRANT {
            return Err(BoardError::TooManyStonesError { quadrant });
        }
        let stones = &mut self.stones[quadrant.index()][color.index()];
        *stones = stones.with(square);
        Ok(())
    }

    pub fn remove(&mut self, quadrant: Quadrant, square: Square) -> Option<Color> {
        let color = self.get(quadrant, square)?;
        let stones = &mut self.stones[quadrant.index()][color.index()];
        *stones = stones.without(square);
        Some(color)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.opposite();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    /// Number of moves applied since the starting position.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Consecutive moves whose aggressive sub-move pushed nothing.
    pub fn quiet_turns(&self) -> u16 {
        self.quiet_turns
    }

    pub fn set_quiet_turns(&mut self, quiet_turns: u16) {
        self.quiet_turns = quiet_turns;
    }

    pub fn position_hash(&self) -> u64 {
        ZOBRIST.hash(self)
    }

    /// Relocates a stone inside one quadrant; `to == None` takes it off the grid.
    pub(crate) fn move_stone(&mut self, quadrant: Quadrant, color: Color, from: Square, to: Option<Square>) {
        let stones = &mut self.stones[quadrant.index()][color.index()];
        let mut moved = stones.without(from);
        if let Some(to) = to {
            moved = moved.with(to);
        }
        *stones = moved;
    }

    /// Closes the current turn: flips the side to move and updates both counters.
    pub(crate) fn end_turn(&mut self, pushed: bool) {
        self.turn = self.turn.opposite();
        self.turn_count += 1;
        self.quiet_turns = if pushed {
            0
        } else {
            self.quiet_turns.saturating_add(1)
        };
    }
}
