use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::board::direction::Direction;
use crate::board::error::BoardError;
use crate::board::quadrant::Quadrant;
use crate::board::Square;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([0-3])([a-d][1-4]) +([0-3])([a-d][1-4]) +(ne|nw|se|sw|n|e|s|w)([12])$")
        .expect("MOVE_RE regex should be valid")
});

pub type MoveList = SmallVec<[Move; 64]>;

/// A full Shobu turn: a passive sub-move on one of the mover's home quadrants
/// followed by an aggressive sub-move on a quadrant of the other shade, both with
/// the same direction and distance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    passive_quadrant: Quadrant,
    passive_from: Square,
    aggressive_quadrant: Quadrant,
    aggressive_from: Square,
    direction: Direction,
    distance: u8,
}

impl Move {
    pub fn new(
        passive_quadrant: Quadrant,
        passive_from: Square,
        aggressive_quadrant: Quadrant,
        aggressive_from: Square,
        direction: Direction,
        distance: u8,
    ) -> Self {
        Self {
            passive_quadrant,
            passive_from,
            aggressive_quadrant,
            aggressive_from,
            direction,
            distance,
        }
    }

    pub fn passive_quadrant(&self) -> Quadrant {
        self.passive_quadrant
    }

    pub fn passive_from(&self) -> Square {
        self.passive_from
    }

    pub fn aggressive_quadrant(&self) -> Quadrant {
        self.aggressive_quadrant
    }

    pub fn aggressive_from(&self) -> Square {
        self.aggressive_from
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn distance(&self) -> u8 {
        self.distance
    }

    /// Landing cell of the passive stone, `None` if it would leave the quadrant.
    pub fn passive_to(&self) -> Option<Square> {
        let (d_row, d_col) = self.direction.delta();
        self.passive_from.shift(d_row, d_col, self.distance)
    }

    /// Landing cell of the aggressive stone, `None` if it would leave the quadrant.
    pub fn aggressive_to(&self) -> Option<Square> {
        let (d_row, d_col) = self.direction.delta();
        self.aggressive_from.shift(d_row, d_col, self.distance)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}{} {}{}",
            self.passive_quadrant,
            self.passive_from,
            self.aggressive_quadrant,
            self.aggressive_from,
            self.direction,
            self.distance
        )
    }
}

impl FromStr for Move {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidMoveNotationError {
            input: input.to_string(),
        };
        let normalized = input.trim().to_ascii_lowercase();
        let caps = MOVE_RE.captures(&normalized).ok_or_else(invalid)?;

        let quadrant = |i: usize| {
            caps[i]
                .parse::<u8>()
                .ok()
                .and_then(Quadrant::from_id)
                .ok_or_else(invalid)
        };
        let square = |i: usize| Square::from_algebraic(&caps[i]).ok_or_else(invalid);

        let direction = caps[5].parse::<Direction>().map_err(|_| invalid())?;
        let distance = caps[6].parse::<u8>().map_err(|_| invalid())?;

        Ok(Move::new(
            quadrant(1)?,
            square(2)?,
            quadrant(3)?,
            square(4)?,
            direction,
            distance,
        ))
    }
}

/// Parses a move in text notation. Panics on bad input, so it is meant for tests.
#[macro_export]
macro_rules! shobu_move {
    ($notation:expr) => {
        $notation
            .parse::<$crate::shobu_move::Move>()
            .expect("shobu_move! expects valid move notation")
    };
}
