use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bitboard::bitboard::Bitboard;

static ALGEBRAIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-dA-D])([1-4])$").expect("ALGEBRAIC_RE regex should be valid"));

/// One cell of a 4x4 quadrant, `index = 4 * row + col` with row 0 at the bottom.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Square(u8);

pub const A1: Square = Square(0);
pub const B1: Square = Square(1);
pub const C1: Square = Square(2);
pub const D1: Square = Square(3);
pub const A2: Square = Square(4);
pub const B2: Square = Square(5);
pub const C2: Square = Square(6);
pub const D2: Square = Square(7);
pub const A3: Square = Square(8);
pub const B3: Square = Square(9);
pub const C3: Square = Square(10);
pub const D3: Square = Square(11);
pub const A4: Square = Square(12);
pub const B4: Square = Square(13);
pub const C4: Square = Square(14);
pub const D4: Square = Square(15);

#[rustfmt::skip]
pub const ORDERED: [Square; 16] = [
    A1, B1, C1, D1,
    A2, B2, C2, D2,
    A3, B3, C3, D3,
    A4, B4, C4, D4,
];

impl Square {
    pub const SIDE: i8 = 4;

    pub fn new(index: u8) -> Self {
        debug_assert!(index < 16, "square index out of range: {}", index);
        Self(index)
    }

    pub fn from_row_col(row: u8, col: u8) -> Self {
        Self::new(row * 4 + col)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn row(self) -> u8 {
        self.0 / 4
    }

    pub fn col(self) -> u8 {
        self.0 % 4
    }

    pub fn bitboard(self) -> Bitboard {
        Bitboard(1 << self.0)
    }

    /// Moves `steps` times by `(d_row, d_col)`; `None` once the path leaves the quadrant.
    pub fn shift(self, d_row: i8, d_col: i8, steps: u8) -> Option<Self> {
        let row = self.row() as i8 + d_row * steps as i8;
        let col = self.col() as i8 + d_col * steps as i8;
        if (0..Self::SIDE).contains(&row) && (0..Self::SIDE).contains(&col) {
            Some(Self::from_row_col(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let caps = ALGEBRAIC_RE.captures(algebraic)?;
        let col = match caps[1].to_ascii_lowercase().as_str() {
            "a" => 0,
            "b" => 1,
            "c" => 2,
            "d" => 3,
            _ => return None,
        };
        let row = caps[2].parse::<u8>().ok()? - 1;
        Some(Self::from_row_col(row, col))
    }

    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        format!("{}{}", file, self.row() + 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
