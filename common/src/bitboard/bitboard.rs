use core::fmt;
use std::{
    fmt::{Display, Formatter},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use crate::bitboard::square::Square;

/// Occupancy of one 4x4 quadrant. Bit `i` is the cell with index `i`
/// (`4 * row + col`, row 0 at the bottom).
#[derive(Clone, Copy, PartialEq, Debug, PartialOrd, Eq, Ord, Hash, Default)]
pub struct Bitboard(pub u16);

impl Bitboard {
    pub const EMPTY: Self = Self(0x0000);
    pub const ALL: Self = Self(0xFFFF);

    pub const ROW_1: Self = Self(0x000F);
    pub const ROW_2: Self = Self(0x00F0);
    pub const ROW_3: Self = Self(0x0F00);
    pub const ROW_4: Self = Self(0xF000);

    /// The four central cells (b2, c2, b3, c3).
    pub const CENTER: Self = Self(0x0660);

    pub fn overlaps(&self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn contains(&self, square: Square) -> bool {
        self.overlaps(square.bitboard())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn with(self, square: Square) -> Self {
        self | square.bitboard()
    }

    pub fn without(self, square: Square) -> Self {
        self & !square.bitboard()
    }

    /// Iterates over the occupied squares in ascending index order.
    pub fn squares(self) -> Squares {
        Squares(self.0)
    }
}

/// Iterator returned by [`Bitboard::squares`].
pub struct Squares(u16);

impl Iterator for Squares {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square::new(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Squares {}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut result = String::new();
        for row in (0..4).rev() {
            for col in 0..4 {
                let cell = match self.contains(Square::from_row_col(row, col)) {
                    true => 'X',
                    false => '.',
                };
                result.push(cell);
            }
            result.push('\n');
        }
        write!(f, "{}", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_iterates_in_index_order() {
        let board = Bitboard::ROW_1.with(Square::new(9));
        let indexes: Vec<u8> = board.squares().map(|sq| sq.index()).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 9]);
    }

    #[test]
    fn test_with_and_without() {
        let sq = Square::new(5);
        let board = Bitboard::EMPTY.with(sq);
        assert!(board.contains(sq));
        assert_eq!(board.count_ones(), 1);
        assert!(board.without(sq).is_empty());
    }

    #[test]
    fn test_center_mask() {
        let names: Vec<String> = Bitboard::CENTER
            .squares()
            .map(|sq| sq.to_algebraic())
            .collect();
        assert_eq!(names, vec!["b2", "c2", "b3", "c3"]);
    }

    #[test]
    fn test_display() {
        let rendered = format!("{}", Bitboard::ROW_4);
        assert_eq!(rendered, "XXXX\n....\n....\n....\n");
    }
}
