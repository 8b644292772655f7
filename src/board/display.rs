use std::fmt;

use super::color::Color;
use super::error::BoardError;
use super::quadrant::Quadrant;
use super::{Board, Square};

// Top half of a diagram holds White's home quadrants, bottom half Black's.
const DIAGRAM_LAYOUT: [[Quadrant; 2]; 2] = [
    [Quadrant::WhiteLight, Quadrant::WhiteDark],
    [Quadrant::BlackLight, Quadrant::BlackDark],
];

fn stone_char(stone: Option<Color>) -> char {
    match stone {
        Some(Color::Black) => 'b',
        Some(Color::White) => 'w',
        None => '.',
    }
}

impl Board {
    /// Builds a board from an 8x8 diagram of `b`, `w` and `.` read from the top-left
    /// corner. Whitespace is ignored. The side to move is Black.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let cells: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(BoardError::InvalidDiagramError {
                msg: format!("expected 64 cells, got {}", cells.len()),
            });
        }

        let mut board = Board::new();
        for (i, &c) in cells.iter().enumerate() {
            let color = match c {
                'b' | 'B' => Color::Black,
                'w' | 'W' => Color::White,
                '.' => continue,
                other => {
                    return Err(BoardError::InvalidDiagramError {
                        msg: format!("unexpected character `{}`", other),
                    })
                }
            };
            let (line, column) = (i / 8, i % 8);
            let quadrant = DIAGRAM_LAYOUT[line / 4][column / 4];
            let row = 3 - (line % 4) as u8;
            let col = (column % 4) as u8;
            board.put(quadrant, Square::from_row_col(row, col), color)?;
        }
        Ok(board)
    }

    /// The inverse of `from_diagram`: eight lines of two quadrants each.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(8 * 10);
        for pair in DIAGRAM_LAYOUT.iter() {
            for row in (0..4).rev() {
                for (i, &quadrant) in pair.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    for col in 0..4 {
                        out.push(stone_char(self.get(quadrant, Square::from_row_col(row, col))));
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (half, pair) in DIAGRAM_LAYOUT.iter().enumerate() {
            writeln!(f, "    [{}]          [{}]", pair[0], pair[1])?;
            for row in (0..4u8).rev() {
                write!(f, "{} ", row + 1)?;
                for &quadrant in pair.iter() {
                    for col in 0..4 {
                        let stone = self.get(quadrant, Square::from_row_col(row, col));
                        write!(f, " {}", stone_char(stone))?;
                    }
                    write!(f, "   ")?;
                }
                writeln!(f)?;
            }
            if half == 0 {
                writeln!(f)?;
            }
        }
        writeln!(f, "   a b c d    a b c d")?;
        write!(f, "{} to move, turn {}", self.turn(), self.turn_count())
    }
}

/// Builds a `Board` from a diagram of bare tokens, e.g.
///
/// ```ignore
/// let board = shobu_position! {
///     wwww wwww
///     .... ....
///     .... ....
///     bbbb bbbb
///     wwww wwww
///     .... ....
///     .... ....
///     bbbb bbbb
/// };
/// ```
#[macro_export]
macro_rules! shobu_position {
    ($($cell:tt)*) => {{
        $crate::board::Board::from_diagram(stringify!($($cell)*))
            .expect("shobu_position! diagram should describe a valid board")
    }};
}
