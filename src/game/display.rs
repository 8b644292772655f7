use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::color::Color;
use crate::board::quadrant::Quadrant;
use crate::board::{Board, Square};
use crate::shobu_move::Move;

/// A cell of the whole board.
pub type Cell = (Quadrant, Square);

/// Quadrants drawn on the top row and on the bottom row of the screen.
const SCREEN_LAYOUT: [[Quadrant; 2]; 2] = [
    [Quadrant::WhiteLight, Quadrant::WhiteDark],
    [Quadrant::BlackLight, Quadrant::BlackDark],
];

/// Cells a move touches: both sources and whatever targets stay on the grid.
pub fn move_highlights(mv: &Move) -> Vec<Cell> {
    let mut cells = vec![
        (mv.passive_quadrant(), mv.passive_from()),
        (mv.aggressive_quadrant(), mv.aggressive_from()),
    ];
    if let Some(to) = mv.passive_to() {
        cells.push((mv.passive_quadrant(), to));
    }
    if let Some(to) = mv.aggressive_to() {
        cells.push((mv.aggressive_quadrant(), to));
    }
    cells
}

/// Builds full-screen text frames of the board.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    /// Draws the board with highlighted cells in brackets, followed by the
    /// last move and an optional status block.
    pub fn render_game_state(
        &mut self,
        board: &Board,
        last_move: Option<&Move>,
        highlights: &[Cell],
        status: Option<&str>,
    ) -> &str {
        self.clear();
        self.write_board(board, highlights);

        let _ = writeln!(self.buffer, "Turn {}: {} to move", board.turn_count(), board.turn());
        match last_move {
            Some(mv) => {
                let _ = writeln!(self.buffer, "Last move: {}", mv);
            }
            None => self.buffer.push_str("Last move: -\n"),
        }
        if let Some(status) = status {
            let _ = writeln!(self.buffer, "\n{}", status);
        }
        &self.buffer
    }

    fn write_board(&mut self, board: &Board, highlights: &[Cell]) {
        for pair in SCREEN_LAYOUT.iter() {
            let _ = writeln!(
                self.buffer,
                "     [{}] a  b  c  d     [{}] a  b  c  d",
                pair[0], pair[1]
            );
            for row in (0..4u8).rev() {
                for &quadrant in pair.iter() {
                    let _ = write!(self.buffer, "       {} ", row + 1);
                    for col in 0..4 {
                        let square = Square::from_row_col(row, col);
                        let stone = match board.get(quadrant, square) {
                            Some(Color::Black) => 'b',
                            Some(Color::White) => 'w',
                            None => '.',
                        };
                        if highlights.contains(&(quadrant, square)) {
                            let _ = write!(self.buffer, "[{}]", stone);
                        } else {
                            let _ = write!(self.buffer, " {} ", stone);
                        }
                    }
                }
                self.buffer.push('\n');
            }
            self.buffer.push('\n');
        }
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
