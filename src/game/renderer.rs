use std::io::{self, Write};
use std::time::Duration;

use crate::board::Board;
use crate::game::display::{Cell, GameDisplay};
use crate::game::outcome::GameResult;
use crate::shobu_move::Move;

pub trait GameRenderer {
    fn render(&mut self, board: &Board, last_move: Option<&Move>, highlights: &[Cell]);
    fn show_result(&mut self, result: &GameResult);

    /// Remaining time of Black and White, shown with the next frame.
    fn update_clocks(&mut self, _black: Duration, _white: Duration) {}

    /// Pause after each rendered move, if any.
    fn frame_delay(&self) -> Option<Duration>;
}

/// Redraws the whole terminal on every move.
pub struct TerminalRenderer {
    display: GameDisplay,
    delay_between_moves: Option<Duration>,
    status: Option<String>,
}

impl TerminalRenderer {
    pub fn new(delay_between_moves: Option<Duration>) -> Self {
        Self {
            display: GameDisplay::new(),
            delay_between_moves,
            status: None,
        }
    }
}

impl GameRenderer for TerminalRenderer {
    fn render(&mut self, board: &Board, last_move: Option<&Move>, highlights: &[Cell]) {
        let frame =
            self.display
                .render_game_state(board, last_move, highlights, self.status.as_deref());
        print!("{}", frame);
        let _ = io::stdout().flush();
    }

    fn show_result(&mut self, result: &GameResult) {
        println!("Game over: {}", result);
    }

    fn update_clocks(&mut self, black: Duration, white: Duration) {
        self.status = Some(format!(
            "* Black clock: {:.1}s\n* White clock: {:.1}s",
            black.as_secs_f64(),
            white.as_secs_f64()
        ));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// Display turned off.
#[derive(Default)]
pub struct NullRenderer;

impl GameRenderer for NullRenderer {
    fn render(&mut self, _board: &Board, _last_move: Option<&Move>, _highlights: &[Cell]) {}

    fn show_result(&mut self, _result: &GameResult) {}

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
