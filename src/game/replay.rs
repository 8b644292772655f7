use std::thread;
use std::time::Duration;

use log::info;

use super::display::move_highlights;
use super::error::GameError;
use super::record::GameRecord;
use super::renderer::GameRenderer;
use crate::board::Board;
use crate::rules;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplayOptions {
    /// Pause after each rendered move.
    pub delay: Duration,
    /// Log turn number of the first move to show. Earlier moves are applied
    /// without being rendered, and the initial board is only shown from 0.
    pub start_turn: usize,
}

/// Plays the recorded moves again through the rules engine and returns the
/// final board.
pub fn replay(
    record: &GameRecord,
    renderer: &mut dyn GameRenderer,
    options: &ReplayOptions,
) -> Result<Board, GameError> {
    info!(
        "replaying {} moves: {} (black) vs {} (white)",
        record.len(),
        record.black(),
        record.white()
    );
    let mut board = *record.initial();
    if options.start_turn == 0 {
        renderer.render(&board, None, &[]);
    }

    for (turn, entry) in record.entries().iter().enumerate() {
        board = rules::apply_move(&board, &entry.mv)?;
        if turn < options.start_turn {
            continue;
        }
        renderer.render(&board, Some(&entry.mv), &move_highlights(&entry.mv));
        if !options.delay.is_zero() {
            thread::sleep(options.delay);
        }
    }

    Ok(board)
}
