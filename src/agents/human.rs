use std::time::{Duration, Instant};

use super::{playable_moves, Agent, AgentError};
use crate::board::Board;
use crate::game::input_source::InputSource;
use crate::input_handler::{InputError, MoveInput};
use crate::rules;
use crate::shobu_move::Move;

/// Asks a person for moves until a legal one arrives or the clock runs out.
pub struct HumanAgent {
    input: Box<dyn InputSource>,
}

impl HumanAgent {
    pub fn new(input: Box<dyn InputSource>) -> Self {
        Self { input }
    }
}

impl Agent for HumanAgent {
    fn name(&self) -> &str {
        "human"
    }

    fn choose_move(&mut self, board: &Board, time_left: Duration) -> Result<Move, AgentError> {
        let moves = playable_moves(board)?;
        // a clock too large for an `Instant` has no deadline
        let deadline = Instant::now().checked_add(time_left);

        loop {
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => time_left,
            };
            if remaining.is_zero() {
                return Err(AgentError::TimeExpired);
            }

            println!(
                "{} to move ({:.1}s left). Enter a move like `0a1 1a1 n1`, or `?` for the list:",
                board.turn(),
                remaining.as_secs_f64()
            );
            let line = match self.input.next_line(remaining) {
                Ok(line) => line,
                Err(InputError::Timeout) => return Err(AgentError::TimeExpired),
                Err(error) => return Err(error.into()),
            };

            match line.parse::<MoveInput>() {
                Ok(MoveInput::ListMoves) => {
                    let listed: Vec<String> = moves.iter().map(Move::to_string).collect();
                    println!("{}", listed.join(", "));
                }
                Ok(MoveInput::Move(mv)) if rules::is_legal(board, &mv) => return Ok(mv),
                Ok(MoveInput::Move(mv)) => println!("{} is not a legal move", mv),
                Err(error) => println!("{}", error),
            }
        }
    }
}
