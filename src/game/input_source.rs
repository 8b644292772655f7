use std::collections::VecDeque;
use std::time::Duration;

use crate::input_handler::{self, InputError};

/// Where a human player's moves come from.
pub trait InputSource {
    /// Next line of input, waiting at most `timeout`.
    fn next_line(&mut self, timeout: Duration) -> Result<String, InputError>;
}

/// Keyboard input through crossterm.
#[derive(Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_line(&mut self, timeout: Duration) -> Result<String, InputError> {
        input_handler::read_line(timeout)
    }
}

/// Pre-recorded lines, handed out in order. Once they run out every request
/// times out, like a player who stopped answering.
#[derive(Default, Debug)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self, _timeout: Duration) -> Result<String, InputError> {
        self.lines.pop_front().ok_or(InputError::Timeout)
    }
}
