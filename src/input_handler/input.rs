//! Move input parsing and line reading.

use std::io::Write;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal;
use thiserror::Error;

use crate::shobu_move::Move;

/// Longest single wait on the terminal, so the deadline is checked regularly.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("no input before the time ran out")]
    Timeout,
    #[error("input cancelled")]
    Cancelled,
}

#[derive(Debug, PartialEq)]
pub enum MoveInput {
    Move(Move),
    /// `?`: show the legal moves.
    ListMoves,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed == "?" {
            return Ok(MoveInput::ListMoves);
        }

        trimmed
            .parse::<Move>()
            .map(MoveInput::Move)
            .map_err(|_| InputError::InvalidInput {
                input: trimmed.to_string(),
            })
    }
}

fn io_error(context: &str, error: impl std::fmt::Display) -> InputError {
    InputError::IOError {
        error: format!("{}: {}", context, error),
    }
}

/// Keeps the terminal in raw mode while a line is being read.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self, InputError> {
        terminal::enable_raw_mode().map_err(|e| io_error("Failed to enable raw mode", e))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Reads one non-empty line from the terminal, echoing keys as they are typed.
/// Gives up with `InputError::Timeout` once `timeout` has passed; Esc or
/// Ctrl-C cancel.
pub fn read_line(timeout: Duration) -> Result<String, InputError> {
    let deadline = Instant::now().checked_add(timeout);
    let mut input = String::new();
    let mut stdout = std::io::stdout();
    let _raw_mode = RawModeGuard::enable()?;

    loop {
        let wait = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    print!("\r\n");
                    return Err(InputError::Timeout);
                }
                (deadline - now).min(POLL_INTERVAL)
            }
            None => POLL_INTERVAL,
        };

        if !event::poll(wait).map_err(|e| io_error("Failed to poll event", e))? {
            continue;
        }
        if let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read().map_err(|e| io_error("Failed to read event", e))?
        {
            match code {
                KeyCode::Enter => {
                    if !input.trim().is_empty() {
                        print!("\r\n");
                        break;
                    }
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Err(InputError::Cancelled);
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    print!("{}", c);
                }
                KeyCode::Backspace => {
                    if input.pop().is_some() {
                        print!("\x08 \x08");
                    }
                }
                KeyCode::Esc => return Err(InputError::Cancelled),
                _ => {}
            }
            stdout
                .flush()
                .map_err(|e| io_error("Failed to flush stdout", e))?;
        }
    }

    Ok(input.trim().to_string())
}
