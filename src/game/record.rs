//! Game records and the one-line-per-move log format.
//!
//! ```text
//! # black: alphabeta
//! # white: mcts
//! 0:0:0:1:0:4:1
//! 1:2:12:3:12:-4:1
//! ```
//!
//! Each move line is `turn:pq:pcell:aq:acell:dir:dist`, where `turn` counts
//! from 0, cells are indexes `0..16` and `dir` is the direction's cell offset.

use std::convert::TryFrom;
use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::direction::Direction;
use crate::board::quadrant::Quadrant;
use crate::board::{Board, Square};
use crate::rules;
use crate::shobu_move::Move;

static LOG_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([0-9]+):([0-3]):([0-9]+):([0-3]):([0-9]+):(-?[0-9]+):([12])$")
        .expect("LOG_LINE_RE regex should be valid")
});
static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^# *(black|white): *(.*)$").expect("HEADER_RE regex should be valid")
});

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordEntry {
    pub mv: Move,
    /// Board after `mv` was played.
    pub board: Board,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    initial: Board,
    black: String,
    white: String,
    entries: Vec<RecordEntry>,
}

impl GameRecord {
    pub fn new(initial: Board, black: &str, white: &str) -> Self {
        Self {
            initial,
            black: black.to_string(),
            white: white.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, mv: Move, board: Board) {
        self.entries.push(RecordEntry { mv, board });
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn black(&self) -> &str {
        &self.black
    }

    pub fn white(&self) -> &str {
        &self.white
    }

    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The current board: the last recorded one, or the initial board.
    pub fn final_board(&self) -> &Board {
        self.entries
            .last()
            .map(|entry| &entry.board)
            .unwrap_or(&self.initial)
    }

    pub fn to_log(&self) -> String {
        let mut out = format!("# black: {}\n# white: {}\n", self.black, self.white);
        for (turn, entry) in self.entries.iter().enumerate() {
            out.push_str(&log_line(turn, &entry.mv));
            out.push('\n');
        }
        out
    }

    /// Reads a log played from the standard starting position, replaying every
    /// move through the rules engine.
    pub fn from_log(log: &str) -> Result<Self, RecordError> {
        let mut record = GameRecord::new(Board::starting_position(), "unknown", "unknown");
        let mut board = record.initial;

        for (index, raw) in log.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(caps) = HEADER_RE.captures(trimmed) {
                let name = caps[2].trim().to_string();
                match &caps[1] {
                    "black" => record.black = name,
                    _ => record.white = name,
                }
                continue;
            }
            if trimmed.starts_with('#') {
                continue;
            }

            let (turn, mv) = parse_log_line(trimmed).map_err(|msg| RecordError::Parse { line, msg })?;
            if turn != record.len() {
                return Err(RecordError::Parse {
                    line,
                    msg: format!("expected turn {}, found {}", record.len(), turn),
                });
            }
            board = rules::apply_move(&board, &mv).map_err(|e| RecordError::Parse {
                line,
                msg: e.to_string(),
            })?;
            record.push(mv, board);
        }

        Ok(record)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), RecordError> {
        fs::write(path, self.to_log())?;
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let log = fs::read_to_string(path)?;
        Self::from_log(&log)
    }
}

pub fn log_line(turn: usize, mv: &Move) -> String {
    format!(
        "{}:{}:{}:{}:{}:{}:{}",
        turn,
        mv.passive_quadrant().id(),
        mv.passive_from().index(),
        mv.aggressive_quadrant().id(),
        mv.aggressive_from().index(),
        mv.direction().offset(),
        mv.distance()
    )
}

fn parse_log_line(line: &str) -> Result<(usize, Move), String> {
    let caps = LOG_LINE_RE
        .captures(line)
        .ok_or_else(|| format!("malformed move `{}`", line))?;

    let number = |i: usize| -> Result<i64, String> {
        caps[i]
            .parse::<i64>()
            .map_err(|e| format!("bad number `{}`: {}", &caps[i], e))
    };
    let quadrant = |i: usize| -> Result<Quadrant, String> {
        Quadrant::from_id(number(i)? as u8).ok_or_else(|| format!("bad quadrant `{}`", &caps[i]))
    };
    let square = |i: usize| -> Result<Square, String> {
        let index = number(i)?;
        if (0..16).contains(&index) {
            Ok(Square::new(index as u8))
        } else {
            Err(format!("bad cell `{}`", index))
        }
    };

    let turn = number(1)? as usize;
    let offset = number(6)?;
    let direction = i8::try_from(offset)
        .ok()
        .and_then(Direction::from_offset)
        .ok_or_else(|| format!("bad direction offset `{}`", offset))?;
    let mv = Move::new(
        quadrant(2)?,
        square(3)?,
        quadrant(4)?,
        square(5)?,
        direction,
        number(7)? as u8,
    );
    Ok((turn, mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shobu_move;

    fn two_move_record() -> GameRecord {
        let start = Board::starting_position();
        let mut record = GameRecord::new(start, "random", "mcts");
        let first = shobu_move!("0a1 1a1 n1");
        let after_first = rules::apply_move(&start, &first).unwrap();
        record.push(first, after_first);
        let second = shobu_move!("2a4 1a4 s1");
        let after_second = rules::apply_move(&after_first, &second).unwrap();
        record.push(second, after_second);
        record
    }

    #[test]
    fn test_log_line_format() {
        assert_eq!(log_line(0, &shobu_move!("0a1 1a1 n1")), "0:0:0:1:0:4:1");
        assert_eq!(log_line(7, &shobu_move!("2b4 3c4 sw2")), "7:2:13:3:14:-5:2");
    }

    #[test]
    fn test_log_round_trip() {
        let record = two_move_record();
        let parsed = GameRecord::from_log(&record.to_log()).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.black(), "random");
        assert_eq!(parsed.white(), "mcts");
        assert_eq!(parsed.final_board().turn_count(), 2);
    }

    #[test]
    fn test_headerless_log() {
        let parsed = GameRecord::from_log("0:0:0:1:0:4:1\n").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.black(), "unknown");
    }

    #[test]
    fn test_rejects_illegal_move() {
        // White cannot open the game.
        let result = GameRecord::from_log("0:2:12:3:12:-4:1\n");
        assert!(matches!(result, Err(RecordError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_rejects_malformed_lines() {
        for log in ["0:0:0:1:0:4", "0:0:16:1:0:4:1", "0:0:0:1:0:2:1", "1:0:0:1:0:4:1"] {
            assert!(
                matches!(GameRecord::from_log(log), Err(RecordError::Parse { .. })),
                "accepted {}",
                log
            );
        }
    }

    #[test]
    fn test_write_and_read_file() {
        let record = two_move_record();
        let path = std::env::temp_dir().join(format!("shobu-record-{}.log", std::process::id()));

        record.write_to(&path).unwrap();
        let read = GameRecord::read_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, record);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameRecord::read_from("/nonexistent/shobu.log");
        assert!(matches!(result, Err(RecordError::Io(_))));
    }
}
