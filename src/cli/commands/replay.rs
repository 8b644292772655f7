//! Replay command - show a logged game again.

use std::path::PathBuf;
use std::time::Duration;

use shobu::game::record::GameRecord;
use shobu::game::replay::{replay, ReplayOptions};
use shobu::rules::game_ending;
use structopt::StructOpt;

use super::util::{exit_with_error, parse_seconds, renderer};
use super::Command;

#[derive(StructOpt)]
pub struct ReplayArgs {
    #[structopt(short = "r", long = "replay", help = "Game log to replay")]
    pub log: PathBuf,
    #[structopt(
        long = "delay",
        default_value = "0",
        parse(try_from_str = parse_seconds),
        help = "Pause between moves in seconds"
    )]
    pub delay: Duration,
    #[structopt(long = "start-turn", default_value = "0")]
    pub start_turn: usize,
    #[structopt(short = "d", long = "display", help = "Show the board in the terminal")]
    pub display: bool,
}

impl Command for ReplayArgs {
    fn execute(self) {
        let record = match GameRecord::read_from(&self.log) {
            Ok(record) => record,
            Err(e) => exit_with_error(format!("could not read {}: {}", self.log.display(), e)),
        };
        let options = ReplayOptions {
            delay: if self.display { self.delay } else { Duration::ZERO },
            start_turn: self.start_turn,
        };
        let mut renderer = renderer(self.display, Duration::ZERO);

        let board = match replay(&record, renderer.as_mut(), &options) {
            Ok(board) => board,
            Err(e) => exit_with_error(e),
        };

        if !self.display {
            println!("{}", board);
        }
        match game_ending(&board) {
            Some(ending) => println!("{} vs {}: {:?}", record.black(), record.white(), ending),
            None => println!(
                "{} vs {}: unfinished after {} moves",
                record.black(),
                record.white(),
                record.len()
            ),
        }
    }
}
