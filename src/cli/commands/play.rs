//! Play command - play games between two agents.

use std::path::PathBuf;
use std::time::Duration;

use log::info;
use shobu::agents::AgentKind;
use shobu::board::color::Color;
use shobu::game::{Game, GameConfig, GameResult};
use structopt::StructOpt;

use super::util::{exit_with_error, parse_seconds, renderer};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short = "w", long = "white", default_value = "random")]
    pub white: AgentKind,
    #[structopt(short = "b", long = "black", default_value = "random")]
    pub black: AgentKind,
    #[structopt(
        short = "t",
        long = "time",
        default_value = "600",
        parse(try_from_str = parse_seconds),
        help = "Clock of each player in seconds"
    )]
    pub time: Duration,
    #[structopt(short = "d", long = "display", help = "Show the board in the terminal")]
    pub display: bool,
    #[structopt(short = "l", long = "log", help = "Write the game log to this file")]
    pub log: Option<PathBuf>,
    #[structopt(short = "n", long = "games", default_value = "1")]
    pub games: u32,
    #[structopt(long = "max-turns", default_value = "10000")]
    pub max_turns: u32,
    #[structopt(long = "seed", help = "Seed for the randomized agents")]
    pub seed: Option<u64>,
    #[structopt(
        long = "delay",
        default_value = "0",
        parse(try_from_str = parse_seconds),
        help = "Pause between displayed moves in seconds"
    )]
    pub delay: Duration,
}

/// Win and draw counts over a series of games.
#[derive(Default, Debug)]
struct Tally {
    games: u32,
    black_wins: u32,
    white_wins: u32,
    draws: u32,
    aborted: u32,
    total_turns: u64,
}

impl Tally {
    fn add(&mut self, result: &GameResult) {
        self.games += 1;
        self.total_turns += result.turns as u64;
        match result.winner() {
            Some(Color::Black) => self.black_wins += 1,
            Some(Color::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
    }

    fn rate(&self, count: u32) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.games as f64
        }
    }

    fn report(&self, black: AgentKind, white: AgentKind) {
        println!("* Games: {} ({} aborted)", self.games, self.aborted);
        println!(
            "* Black ({}) wins: {:.1}%",
            black,
            self.rate(self.black_wins)
        );
        println!(
            "* White ({}) wins: {:.1}%",
            white,
            self.rate(self.white_wins)
        );
        println!("* Draws: {:.1}%", self.rate(self.draws));
        if self.games > 0 {
            println!(
                "* Mean moves per game: {:.1}",
                self.total_turns as f64 / self.games as f64
            );
        }
    }
}

impl PlayArgs {
    fn log_path(&self, game_index: u32) -> Option<PathBuf> {
        let path = self.log.as_ref()?;
        if self.games <= 1 {
            return Some(path.clone());
        }
        let mut numbered = path.clone().into_os_string();
        numbered.push(format!(".{}", game_index + 1));
        Some(PathBuf::from(numbered))
    }

    fn play_one(&self, game_index: u32) -> Option<GameResult> {
        // Distinct seeds per game and per colour, still reproducible.
        let seed = |offset: u64| {
            self.seed
                .map(|seed| seed.wrapping_add(2 * game_index as u64 + offset))
        };
        let config = GameConfig {
            time_per_player: self.time,
            max_turns: Some(self.max_turns),
            ..GameConfig::default()
        };
        let mut game = Game::new(
            config,
            self.black.build(seed(0)),
            self.white.build(seed(1)),
            renderer(self.display, self.delay),
        );

        let played = game.play();

        if let Some(path) = self.log_path(game_index) {
            if let Err(e) = game.record().write_to(&path) {
                eprintln!("error: could not write {}: {}", path.display(), e);
            } else {
                info!("wrote game log to {}", path.display());
            }
        }

        match played {
            Ok(result) => {
                if self.games == 1 && !self.display {
                    println!("{}", game.board());
                    println!("Game over: {}", result);
                }
                Some(result)
            }
            Err(e) => {
                eprintln!("error: game {} aborted: {}", game_index + 1, e);
                None
            }
        }
    }
}

impl Command for PlayArgs {
    fn execute(self) {
        if (self.white.is_human() || self.black.is_human()) && !self.display {
            exit_with_error("human players need the display, pass -d");
        }
        if self.games == 0 {
            exit_with_error("--games must be at least 1");
        }

        let mut tally = Tally::default();
        for game_index in 0..self.games {
            match self.play_one(game_index) {
                Some(result) => tally.add(&result),
                None => {
                    tally.aborted += 1;
                    if self.games == 1 {
                        std::process::exit(1);
                    }
                }
            }
        }

        if self.games > 1 {
            tally.report(self.black, self.white);
        }
    }
}
