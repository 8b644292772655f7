//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    count_positions::CountPositionsArgs, play::PlayArgs, replay::ReplayArgs,
};

#[derive(StructOpt)]
#[structopt(name = "shobu", about = "A Shobu engine with search agents")]
pub enum Shobu {
    #[structopt(
        name = "play",
        about = "Play one or more games between two agents (random, alphabeta, mcts, agent, human). Each player gets `--time` seconds for the whole game. Human players need the display (`-d`). With `-n` greater than 1 the win and draw rates are reported."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "replay",
        about = "Replay a game from a log written by `play --log`, starting the display at `--start-turn` and pausing `--delay` seconds between moves."
    )]
    Replay(ReplayArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions reachable from the starting position in `--depth` moves (default: 2) and report how long it took."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Shobu {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Replay(cmd),
            CountPositions(cmd),
        }
    }
}
