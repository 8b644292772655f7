//! Count positions command - count reachable positions at a given depth.

use std::time::Instant;

use shobu::board::Board;
use shobu::rules::count_positions;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let board = Board::starting_position();
        let started = Instant::now();
        let positions = count_positions(&board, self.depth);
        let elapsed = started.elapsed();

        println!("* Depth: {}", self.depth);
        println!("* Positions: {}", positions);
        println!("* Took: {:?}", elapsed);
        if elapsed.as_secs_f64() > 0.0 {
            println!(
                "* Positions per second: {:.0}",
                positions as f64 / elapsed.as_secs_f64()
            );
        }
    }
}
