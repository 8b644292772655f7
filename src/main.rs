use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Shobu;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    Shobu::from_args().execute();
}
