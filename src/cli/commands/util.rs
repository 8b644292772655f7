//! Shared utilities for CLI commands.

use std::time::Duration;

use shobu::game::renderer::{GameRenderer, NullRenderer, TerminalRenderer};

/// Parses a non-negative number of seconds, fractions allowed.
pub(crate) fn parse_seconds(input: &str) -> Result<Duration, String> {
    let seconds: f64 = input
        .parse()
        .map_err(|_| format!("`{}` is not a number of seconds", input))?;
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("`{}` is not a valid number of seconds", input))
}

pub(crate) fn renderer(display: bool, delay: Duration) -> Box<dyn GameRenderer> {
    if display {
        let delay = if delay.is_zero() { None } else { Some(delay) };
        Box::new(TerminalRenderer::new(delay))
    } else {
        Box::new(NullRenderer)
    }
}

pub(crate) fn exit_with_error(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}
