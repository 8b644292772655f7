//! Game driver, records and the thin terminal collaborators around it.

pub mod display;
pub mod driver;
pub mod error;
pub mod input_source;
pub mod outcome;
pub mod record;
pub mod renderer;
pub mod replay;

pub use driver::{Game, GameConfig, GameStatus};
pub use error::GameError;
pub use outcome::{DrawReason, GameResult, Outcome, WinReason};
pub use record::{GameRecord, RecordError};
