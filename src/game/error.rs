use thiserror::Error;

use super::record::RecordError;
use crate::rules::error::RulesError;

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("the game is already finished")]
    AlreadyFinished,
}
