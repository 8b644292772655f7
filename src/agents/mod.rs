//! Decision makers. Every agent answers the same question: given a board and
//! the time left on its clock, which move does it play?

pub mod alpha_beta;
pub mod custom;
pub mod human;
pub mod mcts;
pub mod random;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use log::warn;
use thiserror::Error;

use crate::board::Board;
use crate::game::input_source::TerminalInput;
use crate::input_handler::InputError;
use crate::rules::{self, error::RulesError};
use crate::searcher::mcts::MctsConfig;
use crate::searcher::SearchError;
use crate::shobu_move::{Move, MoveList};

pub use alpha_beta::{AlphaBetaAgent, AlphaBetaConfig};
pub use custom::CustomAgent;
pub use human::HumanAgent;
pub use mcts::MctsAgent;
pub use random::{RandomAgent, RandomConfig};

#[derive(Error, Debug, PartialEq)]
pub enum AgentError {
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error("time expired before a move was chosen")]
    TimeExpired,
    #[error(transparent)]
    Input(#[from] InputError),
}

pub trait Agent {
    /// Short label used in logs and game records.
    fn name(&self) -> &str;

    /// Picks a move for the side to move on `board`. `time_left` is what
    /// remains on this player's clock.
    fn choose_move(&mut self, board: &Board, time_left: Duration) -> Result<Move, AgentError>;
}

/// Legal moves for an agent to pick from. A finished game leaves nothing to
/// choose, which is reported like any other position without moves.
pub(crate) fn playable_moves(board: &Board) -> Result<MoveList, AgentError> {
    let moves = rules::legal_moves(board)?;
    if moves.is_empty() {
        return Err(RulesError::NoLegalMoves { turn: board.turn() }.into());
    }
    Ok(moves)
}

/// What an engine agent plays when its search fails. Only a search without
/// moves is an error; anything else falls back to the first legal move.
pub(crate) fn recover_from_search_error(
    agent: &str,
    board: &Board,
    moves: &MoveList,
    error: SearchError,
) -> Result<Move, AgentError> {
    match (error, moves.first()) {
        (SearchError::NoAvailableMoves, _) | (_, None) => {
            Err(RulesError::NoLegalMoves { turn: board.turn() }.into())
        }
        (error, Some(&fallback)) => {
            warn!("{}: {}, playing the first legal move {}", agent, error, fallback);
            Ok(fallback)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Random,
    AlphaBeta,
    Mcts,
    Custom,
    Human,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Random,
        AgentKind::AlphaBeta,
        AgentKind::Mcts,
        AgentKind::Custom,
        AgentKind::Human,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::AlphaBeta => "alphabeta",
            AgentKind::Mcts => "mcts",
            AgentKind::Custom => "agent",
            AgentKind::Human => "human",
        }
    }

    pub fn is_human(self) -> bool {
        self == AgentKind::Human
    }

    /// Builds the agent with default settings. `seed` makes the randomized
    /// agents reproducible.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        let mcts = MctsConfig {
            seed: seed.unwrap_or_else(|| MctsConfig::default().seed),
            ..MctsConfig::default()
        };
        match self {
            AgentKind::Random => Box::new(RandomAgent::new(RandomConfig { seed })),
            AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new(AlphaBetaConfig::default())),
            AgentKind::Mcts => Box::new(MctsAgent::new(mcts)),
            AgentKind::Custom => {
                Box::new(CustomAgent::new(AlphaBetaConfig::default(), mcts))
            }
            AgentKind::Human => Box::new(HumanAgent::new(Box::new(TerminalInput))),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

type ParseError = &'static str;
impl FromStr for AgentKind {
    type Err = ParseError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.name() == kind)
            .ok_or("invalid agent; options are: random, alphabeta, mcts, agent, human")
    }
}
