use std::time::Duration;

use log::debug;

use super::{playable_moves, recover_from_search_error, Agent, AgentError};
use crate::board::Board;
use crate::searcher::mcts::MctsConfig;
use crate::searcher::{allocate_move_time, TimeControl};
use crate::shobu_move::Move;
use crate::shobu_search::mcts_best_move;

/// UCT Monte Carlo Tree Search within a share of the remaining clock.
pub struct MctsAgent {
    config: MctsConfig,
}

impl MctsAgent {
    pub fn new(config: MctsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl Agent for MctsAgent {
    fn name(&self) -> &str {
        "mcts"
    }

    fn choose_move(&mut self, board: &Board, time_left: Duration) -> Result<Move, AgentError> {
        let moves = playable_moves(board)?;
        let time_control = TimeControl::with_budget(allocate_move_time(time_left));

        let outcome = match mcts_best_move(board, &self.config, &time_control) {
            Ok(outcome) => outcome,
            Err(error) => return recover_from_search_error("mcts", board, &moves, error),
        };
        debug!(
            "mcts: {} ({} visits, {} iterations, {:?})",
            outcome.best_move, outcome.visits, outcome.iterations, outcome.duration
        );

        // Keep later searches of the same game from replaying identical rollouts.
        self.config.seed = self.config.seed.wrapping_add(1);
        Ok(outcome.best_move)
    }
}
