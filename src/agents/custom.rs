//! The hybrid "agent": an immediate win if there is one, otherwise alpha-beta
//! on half of the move budget, handing over to MCTS when alpha-beta could not
//! look past a single ply.

use std::time::{Duration, Instant};

use log::{debug, info};

use super::alpha_beta::AlphaBetaConfig;
use super::{playable_moves, Agent, AgentError};
use crate::board::Board;
use crate::searcher::alpha_beta::SearchContext;
use crate::searcher::mcts::MctsConfig;
use crate::searcher::{allocate_move_time, TimeControl, DECISIVE_SCORE};
use crate::shobu_move::Move;
use crate::shobu_search::{find_winning_move, mcts_best_move, search_best_move};

pub struct CustomAgent {
    alpha_beta: AlphaBetaConfig,
    mcts: MctsConfig,
}

impl CustomAgent {
    pub fn new(alpha_beta: AlphaBetaConfig, mcts: MctsConfig) -> Self {
        Self { alpha_beta, mcts }
    }
}

impl Agent for CustomAgent {
    fn name(&self) -> &str {
        "agent"
    }

    fn choose_move(&mut self, board: &Board, time_left: Duration) -> Result<Move, AgentError> {
        let moves = playable_moves(board)?;
        if moves.len() == 1 {
            return Ok(moves[0]);
        }
        if let Some(winning) = find_winning_move(board) {
            info!("agent: {} wins on the spot", winning);
            return Ok(winning);
        }

        let started = Instant::now();
        let budget = allocate_move_time(time_left);

        let mut context =
            SearchContext::with_parallel(self.alpha_beta.max_depth, self.alpha_beta.parallel);
        let alpha_beta_control = TimeControl::with_budget(budget / 2);
        let fallback = match search_best_move(&mut context, board, &alpha_beta_control) {
            Ok(outcome)
                if outcome.completed_depth > 1 || outcome.score.abs() >= DECISIVE_SCORE =>
            {
                debug!(
                    "agent: alpha-beta reached depth {}, playing {}",
                    outcome.completed_depth, outcome.best_move
                );
                return Ok(outcome.best_move);
            }
            Ok(outcome) => outcome.best_move,
            Err(error) => {
                debug!("agent: alpha-beta gave up ({})", error);
                moves[0]
            }
        };

        let mcts_control = TimeControl::with_budget(budget.saturating_sub(started.elapsed()));
        match mcts_best_move(board, &self.mcts, &mcts_control) {
            Ok(outcome) => {
                debug!(
                    "agent: mcts picked {} after {} iterations",
                    outcome.best_move, outcome.iterations
                );
                self.mcts.seed = self.mcts.seed.wrapping_add(1);
                Ok(outcome.best_move)
            }
            Err(error) => {
                debug!("agent: mcts gave up ({}), playing {}", error, fallback);
                Ok(fallback)
            }
        }
    }
}
