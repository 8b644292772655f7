use std::time::Duration;

use log::debug;

use super::{playable_moves, recover_from_search_error, Agent, AgentError};
use crate::board::Board;
use crate::searcher::alpha_beta::SearchContext;
use crate::searcher::{allocate_move_time, TimeControl};
use crate::shobu_move::Move;
use crate::shobu_search::search_best_move;

pub const DEFAULT_MAX_DEPTH: u8 = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct AlphaBetaConfig {
    pub max_depth: u8,
    /// Search root moves on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallel: true,
        }
    }
}

/// Iterative-deepening alpha-beta within a share of the remaining clock.
pub struct AlphaBetaAgent {
    config: AlphaBetaConfig,
}

impl AlphaBetaAgent {
    pub fn new(config: AlphaBetaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }
}

impl Agent for AlphaBetaAgent {
    fn name(&self) -> &str {
        "alphabeta"
    }

    fn choose_move(&mut self, board: &Board, time_left: Duration) -> Result<Move, AgentError> {
        let moves = playable_moves(board)?;
        if moves.len() == 1 {
            return Ok(moves[0]);
        }

        let time_control = TimeControl::with_budget(allocate_move_time(time_left));
        let mut context = SearchContext::with_parallel(self.config.max_depth, self.config.parallel);

        match search_best_move(&mut context, board, &time_control) {
            Ok(outcome) => {
                debug!(
                    "alphabeta: {} (score {}, depth {}, {} positions, {:?})",
                    outcome.best_move,
                    outcome.score,
                    outcome.completed_depth,
                    context.searched_position_count(),
                    context.last_search_duration().unwrap_or_default(),
                );
                Ok(outcome.best_move)
            }
            Err(error) => recover_from_search_error("alphabeta", board, &moves, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::rules::{self, game_ending, legal_moves, GameEnding};
    use crate::shobu_position;

    #[test]
    fn test_plays_the_winning_push() {
        let board = shobu_position! {
            wwww wwww
            .... ....
            .... ....
            bbbb bbbb
            wwww w...
            .... b...
            .... ....
            bbbb ....
        };
        let mut agent = AlphaBetaAgent::new(AlphaBetaConfig::default());

        let mv = agent.choose_move(&board, Duration::from_secs(60)).unwrap();

        let after = rules::apply_move(&board, &mv).unwrap();
        assert_eq!(game_ending(&after), Some(GameEnding::Victory(Color::Black)));
    }

    #[test]
    fn test_falls_back_to_first_move_without_time() {
        let board = Board::starting_position();
        let mut agent = AlphaBetaAgent::new(AlphaBetaConfig::default());

        let mv = agent.choose_move(&board, Duration::ZERO).unwrap();

        assert_eq!(mv, legal_moves(&board).unwrap()[0]);
    }

    #[test]
    fn test_sequential_agent_plays_legal_move() {
        let board = Board::starting_position();
        let mut agent = AlphaBetaAgent::new(AlphaBetaConfig {
            max_depth: 2,
            parallel: false,
        });

        let mv = agent.choose_move(&board, Duration::from_secs(60)).unwrap();

        assert!(rules::is_legal(&board, &mv));
    }
}
