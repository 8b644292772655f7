use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{playable_moves, Agent, AgentError};
use crate::board::Board;
use crate::shobu_move::Move;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RandomConfig {
    /// Fixed seed for reproducible games; fresh entropy otherwise.
    pub seed: Option<u64>,
}

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(config: RandomConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, _time_left: Duration) -> Result<Move, AgentError> {
        let moves = playable_moves(board)?;
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::rules::{error::RulesError, legal_moves};
    use crate::{shobu_move, shobu_position};

    #[test]
    fn test_only_move_is_always_chosen() {
        let board = shobu_position! {
            ...w ...w
            .... ....
            .... ....
            b... b...
            .... ....
            .... ....
            ww.. ww..
            b.w. bww.
        };
        assert_eq!(legal_moves(&board).unwrap().len(), 1);

        let mut agent = RandomAgent::new(RandomConfig { seed: None });
        for _ in 0..10_000 {
            let mv = agent.choose_move(&board, Duration::from_secs(1)).unwrap();
            assert_eq!(mv, shobu_move!("0a1 3a1 e1"));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::starting_position();
        let mut first = RandomAgent::new(RandomConfig { seed: Some(3) });
        let mut second = RandomAgent::new(RandomConfig { seed: Some(3) });
        for _ in 0..20 {
            assert_eq!(
                first.choose_move(&board, Duration::ZERO),
                second.choose_move(&board, Duration::ZERO)
            );
        }
    }

    #[test]
    fn test_no_legal_moves_is_an_error() {
        // Black's home stones are cornered by White's.
        let board = shobu_position! {
            wwww wwww
            .... ....
            .... ....
            bbbb bbbb
            .... ....
            .... ....
            ww.. ww..
            bw.. bw..
        };
        let mut agent = RandomAgent::new(RandomConfig { seed: Some(1) });
        assert_eq!(
            agent.choose_move(&board, Duration::from_secs(1)),
            Err(AgentError::Rules(RulesError::NoLegalMoves { turn: Color::Black }))
        );
    }
}
