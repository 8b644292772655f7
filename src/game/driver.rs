//! Runs one game between two agents.

use std::time::{Duration, Instant};

use log::{error, info, warn};

use super::display::move_highlights;
use super::error::GameError;
use super::outcome::{DrawReason, GameResult, Outcome, WinReason};
use super::record::GameRecord;
use super::renderer::GameRenderer;
use crate::agents::{Agent, AgentError};
use crate::board::color::Color;
use crate::board::Board;
use crate::rules::error::RulesError;
use crate::rules::{self, game_ending, GameEnding};

/// Turn count at which an undecided game is called a draw.
pub const DEFAULT_MAX_TURNS: u32 = 10_000;

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Clock of each player at the start of the game.
    pub time_per_player: Duration,
    pub max_turns: Option<u32>,
    pub starting_position: Board,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_per_player: Duration::from_secs(600),
            max_turns: Some(DEFAULT_MAX_TURNS),
            starting_position: Board::starting_position(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished(GameResult),
    /// Stopped without a result, e.g. when the side to move had no legal move.
    Aborted,
}

pub struct Game {
    config: GameConfig,
    board: Board,
    /// Indexed by `Color::index`.
    agents: [Box<dyn Agent>; 2],
    clocks: [Duration; 2],
    record: GameRecord,
    status: GameStatus,
    renderer: Box<dyn GameRenderer>,
}

impl Game {
    pub fn new(
        config: GameConfig,
        black: Box<dyn Agent>,
        white: Box<dyn Agent>,
        renderer: Box<dyn GameRenderer>,
    ) -> Self {
        let board = config.starting_position;
        let record = GameRecord::new(board, black.name(), white.name());
        let clocks = [config.time_per_player; 2];
        Self {
            config,
            board,
            agents: [black, white],
            clocks,
            record,
            status: GameStatus::NotStarted,
            renderer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn time_left(&self, color: Color) -> Duration {
        self.clocks[color.index()]
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        match self.status {
            GameStatus::NotStarted => {}
            GameStatus::InProgress => return Ok(()),
            GameStatus::Finished(_) | GameStatus::Aborted => {
                return Err(GameError::AlreadyFinished)
            }
        }

        info!(
            "starting game: {} (black) vs {} (white)",
            self.agents[Color::Black.index()].name(),
            self.agents[Color::White.index()].name()
        );
        self.status = GameStatus::InProgress;
        self.renderer.update_clocks(self.clocks[0], self.clocks[1]);
        self.renderer.render(&self.board, None, &[]);
        self.check_ending();
        Ok(())
    }

    /// Plays one move. Returns the result once the game is over.
    pub fn step(&mut self) -> Result<Option<GameResult>, GameError> {
        if self.status == GameStatus::NotStarted {
            self.start()?;
            if let GameStatus::Finished(result) = self.status {
                return Ok(Some(result));
            }
        }
        if let GameStatus::Finished(_) | GameStatus::Aborted = self.status {
            return Err(GameError::AlreadyFinished);
        }

        let mover = self.board.turn();
        let time_left = self.clocks[mover.index()];
        let started = Instant::now();
        let choice = self.agents[mover.index()].choose_move(&self.board, time_left);
        let elapsed = started.elapsed();
        self.clocks[mover.index()] = time_left.saturating_sub(elapsed);

        let mv = match choice {
            Ok(mv) => mv,
            Err(AgentError::Rules(e @ RulesError::NoLegalMoves { .. })) => {
                error!("aborting the game at turn {}: {}", self.board.turn_count(), e);
                self.status = GameStatus::Aborted;
                return Err(e.into());
            }
            Err(AgentError::TimeExpired) => {
                warn!("{} ran out of time choosing a move", mover);
                return Ok(Some(self.finish(Outcome::Victory {
                    winner: mover.opposite(),
                    reason: WinReason::TimeExpired,
                })));
            }
            Err(e) => {
                warn!("{} forfeits: {}", mover, e);
                return Ok(Some(self.finish(Outcome::Victory {
                    winner: mover.opposite(),
                    reason: WinReason::Forfeit,
                })));
            }
        };

        if self.clocks[mover.index()].is_zero() {
            warn!("{} flagged after {:?} on {}", mover, elapsed, mv);
            return Ok(Some(self.finish(Outcome::Victory {
                winner: mover.opposite(),
                reason: WinReason::ClockExpired,
            })));
        }

        let next = match rules::apply_move(&self.board, &mv) {
            Ok(next) => next,
            Err(e) => {
                warn!("{} forfeits: {}", mover, e);
                return Ok(Some(self.finish(Outcome::Victory {
                    winner: mover.opposite(),
                    reason: WinReason::Forfeit,
                })));
            }
        };

        info!(
            "turn {}: {} plays {} in {:?}",
            self.board.turn_count(),
            mover,
            mv,
            elapsed
        );
        self.board = next;
        self.record.push(mv, next);

        self.renderer.update_clocks(self.clocks[0], self.clocks[1]);
        self.renderer
            .render(&self.board, Some(&mv), &move_highlights(&mv));
        if let Some(delay) = self.renderer.frame_delay() {
            std::thread::sleep(delay);
        }

        Ok(self.check_ending())
    }

    /// Plays until the game ends.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        self.start()?;
        loop {
            if let GameStatus::Finished(result) = self.status {
                return Ok(result);
            }
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    fn check_ending(&mut self) -> Option<GameResult> {
        let outcome = match game_ending(&self.board) {
            Some(GameEnding::Victory(winner)) => Outcome::Victory {
                winner,
                reason: WinReason::QuadrantCleared,
            },
            Some(GameEnding::Draw) => Outcome::Draw(DrawReason::QuietTurns),
            None => match self.config.max_turns {
                Some(max_turns) if self.board.turn_count() >= max_turns => {
                    Outcome::Draw(DrawReason::TurnLimit)
                }
                _ => return None,
            },
        };
        Some(self.finish(outcome))
    }

    fn finish(&mut self, outcome: Outcome) -> GameResult {
        let result = GameResult {
            outcome,
            turns: self.board.turn_count(),
        };
        info!("game over: {}", result);
        self.status = GameStatus::Finished(result);
        self.renderer.show_result(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{HumanAgent, RandomAgent, RandomConfig};
    use crate::game::input_source::ScriptedInput;
    use crate::game::renderer::NullRenderer;
    use crate::shobu_move::Move;
    use crate::{shobu_move, shobu_position};

    /// Plays a fixed list of moves, then gives up.
    struct ScriptedAgent {
        moves: Vec<Move>,
        think_time: Duration,
    }

    impl ScriptedAgent {
        fn boxed(moves: Vec<Move>) -> Box<dyn Agent> {
            Box::new(Self {
                moves,
                think_time: Duration::ZERO,
            })
        }
    }

    impl Agent for ScriptedAgent {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(&mut self, _board: &Board, _time_left: Duration) -> Result<Move, AgentError> {
            std::thread::sleep(self.think_time);
            if self.moves.is_empty() {
                return Err(AgentError::TimeExpired);
            }
            Ok(self.moves.remove(0))
        }
    }

    fn random(seed: u64) -> Box<dyn Agent> {
        Box::new(RandomAgent::new(RandomConfig { seed: Some(seed) }))
    }

    fn game(config: GameConfig, black: Box<dyn Agent>, white: Box<dyn Agent>) -> Game {
        Game::new(config, black, white, Box::new(NullRenderer))
    }

    #[test]
    fn test_state_machine() {
        let config = GameConfig {
            max_turns: Some(20),
            ..GameConfig::default()
        };
        let mut game = game(config, random(1), random(2));
        assert_eq!(game.status(), GameStatus::NotStarted);

        assert_eq!(game.step().unwrap(), None);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.record().len(), 1);
        assert_eq!(game.board().turn(), Color::White);

        let result = game.play().unwrap();
        assert_eq!(game.status(), GameStatus::Finished(result));
        assert!(matches!(game.step(), Err(GameError::AlreadyFinished)));
        assert!(matches!(game.start(), Err(GameError::AlreadyFinished)));
    }

    #[test]
    fn test_random_self_play_terminates() {
        for seed in 0..10 {
            let config = GameConfig {
                max_turns: Some(300),
                ..GameConfig::default()
            };
            let mut game = game(config, random(seed), random(seed + 100));

            let result = match game.play() {
                Ok(result) => result,
                // a stalemated side aborts the game, which also ends it
                Err(GameError::Rules(RulesError::NoLegalMoves { .. })) => continue,
                Err(e) => panic!("unexpected error: {}", e),
            };

            assert!(result.turns <= 300);
            assert_eq!(result.turns as usize, game.record().len());
            match result.outcome {
                Outcome::Victory { reason, .. } => {
                    assert_eq!(reason, WinReason::QuadrantCleared)
                }
                Outcome::Draw(_) => {}
            }
        }
    }

    #[test]
    fn test_turn_cap_draws() {
        let config = GameConfig {
            max_turns: Some(2),
            ..GameConfig::default()
        };
        let mut game = game(
            config,
            ScriptedAgent::boxed(vec![shobu_move!("0a1 1a1 n1")]),
            ScriptedAgent::boxed(vec![shobu_move!("2a4 1a4 s1")]),
        );

        let result = game.play().unwrap();

        assert_eq!(result.outcome, Outcome::Draw(DrawReason::TurnLimit));
        assert_eq!(result.turns, 2);
    }

    #[test]
    fn test_illegal_move_forfeits() {
        let mut game = game(
            GameConfig::default(),
            ScriptedAgent::boxed(vec![shobu_move!("0a1 1a1 s1")]),
            random(1),
        );

        let result = game.play().unwrap();

        assert_eq!(
            result.outcome,
            Outcome::Victory {
                winner: Color::White,
                reason: WinReason::Forfeit
            }
        );
        assert!(game.record().is_empty());
    }

    #[test]
    fn test_agent_time_expiry_forfeits() {
        let mut game = game(
            GameConfig::default(),
            random(1),
            Box::new(HumanAgent::new(Box::new(ScriptedInput::new(Vec::<String>::new())))),
        );

        let result = game.play().unwrap();

        assert_eq!(
            result.outcome,
            Outcome::Victory {
                winner: Color::Black,
                reason: WinReason::TimeExpired
            }
        );
        assert_eq!(result.turns, 1);
    }

    #[test]
    fn test_clock_runs_out() {
        let config = GameConfig {
            time_per_player: Duration::from_millis(20),
            ..GameConfig::default()
        };
        let slow = Box::new(ScriptedAgent {
            moves: vec![shobu_move!("0a1 1a1 n1")],
            think_time: Duration::from_millis(40),
        });
        let mut game = game(config, slow, random(1));

        let result = game.play().unwrap();

        assert_eq!(
            result.outcome,
            Outcome::Victory {
                winner: Color::White,
                reason: WinReason::ClockExpired
            }
        );
        assert_eq!(game.time_left(Color::Black), Duration::ZERO);
    }

    #[test]
    fn test_winning_push_ends_the_game() {
        let config = GameConfig {
            starting_position: shobu_position! {
                wwww wwww
                .... ....
                .... ....
                bbbb bbbb
                wwww w...
                .... b...
                .... ....
                bbbb ....
            },
            ..GameConfig::default()
        };
        let mut game = game(
            config,
            ScriptedAgent::boxed(vec![shobu_move!("0a1 1a3 n1")]),
            random(1),
        );

        let result = game.play().unwrap();

        assert_eq!(result.winner(), Some(Color::Black));
        assert_eq!(result.turns, 1);
    }

    #[test]
    fn test_no_legal_moves_aborts() {
        let config = GameConfig {
            starting_position: shobu_position! {
                wwww wwww
                .... ....
                .... ....
                bbbb bbbb
                .... ....
                .... ....
                ww.. ww..
                bw.. bw..
            },
            ..GameConfig::default()
        };
        let mut game = game(config, random(1), random(2));

        assert!(matches!(
            game.play(),
            Err(GameError::Rules(RulesError::NoLegalMoves { turn: Color::Black }))
        ));
        assert_eq!(game.status(), GameStatus::Aborted);
        assert!(game.record().is_empty());
        assert!(matches!(game.step(), Err(GameError::AlreadyFinished)));
        assert!(matches!(game.play(), Err(GameError::AlreadyFinished)));
    }
}
