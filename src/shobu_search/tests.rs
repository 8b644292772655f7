//! Shobu-specific tests for the searchers.

use std::time::Duration;

use crate::board::color::Color;
use crate::board::Board;
use crate::rules::{self, game_ending, legal_moves, GameEnding};
use crate::searcher::alpha_beta::SearchContext;
use crate::searcher::mcts::MctsConfig;
use crate::searcher::{
    GameMove, GameState, MoveGenerator, SearchError, TimeControl, DECISIVE_SCORE,
};
use crate::shobu_move::Move;
use crate::{shobu_move, shobu_position};

use super::*;

/// Starting layout except quadrant 1, where only a black stone on a3 faces a
/// white one on a4. Black wins by pushing it off the top edge.
fn win_in_one() -> Board {
    shobu_position! {
        wwww wwww
        .... ....
        .... ....
        bbbb bbbb
        wwww w...
        .... b...
        .... ....
        bbbb ....
    }
}

fn wins_for(board: &Board, mv: &Move, color: Color) -> bool {
    game_ending(&rules::play_unchecked(board, mv)) == Some(GameEnding::Victory(color))
}

#[test]
fn test_board_implements_game_state() {
    let board = Board::starting_position();
    assert!(!board.is_maximizing_player());
    assert!(!board.is_terminal());
    assert_eq!(GameState::position_hash(&board), board.position_hash());

    let mv = shobu_move!("0a1 1a1 n1");
    let next = mv.apply(&board);
    assert!(next.is_maximizing_player());
    assert_eq!(board, Board::starting_position());
}

#[test]
fn test_move_generator_is_empty_when_game_over() {
    let board = shobu_position! {
        wwww wwww
        .... ....
        .... ....
        bbbb bbbb
        wwww ....
        .... ....
        .... ....
        bbbb bbbb
    };
    assert!(board.is_terminal());
    assert!(ShobuMoveGenerator.generate_moves(&board).is_empty());
}

#[test]
fn test_find_winning_move() {
    let board = win_in_one();
    assert_eq!(find_winning_move(&board), Some(shobu_move!("0a1 1a3 n1")));
    assert_eq!(find_winning_move(&Board::starting_position()), None);
}

#[test]
fn test_alpha_beta_finds_win_in_one() {
    let board = win_in_one();
    let mut context = SearchContext::new(3);

    let outcome = search_best_move(&mut context, &board, &TimeControl::unlimited()).unwrap();

    assert!(wins_for(&board, &outcome.best_move, Color::Black));
    assert!(outcome.score <= -DECISIVE_SCORE);
}

#[test]
fn test_alpha_beta_finds_win_in_one_for_white() {
    // Quadrant 3 holds a white stone on a2 right above Black's last stone on a1.
    let mut board = shobu_position! {
        wwww ....
        .... ....
        .... w...
        bbbb b...
        wwww wwww
        .... ....
        .... ....
        bbbb bbbb
    };
    board.set_turn(Color::White);
    assert_eq!(find_winning_move(&board), Some(shobu_move!("2a4 3a2 s1")));
    let mut context = SearchContext::with_parallel(2, false);

    let outcome = search_best_move(&mut context, &board, &TimeControl::unlimited()).unwrap();

    assert!(wins_for(&board, &outcome.best_move, Color::White));
    assert!(outcome.score >= DECISIVE_SCORE);
}

#[test]
fn test_alpha_beta_returns_legal_move_from_start() {
    let board = Board::starting_position();
    let mut context = SearchContext::new(2);

    let outcome = search_best_move(&mut context, &board, &TimeControl::unlimited()).unwrap();

    assert!(legal_moves(&board).unwrap().contains(&outcome.best_move));
    assert_eq!(outcome.completed_depth, 2);
}

#[test]
fn test_alpha_beta_deeper_search_keeps_the_win() {
    let board = win_in_one();
    for depth in 1..=3 {
        let mut context = SearchContext::new(depth);
        let outcome =
            search_best_move(&mut context, &board, &TimeControl::unlimited()).unwrap();
        assert!(
            wins_for(&board, &outcome.best_move, Color::Black),
            "depth {} picked {}",
            depth,
            outcome.best_move
        );
    }
}

#[test]
fn test_alpha_beta_budget_is_monotonic_on_open_position() {
    let board = Board::starting_position();
    let reference: Vec<(Move, i16)> = (1..=2)
        .map(|depth| {
            let mut context = SearchContext::new(depth);
            let outcome =
                search_best_move(&mut context, &board, &TimeControl::unlimited()).unwrap();
            assert_eq!(outcome.completed_depth, depth);
            assert!(outcome.score.abs() < DECISIVE_SCORE);
            (outcome.best_move, outcome.score)
        })
        .collect();

    let mut deepest = 0;
    for budget_ms in [1u64, 10, 100, 2_000].iter() {
        let mut context = SearchContext::new(2);
        let control = TimeControl::with_budget(Duration::from_millis(*budget_ms));
        let outcome = match search_best_move(&mut context, &board, &control) {
            Ok(outcome) => outcome,
            Err(SearchError::TimeExhaustedBeforeFirstDepth) => continue,
            Err(e) => panic!("unexpected error {:?}", e),
        };
        let depth = outcome.completed_depth as usize;
        assert_eq!(
            (outcome.best_move, outcome.score),
            reference[depth - 1],
            "budget {}ms stopped at depth {}",
            budget_ms,
            depth
        );
        deepest = deepest.max(depth);
    }
    assert_eq!(deepest, 2, "the largest budget should finish depth 2");
}

#[test]
fn test_mcts_returns_legal_move() {
    let board = Board::starting_position();
    let config = MctsConfig {
        max_iterations: Some(200),
        rollout_depth: 20,
        ..MctsConfig::default()
    };

    let outcome = mcts_best_move(&board, &config, &TimeControl::unlimited()).unwrap();

    assert!(legal_moves(&board).unwrap().contains(&outcome.best_move));
    assert_eq!(outcome.iterations, 200);
}

#[test]
fn test_mcts_finds_win_in_one() {
    let board = win_in_one();
    let config = MctsConfig {
        max_iterations: Some(3_000),
        rollout_depth: 10,
        ..MctsConfig::default()
    };

    let outcome = mcts_best_move(&board, &config, &TimeControl::unlimited()).unwrap();

    assert!(wins_for(&board, &outcome.best_move, Color::Black));
}

#[test]
fn test_mcts_respects_deadline() {
    let board = Board::starting_position();
    let time_control = TimeControl::with_budget(Duration::from_millis(50));

    let outcome = mcts_best_move(&board, &MctsConfig::default(), &time_control).unwrap();

    assert!(outcome.iterations >= 1);
    assert!(outcome.duration < Duration::from_secs(5));
}
