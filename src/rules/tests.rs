use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::board::Bitboard;
use crate::{shobu_move, shobu_position};
use common::bitboard::square::*;

fn total_stones(board: &Board, color: Color) -> u32 {
    Quadrant::ALL.iter().map(|&q| board.count(q, color)).sum()
}

#[test]
fn test_initial_position_has_232_moves() {
    let board = Board::starting_position();
    assert_eq!(game_ending(&board), None);
    assert_eq!(legal_moves(&board).unwrap().len(), 232);
}

#[test]
fn test_first_generated_move() {
    let board = Board::starting_position();
    let moves = generate_moves(&board);
    assert_eq!(moves[0], shobu_move!("0a1 1a1 n1"));

    let next = play_unchecked(&board, &moves[0]);
    assert_eq!(
        next.stones(Quadrant::BlackLight, Color::Black),
        Bitboard::ROW_1.without(A1).with(A2)
    );
    assert_eq!(
        next.stones(Quadrant::BlackDark, Color::Black),
        Bitboard::ROW_1.without(A1).with(A2)
    );
    for q in [Quadrant::WhiteLight, Quadrant::WhiteDark] {
        assert_eq!(next.stones(q, Color::Black), Bitboard::ROW_1);
    }
    for q in Quadrant::ALL {
        assert_eq!(next.stones(q, Color::White), Bitboard::ROW_4);
    }
    assert_eq!(next.turn(), Color::White);
    assert_eq!(next.turn_count(), 1);
    assert_eq!(next.quiet_turns(), 1);
}

#[test]
fn test_every_generated_move_is_legal_and_conserves_stones() {
    let board = Board::starting_position();
    for mv in legal_moves(&board).unwrap() {
        assert!(is_legal(&board, &mv), "{} should be legal", mv);
        let next = apply_move(&board, &mv).unwrap();
        assert_eq!(total_stones(&next, Color::Black), 16);
        assert_eq!(total_stones(&next, Color::White), 16);
    }
}

#[test]
fn test_apply_move_leaves_input_untouched() {
    let board = Board::starting_position();
    let before = board;
    let _ = apply_move(&board, &shobu_move!("0a1 1a1 n1")).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_random_playout_keeps_board_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::starting_position();

    for _ in 0..400 {
        let moves = match legal_moves(&board) {
            Ok(moves) if !moves.is_empty() => moves,
            _ => break,
        };
        let mv = moves[rng.gen_range(0..moves.len())];
        let mover = board.turn();
        let next = apply_move(&board, &mv).unwrap();

        // the mover never loses stones, the opponent loses at most one
        assert_eq!(total_stones(&next, mover), total_stones(&board, mover));
        let lost = total_stones(&board, mover.opposite()) - total_stones(&next, mover.opposite());
        assert!(lost <= 1);
        for q in Quadrant::ALL {
            assert!(!next.stones(q, Color::Black).overlaps(next.stones(q, Color::White)));
            assert!(next.count(q, Color::Black) <= 4);
            assert!(next.count(q, Color::White) <= 4);
        }
        if lost == 0 && !is_push(&board, &mv) {
            assert_eq!(next.quiet_turns(), board.quiet_turns() + 1);
        }
        board = next;
    }
}

#[test]
fn test_only_one_legal_move() {
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
    let moves = legal_moves(&board).unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0], shobu_move!("0a1 3a1 e1"));
}

#[test]
fn test_push_off_edge_wins() {
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
    let mv = shobu_move!("0a1 1a3 n1");
    assert!(is_push(&board, &mv));
    let next = apply_move(&board, &mv).unwrap();
    assert_eq!(next.count(Quadrant::BlackDark, Color::White), 0);
    assert_eq!(next.get(Quadrant::BlackDark, A4), Some(Color::Black));
    assert_eq!(game_ending(&next), Some(GameEnding::Victory(Color::Black)));
    assert_eq!(legal_moves(&next).unwrap().len(), 0);
    assert!(apply_move(&next, &shobu_move!("2a4 1a4 s1")).is_err());
}

#[test]
fn test_distance_two_push() {
    let mut board = shobu_position! {
        wwww wwww
        .... ....
        .... ....
        bbbb bbbb
        wwww ...w
        .... ....
        .... w...
        bbbb bb..
    };
    board.set_quiet_turns(12);
    let next = apply_move(&board, &shobu_move!("0a1 1a1 n2")).unwrap();
    assert_eq!(next.get(Quadrant::BlackDark, A3), Some(Color::Black));
    assert_eq!(next.get(Quadrant::BlackDark, A4), Some(Color::White));
    assert_eq!(next.get(Quadrant::BlackDark, A2), None);
    assert_eq!(next.get(Quadrant::BlackLight, A3), Some(Color::Black));
    assert_eq!(next.count(Quadrant::BlackDark, Color::White), 2);
    assert_eq!(next.quiet_turns(), 0);
}

#[test]
fn test_blocked_push_is_illegal() {
    let board = shobu_position! {
        wwww wwww
        .... ....
        .... ....
        bbbb bbbb
        wwww ....
        .... w...
        .... w...
        bbbb b...
    };
    let mv = shobu_move!("0a1 1a1 n1");
    assert!(!is_legal(&board, &mv));
    assert_eq!(apply_move(&board, &mv), Err(RulesError::IllegalMove { mv }));
    // two stones in a row cannot be pushed either
    assert!(!is_legal(&board, &shobu_move!("0a1 1a1 n2")));
}

#[test]
fn test_own_stone_blocks_aggressive_move() {
    let board = shobu_position! {
        wwww wwww
        .... ....
        .... ....
        bbbb bbbb
        wwww w...
        .... ....
        .... b...
        bbbb b...
    };
    assert!(!is_legal(&board, &shobu_move!("0b1 1a1 n1")));
    assert!(!is_legal(&board, &shobu_move!("0b1 1a1 n2")));
    assert!(is_legal(&board, &shobu_move!("0b1 1a2 n1")));
}

#[test]
fn test_topology_violations_are_illegal() {
    let board = Board::starting_position();
    // passive move on the opponent's home quadrant
    assert!(!is_legal(&board, &shobu_move!("2a4 1a1 n1")));
    // aggressive quadrant of the same shade
    assert!(!is_legal(&board, &shobu_move!("0a1 2a1 n1")));
    // passive path blocked
    assert!(!is_legal(&board, &shobu_move!("0a1 1a1 e1")));
    // no stone on the passive source
    assert!(!is_legal(&board, &shobu_move!("0a2 1a1 n1")));
    // aggressive landing off the grid
    assert!(!is_legal(&board, &shobu_move!("0a1 1a1 s1")));
}

#[test]
fn test_no_legal_moves_is_an_error() {
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
    assert_eq!(game_ending(&board), None);
    assert_eq!(
        legal_moves(&board),
        Err(RulesError::NoLegalMoves { turn: Color::Black })
    );
}

#[test]
fn test_quiet_turn_limit_draws() {
    let mut board = Board::starting_position();
    board.set_quiet_turns(QUIET_TURN_LIMIT - 1);
    assert_eq!(game_ending(&board), None);
    let next = apply_move(&board, &shobu_move!("0a1 1a1 n1")).unwrap();
    assert_eq!(game_ending(&next), Some(GameEnding::Draw));
    assert!(legal_moves(&next).unwrap().is_empty());
}

#[test]
fn test_victory_for_white() {
    let mut board = shobu_position! {
        wwww wwww
        .... ....
        .... ....
        .... bbbb
        wwww wwww
        .... ....
        .... ....
        bbbb bbbb
    };
    board.set_turn(Color::Black);
    assert_eq!(game_ending(&board), Some(GameEnding::Victory(Color::White)));
}
