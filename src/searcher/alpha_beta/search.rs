//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Minimax with alpha-beta pruning, scored from the maximizing player's side. The
//! window `[alpha, beta]` holds the range of scores that can still change the
//! decision at the root; anything outside it is pruned.
//!
//! # Iterative Deepening
//!
//! Depths 1, 2, 3, ... are searched in turn until the configured maximum, a proven
//! result, or the deadline. The time control is polled at every node. A depth that
//! runs out of time is thrown away and the result of the deepest completed depth
//! is returned.
//!
//! # Move Ordering
//!
//! 1. Best move of the previous iteration (root) or the transposition table move
//! 2. Killer moves (quiet moves that caused cutoffs at the same ply)
//! 3. Game-specific heuristics (via the `MoveOrderer` trait)
//!
//! # Parallel Search
//!
//! Root moves can be searched in parallel with rayon. The transposition table is
//! shared, killer moves are kept per thread.

use std::cmp::{max, min};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;

use super::killer_moves::KillerMovesManager;
use super::transposition_table::{BoundType, TranspositionTable};
use crate::searcher::{
    Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, MoveOrderer, SearchError,
    TimeControl, DECISIVE_SCORE,
};

/// Marker returned up the tree once the time control says stop.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Aborted;

/// Search configuration parameters.
struct SearchConfig {
    max_depth: u8,
    parallel: bool,
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<M> {
    pub best_move: M,
    /// Score of `best_move` from the maximizing player's side.
    pub score: i16,
    /// Deepest iteration that finished before the deadline.
    pub completed_depth: u8,
}

pub struct SearchContext<M: Clone + Send + Sync + 'static> {
    config: SearchConfig,
    position_count: AtomicUsize,
    last_duration: Option<Duration>,
    transposition_table: TranspositionTable<M>,
    killer_manager: KillerMovesManager<M>,
}

impl<M: Clone + PartialEq + Send + Sync + 'static> SearchContext<M> {
    pub fn new(max_depth: u8) -> Self {
        Self::with_parallel(max_depth, false)
    }

    pub fn with_parallel(max_depth: u8, parallel: bool) -> Self {
        Self {
            config: SearchConfig { max_depth, parallel },
            position_count: AtomicUsize::new(0),
            last_duration: None,
            transposition_table: TranspositionTable::default(),
            killer_manager: KillerMovesManager::new(max_depth),
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn max_depth(&self) -> u8 {
        self.config.max_depth
    }

    pub fn reset_stats(&mut self) {
        self.position_count.store(0, Ordering::SeqCst);
        self.last_duration = None;
        self.transposition_table.clear();
        self.killer_manager.clear();
    }

    pub fn store_killer(&self, ply: u8, killer: M) {
        self.killer_manager.store(ply, killer);
    }

    pub fn get_killers(&self, ply: u8) -> [Option<M>; 2] {
        self.killer_manager.get(ply)
    }

    pub fn clear_killers(&mut self) {
        self.killer_manager.clear();
    }

    pub fn searched_position_count(&self) -> usize {
        self.position_count.load(Ordering::SeqCst)
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    pub fn tt_hits(&self) -> usize {
        self.transposition_table.hits()
    }

    pub fn tt_size(&self) -> usize {
        self.transposition_table.size()
    }

    fn increment_position_count(&self) {
        self.position_count.fetch_add(1, Ordering::Relaxed);
    }
}

/// Updates best score and move if new score is better.
/// Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: i16,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut i16,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = if maximizing_player {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better || best_move.is_none() {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

/// Moves `preferred` to the front of `moves`, keeping the order of the rest.
fn promote<M: PartialEq>(moves: &mut [M], start: usize, preferred: &M) -> bool {
    match moves.iter().skip(start).position(|m| m == preferred) {
        Some(offset) => {
            moves[start..=start + offset].rotate_right(1);
            true
        }
        None => false,
    }
}

/// Reorders moves for better alpha-beta pruning.
///
/// Priority: 1) PV move from transposition table, 2) Killer moves, 3) Other moves.
fn reorder_moves_with_heuristics<M: PartialEq>(moves: &mut [M], pv_move: Option<&M>, killers: &[Option<M>; 2]) {
    let mut next_slot = 0;
    if let Some(pv) = pv_move {
        if promote(moves, 0, pv) {
            next_slot = 1;
        }
    }

    for killer in killers.iter().flatten() {
        if Some(killer) == pv_move {
            continue;
        }
        if promote(moves, next_slot, killer) {
            next_slot += 1;
        }
    }
}

/// Searches for the best move using iterative-deepening alpha-beta.
///
/// # Returns
///
/// - `Ok(outcome)` - The best move of the deepest completed depth
/// - `Err(SearchError::DepthTooLow)` - If the maximum depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If no legal moves are available
/// - `Err(SearchError::TimeExhaustedBeforeFirstDepth)` - If depth 1 did not finish in time
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new(6);
/// let outcome = alpha_beta_search(
///     &mut context,
///     &board,
///     &move_gen,
///     &evaluator,
///     &move_orderer,
///     &TimeControl::with_budget(budget),
/// )?;
/// ```
#[must_use = "search returns the best move found"]
pub fn alpha_beta_search<S, G, E, O>(
    context: &mut SearchContext<G::Move>,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    time_control: &TimeControl,
) -> Result<SearchOutcome<G::Move>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S> + 'static,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let max_depth = context.max_depth();
    debug!("alpha-beta search up to depth {}", max_depth);

    if max_depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    let start = Instant::now();
    let maximizing_player = state.is_maximizing_player();
    let mut candidates = move_generator.generate_moves(state);

    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    move_orderer.order_moves(candidates.as_mut(), state);

    let mut outcome: Option<SearchOutcome<G::Move>> = None;

    for depth in 1..=max_depth {
        // PV-first: the previous iteration's best move is searched first
        if let Some(previous) = outcome.as_ref() {
            promote(candidates.as_mut(), 0, &previous.best_move);
        }

        let result = if context.is_parallel() {
            search_root_parallel(
                context,
                state,
                move_generator,
                evaluator,
                move_orderer,
                time_control,
                candidates.as_ref(),
                depth,
                maximizing_player,
            )
        } else {
            search_root_sequential(
                context,
                state,
                move_generator,
                evaluator,
                move_orderer,
                time_control,
                candidates.as_ref(),
                depth,
                maximizing_player,
            )
        };

        let (score, best_move) = match result {
            Ok((score, Some(best_move))) => (score, best_move),
            Ok((_, None)) => break,
            Err(Aborted) => {
                debug!("depth {} aborted by the time control", depth);
                break;
            }
        };

        debug!(
            "depth {} complete: best {:?} score {} ({} positions, {} tt hits, {:?})",
            depth,
            best_move,
            score,
            context.searched_position_count(),
            context.tt_hits(),
            start.elapsed()
        );

        outcome = Some(SearchOutcome {
            best_move,
            score,
            completed_depth: depth,
        });

        if score.abs() >= DECISIVE_SCORE {
            debug!("proven result at depth {}, stopping early", depth);
            break;
        }
    }

    context.last_duration = Some(start.elapsed());
    outcome.ok_or(SearchError::TimeExhaustedBeforeFirstDepth)
}

#[allow(clippy::too_many_arguments)]
fn search_root_sequential<S, G, E, O>(
    context: &SearchContext<G::Move>,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    time_control: &TimeControl,
    candidates: &[G::Move],
    depth: u8,
    maximizing_player: bool,
) -> Result<(i16, Option<G::Move>), Aborted>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S> + 'static,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let mut best_score = if maximizing_player { i16::MIN } else { i16::MAX };
    let mut best_move = None;
    let mut alpha = i16::MIN;
    let mut beta = i16::MAX;

    for game_move in candidates.iter() {
        let child = game_move.apply(state);
        let score = alpha_beta_minimax(
            context,
            &child,
            move_generator,
            evaluator,
            move_orderer,
            time_control,
            depth - 1,
            1,
            alpha,
            beta,
        )?;

        update_best(score, game_move, maximizing_player, &mut best_score, &mut best_move);

        if maximizing_player {
            alpha = max(alpha, score);
        } else {
            beta = min(beta, score);
        }
    }

    Ok((best_score, best_move))
}

#[allow(clippy::too_many_arguments)]
fn search_root_parallel<S, G, E, O>(
    context: &SearchContext<G::Move>,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    time_control: &TimeControl,
    candidates: &[G::Move],
    depth: u8,
    maximizing_player: bool,
) -> Result<(i16, Option<G::Move>), Aborted>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S> + 'static,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let results: Vec<Result<i16, Aborted>> = candidates
        .par_iter()
        .map(|game_move| {
            let child = game_move.apply(state);
            alpha_beta_minimax(
                context,
                &child,
                move_generator,
                evaluator,
                move_orderer,
                time_control,
                depth - 1,
                1,
                i16::MIN,
                i16::MAX,
            )
        })
        .collect();

    let mut best_score = if maximizing_player { i16::MIN } else { i16::MAX };
    let mut best_move = None;

    for (game_move, result) in candidates.iter().zip(results) {
        let score = result?;
        update_best(score, game_move, maximizing_player, &mut best_score, &mut best_move);
    }

    Ok((best_score, best_move))
}

/// Minimax with alpha-beta pruning, transposition table and killer moves.
///
/// `depth` is the remaining depth, `ply` the distance from the root (used to
/// index killer moves). Returns `Err(Aborted)` as soon as the time control stops.
#[allow(clippy::too_many_arguments)]
fn alpha_beta_minimax<S, G, E, O>(
    context: &SearchContext<G::Move>,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    time_control: &TimeControl,
    depth: u8,
    ply: u8,
    mut alpha: i16,
    mut beta: i16,
) -> Result<i16, Aborted>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S> + 'static,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    if time_control.is_stopped() {
        return Err(Aborted);
    }
    context.increment_position_count();

    if depth == 0 || state.is_terminal() {
        return Ok(evaluator.evaluate(state, depth));
    }

    let hash = state.position_hash();
    let (cutoff_score, tt_move) = context
        .transposition_table
        .probe_with_move(hash, depth, alpha, beta);
    if let Some(score) = cutoff_score {
        return Ok(score);
    }

    let mut candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Ok(evaluator.evaluate(state, depth));
    }

    move_orderer.order_moves(candidates.as_mut(), state);
    let killers = context.get_killers(ply);
    reorder_moves_with_heuristics(candidates.as_mut(), tt_move.as_ref(), &killers);

    let maximizing_player = state.is_maximizing_player();
    let (original_alpha, original_beta) = (alpha, beta);
    let mut best_score = if maximizing_player { i16::MIN } else { i16::MAX };
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        let child = game_move.apply(state);
        let score = alpha_beta_minimax(
            context,
            &child,
            move_generator,
            evaluator,
            move_orderer,
            time_control,
            depth - 1,
            ply + 1,
            alpha,
            beta,
        )?;

        update_best(score, game_move, maximizing_player, &mut best_score, &mut best_move);

        if maximizing_player {
            alpha = max(alpha, score);
        } else {
            beta = min(beta, score);
        }

        if beta <= alpha {
            if !game_move.is_tactical(state) {
                context.store_killer(ply, game_move.clone());
            }
            break;
        }
    }

    let bound_type = if best_score <= original_alpha {
        BoundType::Upper
    } else if best_score >= original_beta {
        BoundType::Lower
    } else {
        BoundType::Exact
    };

    context
        .transposition_table
        .store(hash, best_score, depth, bound_type, best_move);

    Ok(best_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_puts_pv_then_killers_first() {
        let mut moves = vec![1, 2, 3, 4, 5];
        reorder_moves_with_heuristics(&mut moves, Some(&4), &[Some(2), Some(5)]);
        assert_eq!(moves, vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn test_reorder_skips_missing_and_duplicate_moves() {
        let mut moves = vec![1, 2, 3];
        reorder_moves_with_heuristics(&mut moves, Some(&9), &[Some(3), Some(3)]);
        assert_eq!(moves, vec![3, 1, 2]);

        let mut moves = vec![1, 2, 3];
        reorder_moves_with_heuristics(&mut moves, Some(&2), &[Some(2), None]);
        assert_eq!(moves, vec![2, 1, 3]);
    }

    #[test]
    fn test_update_best_prefers_first_of_equal_scores() {
        let mut best_score = i16::MIN;
        let mut best_move = None;
        update_best(5, &'a', true, &mut best_score, &mut best_move);
        update_best(5, &'b', true, &mut best_score, &mut best_move);
        assert_eq!(best_move, Some('a'));
        update_best(-3, &'c', false, &mut best_score, &mut best_move);
        assert_eq!(best_move, Some('c'));
    }
}
