use std::hash::Hash;
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::tree::{NodeId, Tree};
use crate::searcher::{Evaluator, GameMove, GameState, MoveGenerator, SearchError, TimeControl};

/// Tuning knobs for the Monte Carlo searcher.
#[derive(Clone, Debug, PartialEq)]
pub struct MctsConfig {
    /// `C` in the UCT formula.
    pub exploration: f64,
    /// Maximum number of random plies played out from a new leaf.
    pub rollout_depth: u16,
    /// Stop after this many iterations per tree even with time left.
    pub max_iterations: Option<u32>,
    /// Number of independent trees searched in parallel.
    pub workers: usize,
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration: std::f64::consts::SQRT_2,
            rollout_depth: 40,
            max_iterations: None,
            workers: 1,
            seed: 0x5eed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MctsOutcome<M> {
    pub best_move: M,
    /// Iterations completed, summed over all workers.
    pub iterations: u32,
    /// Root visits of the chosen move, summed over all workers.
    pub visits: u32,
    pub duration: Duration,
}

/// Root statistics of one finished tree, in expansion order.
struct TreeSummary<M> {
    root_children: Vec<(M, u32)>,
    iterations: u32,
}

/// UCT search from `state`, returning the most visited root move.
///
/// At least one full iteration runs even when `time_control` is already
/// stopped. A position with a single legal move returns it straight away.
pub fn mcts_search<S, G, E>(
    state: &S,
    move_generator: &G,
    evaluator: &E,
    config: &MctsConfig,
    time_control: &TimeControl,
) -> Result<MctsOutcome<G::Move>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: Hash + Eq,
    E: Evaluator<S>,
{
    let started = Instant::now();
    let candidates = move_generator.generate_moves(state);
    let candidates = candidates.as_ref();
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }
    if candidates.len() == 1 {
        return Ok(MctsOutcome {
            best_move: candidates[0].clone(),
            iterations: 0,
            visits: 0,
            duration: started.elapsed(),
        });
    }

    let workers = config.workers.max(1);
    let summaries: Vec<TreeSummary<G::Move>> = if workers == 1 {
        vec![run_tree(
            state,
            move_generator,
            evaluator,
            config,
            time_control,
            config.seed,
        )]
    } else {
        (0..workers)
            .into_par_iter()
            .map(|worker| {
                run_tree(
                    state,
                    move_generator,
                    evaluator,
                    config,
                    time_control,
                    worker_seed(config.seed, worker),
                )
            })
            .collect()
    };

    let mut visits: FxHashMap<G::Move, u32> = FxHashMap::default();
    let mut iterations = 0;
    for summary in summaries {
        iterations += summary.iterations;
        for (mv, child_visits) in summary.root_children {
            *visits.entry(mv).or_insert(0) += child_visits;
        }
    }

    // Ties go to the earliest move in generation order.
    let mut best_move = &candidates[0];
    let mut best_visits = visits.get(best_move).copied().unwrap_or(0);
    for mv in &candidates[1..] {
        let mv_visits = visits.get(mv).copied().unwrap_or(0);
        if mv_visits > best_visits {
            best_move = mv;
            best_visits = mv_visits;
        }
    }

    let duration = started.elapsed();
    debug!(
        "mcts: {} iterations over {} worker(s) in {:?}, best move {:?} with {} visits",
        iterations, workers, duration, best_move, best_visits
    );

    Ok(MctsOutcome {
        best_move: best_move.clone(),
        iterations,
        visits: best_visits,
        duration,
    })
}

fn worker_seed(seed: u64, worker: usize) -> u64 {
    seed ^ (worker as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn shuffled_moves<S, G>(state: &S, move_generator: &G, rng: &mut fastrand::Rng) -> Vec<G::Move>
where
    S: GameState,
    G: MoveGenerator<S>,
{
    let mut moves = move_generator.generate_moves(state).as_ref().to_vec();
    rng.shuffle(&mut moves);
    moves
}

fn run_tree<S, G, E>(
    state: &S,
    move_generator: &G,
    evaluator: &E,
    config: &MctsConfig,
    time_control: &TimeControl,
    seed: u64,
) -> TreeSummary<G::Move>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    let mut rng = fastrand::Rng::with_seed(seed);
    let root_moves = shuffled_moves(state, move_generator, &mut rng);
    // The root's own mover never matters: its value is not read.
    let mut tree = Tree::new(state.clone(), root_moves, !state.is_maximizing_player());
    let mut iterations: u32 = 0;

    loop {
        if iterations > 0 {
            if time_control.is_stopped() {
                break;
            }
            if let Some(max) = config.max_iterations {
                if iterations >= max {
                    break;
                }
            }
        }

        let leaf = select(&tree, config.exploration);
        let node = expand(&mut tree, leaf, move_generator, &mut rng);
        let reward = rollout(
            &tree.get(node).state,
            move_generator,
            evaluator,
            config.rollout_depth,
            &mut rng,
        );
        tree.backpropagate(node, reward);
        iterations += 1;
    }

    debug!("mcts tree (seed {:#x}) grew to {} nodes", seed, tree.len());
    let root = tree.get(Tree::<S, G::Move>::ROOT);
    let root_children = root
        .children
        .iter()
        .filter_map(|&child| {
            let child = tree.get(child);
            child.mv.clone().map(|mv| (mv, child.visits))
        })
        .collect();

    TreeSummary {
        root_children,
        iterations,
    }
}

/// Walks down through fully expanded nodes, following the best UCT child.
fn select<S, M>(tree: &Tree<S, M>, exploration: f64) -> NodeId {
    let mut current = Tree::<S, M>::ROOT;
    loop {
        let node = tree.get(current);
        if !node.is_fully_expanded() || node.children.is_empty() {
            return current;
        }
        current = best_uct_child(tree, current, exploration);
    }
}

fn best_uct_child<S, M>(tree: &Tree<S, M>, parent: NodeId, exploration: f64) -> NodeId {
    let parent_node = tree.get(parent);
    let log_parent_visits = (parent_node.visits.max(1) as f64).ln();

    let mut best = parent_node.children[0];
    let mut best_value = f64::NEG_INFINITY;
    for &child in &parent_node.children {
        let child_node = tree.get(child);
        let value = if child_node.visits == 0 {
            f64::INFINITY
        } else {
            child_node.mean_reward()
                + exploration * (log_parent_visits / child_node.visits as f64).sqrt()
        };
        if value > best_value {
            best = child;
            best_value = value;
        }
    }
    best
}

/// Adds one child for an untried move of `leaf`; terminal leaves are returned as is.
fn expand<S, G>(
    tree: &mut Tree<S, G::Move>,
    leaf: NodeId,
    move_generator: &G,
    rng: &mut fastrand::Rng,
) -> NodeId
where
    S: GameState,
    G: MoveGenerator<S>,
{
    let mv = match tree.get_mut(leaf).untried.pop() {
        Some(mv) => mv,
        None => return leaf,
    };
    let parent_state = &tree.get(leaf).state;
    let mover_is_maximizing = parent_state.is_maximizing_player();
    let child_state = mv.apply(parent_state);
    let untried = shuffled_moves(&child_state, move_generator, rng);
    tree.add_child(leaf, mv, child_state, untried, mover_is_maximizing)
}

/// Plays random moves from `state` and returns the maximizing player's
/// chance of winning at the end of the playout.
fn rollout<S, G, E>(
    state: &S,
    move_generator: &G,
    evaluator: &E,
    rollout_depth: u16,
    rng: &mut fastrand::Rng,
) -> f64
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    let mut current = state.clone();
    for _ in 0..rollout_depth {
        if current.is_terminal() {
            break;
        }
        let moves = move_generator.generate_moves(&current);
        let moves = moves.as_ref();
        if moves.is_empty() {
            break;
        }
        let mv = &moves[rng.usize(..moves.len())];
        current = mv.apply(&current);
    }
    evaluator.win_probability(&current, true)
}
