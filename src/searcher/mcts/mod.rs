//! UCT Monte Carlo Tree Search over the game traits in `searcher`.
//!
//! Each iteration selects a leaf by UCT, expands one untried move, plays a
//! random rollout and backs the result up the path. With more than one worker,
//! independent trees are grown in parallel and their root visits summed.

mod search;
mod tree;


pub use search::{mcts_search, MctsConfig, MctsOutcome};
pub use tree::NodeId;
