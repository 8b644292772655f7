//! Generic iterative-deepening alpha-beta search.

mod killer_moves;
mod search;
mod transposition_table;


pub use search::{alpha_beta_search, SearchContext, SearchOutcome};
pub use transposition_table::{BoundType, TranspositionTable};
