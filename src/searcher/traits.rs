//! Core traits for generic game search.
//!
//! States are values: applying a move returns the next state, so parallel
//! branches can search from their own copy without any undo bookkeeping.

use std::fmt::Debug;

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone + Send + Sync {
    /// Returns a hash of the current position for transposition table lookups.
    fn position_hash(&self) -> u64;

    /// Returns true if the player to move is the maximizing player.
    fn is_maximizing_player(&self) -> bool;

    /// Returns true once the game is over (won, lost or drawn).
    fn is_terminal(&self) -> bool;
}

/// Represents an action that turns one game state into the next.
pub trait GameMove: Clone + Send + Sync + PartialEq + Debug {
    type State: GameState;

    /// Returns the state after playing this move. The input is left untouched.
    fn apply(&self, state: &Self::State) -> Self::State;

    /// Returns true if this move changes the material balance. Tactical moves
    /// are never stored as killer moves. Default implementation returns false.
    fn is_tactical(&self, _state: &Self::State) -> bool {
        false
    }
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState>: Clone + Send + Sync {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the player to move. Empty for terminal states.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState>: Clone + Send + Sync {
    /// Evaluates the given state. Higher scores favor the maximizing player.
    /// Decided games score beyond `DECISIVE_SCORE`, more so with more
    /// `remaining_depth` so that faster wins are preferred.
    fn evaluate(&self, state: &S, remaining_depth: u8) -> i16;

    /// Chance in `[0, 1]` that the maximizing player (or the minimizing one,
    /// when `maximizing` is false) wins from `state`. Used to score unfinished
    /// playouts. The default squashes `evaluate` through a logistic curve.
    fn win_probability(&self, state: &S, maximizing: bool) -> f64 {
        let score = self.evaluate(state, 0) as f64;
        let probability = 1.0 / (1.0 + (-score / 250.0).exp());
        if maximizing {
            probability
        } else {
            1.0 - probability
        }
    }
}

/// Orders moves to improve alpha-beta pruning efficiency.
pub trait MoveOrderer<S: GameState, M>: Clone + Send + Sync {
    /// Sorts moves in-place, placing "better" moves first.
    fn order_moves(&self, moves: &mut [M], state: &S);
}

/// A no-op move orderer for games without move ordering heuristics.
#[derive(Clone, Default, Debug)]
pub struct NoOpMoveOrderer;

impl<S: GameState, M> MoveOrderer<S, M> for NoOpMoveOrderer {
    #[inline(always)]
    fn order_moves(&self, _moves: &mut [M], _state: &S) {}
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> + Send + Sync {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M: Send + Sync> MoveCollection<M> for Vec<M> {}
