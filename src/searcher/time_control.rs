//! Cooperative time control shared by the searchers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Expected number of moves still to be played, used to split the clock.
const EXPECTED_MOVES_LEFT: u32 = 30;

/// Kept in reserve on every move to cover bookkeeping outside the search.
const SAFETY_MARGIN: Duration = Duration::from_millis(5);

/// Budget for the next move given what is left on the player's clock:
/// a thirtieth of it, never more than half, minus a small safety margin.
pub fn allocate_move_time(time_left: Duration) -> Duration {
    let share = time_left / EXPECTED_MOVES_LEFT;
    let capped = share.min(time_left / 2);
    capped.saturating_sub(SAFETY_MARGIN)
}

/// Thread-safe stop signal with an optional deadline.
///
/// Clones and splits share the same stop flag, so `stop` is seen by all of
/// them. The deadline belongs to each control, which lets a sub-search run
/// out of time without ending the outer search. Searchers poll `is_stopped`
/// at every node.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl TimeControl {
    /// A time control that only stops when `stop` is called.
    pub fn unlimited() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Starts the clock now with `budget` to spend. A budget too large to
    /// express as an `Instant` never runs out.
    pub fn with_budget(budget: Duration) -> Self {
        match Instant::now().checked_add(budget) {
            Some(deadline) => Self::with_deadline(deadline),
            None => Self::unlimited(),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// True once `stop` was called or the deadline has passed.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    /// Time until the deadline, `None` when unlimited.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// A control sharing this stop flag but with an earlier deadline, used to
    /// hand part of a budget to a sub-search.
    pub fn split(&self, budget: Duration) -> Self {
        let candidate = Instant::now().checked_add(budget);
        let deadline = match (self.deadline, candidate) {
            (Some(current), Some(candidate)) => Some(current.min(candidate)),
            (current, candidate) => current.or(candidate),
        };
        Self {
            stopped: Arc::clone(&self.stopped),
            deadline,
        }
    }
}
