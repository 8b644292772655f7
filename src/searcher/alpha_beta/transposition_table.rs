//! Generic transposition table for caching search results.

use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone)]
pub struct TTEntry<M: Clone> {
    pub score: i16,
    pub depth: u8,
    pub bound_type: BoundType,
    pub best_move: Option<M>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BoundType {
    Exact,
    Lower,
    Upper,
}

const DEFAULT_TT_ENTRIES: usize = 1 << 16;

pub struct TranspositionTable<M: Clone + Send + Sync> {
    table: DashMap<u64, TTEntry<M>>,
    hits: AtomicUsize,
}

impl<M: Clone + Send + Sync> Default for TranspositionTable<M> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TT_ENTRIES)
    }
}

impl<M: Clone + Send + Sync> TranspositionTable<M> {
    pub fn with_capacity(entries: usize) -> Self {
        Self {
            table: DashMap::with_capacity(entries),
            hits: AtomicUsize::new(0),
        }
    }

    /// Stores a result. A shallower result never replaces a deeper one for the
    /// same position, except that it may fill in a missing best move.
    pub fn store(&self, hash: u64, score: i16, depth: u8, bound_type: BoundType, best_move: Option<M>) {
        let entry = TTEntry {
            score,
            depth,
            bound_type,
            best_move,
        };

        self.table
            .entry(hash)
            .and_modify(|existing| {
                if entry.depth >= existing.depth {
                    *existing = entry.clone();
                } else if existing.best_move.is_none() {
                    existing.best_move = entry.best_move.clone();
                }
            })
            .or_insert_with(|| entry.clone());
    }

    /// Probes the table. Returns a cutoff score when the stored bound settles the
    /// `[alpha, beta]` window at `depth` or deeper, and the stored best move (if
    /// any) for move ordering either way.
    pub fn probe_with_move(&self, hash: u64, depth: u8, alpha: i16, beta: i16) -> (Option<i16>, Option<M>) {
        let entry = match self.table.get(&hash) {
            Some(entry) => entry,
            None => return (None, None),
        };

        let best_move = entry.best_move.clone();
        if entry.depth < depth {
            return (None, best_move);
        }

        let cutoff = match entry.bound_type {
            BoundType::Exact => Some(entry.score),
            BoundType::Lower if entry.score >= beta => Some(beta),
            BoundType::Upper if entry.score <= alpha => Some(alpha),
            _ => None,
        };
        if cutoff.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        (cutoff, best_move)
    }

    pub fn clear(&self) {
        self.table.clear();
        self.hits.store(0, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_entry_cuts_off_at_same_or_lower_depth() {
        let table = TranspositionTable::<u8>::default();
        table.store(7, 42, 3, BoundType::Exact, Some(1));

        assert_eq!(table.probe_with_move(7, 3, -100, 100), (Some(42), Some(1)));
        assert_eq!(table.probe_with_move(7, 2, -100, 100), (Some(42), Some(1)));
        // too shallow for a cutoff, but the move is still useful
        assert_eq!(table.probe_with_move(7, 4, -100, 100), (None, Some(1)));
        assert_eq!(table.hits(), 2);
    }

    #[test]
    fn test_bounds_only_cut_outside_window() {
        let table = TranspositionTable::<u8>::default();
        table.store(1, 50, 2, BoundType::Lower, None);
        table.store(2, -50, 2, BoundType::Upper, None);

        assert_eq!(table.probe_with_move(1, 2, 0, 40), (Some(40), None));
        assert_eq!(table.probe_with_move(1, 2, 0, 60), (None, None));
        assert_eq!(table.probe_with_move(2, 2, -40, 0), (Some(-40), None));
        assert_eq!(table.probe_with_move(2, 2, -60, 0), (None, None));
    }

    #[test]
    fn test_shallow_store_keeps_deeper_entry() {
        let table = TranspositionTable::<u8>::default();
        table.store(9, 10, 5, BoundType::Exact, None);
        table.store(9, 99, 1, BoundType::Exact, Some(3));

        assert_eq!(table.probe_with_move(9, 5, -100, 100), (Some(10), Some(3)));
        assert_eq!(table.size(), 1);
    }

    #[test]
    fn test_clear_resets_entries_and_hits() {
        let table = TranspositionTable::<u8>::default();
        assert_eq!(table.probe_with_move(3, 1, 0, 0), (None, None));
        table.store(3, 0, 1, BoundType::Exact, Some(2));
        assert_eq!(table.probe_with_move(3, 1, 0, 0), (Some(0), Some(2)));
        assert_eq!(table.hits(), 1);
        table.clear();
        assert_eq!(table.size(), 0);
        assert_eq!(table.hits(), 0);
        assert_eq!(table.probe_with_move(3, 1, 0, 0), (None, None));
    }
}
