//! Killer move storage using thread-local storage for parallel search.

use std::cell::RefCell;

use thread_local::ThreadLocal;

type KillerMovePair<M> = [Option<M>; 2];

/// Keeps two killer moves per ply, separately for every search thread.
///
/// Killer moves are quiet moves that caused cutoffs at the same ply in other
/// branches of the search tree. Trying them early improves pruning.
pub(crate) struct KillerMovesManager<M: Send> {
    max_ply: usize,
    killers: ThreadLocal<RefCell<Vec<KillerMovePair<M>>>>,
}

impl<M: Clone + PartialEq + Send> KillerMovesManager<M> {
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_ply: max_depth as usize,
            killers: ThreadLocal::new(),
        }
    }

    fn storage(&self) -> &RefCell<Vec<KillerMovePair<M>>> {
        self.killers
            .get_or(|| RefCell::new((0..=self.max_ply).map(|_| [None, None]).collect()))
    }

    pub fn store(&self, ply: u8, killer: M) {
        let mut killers = self.storage().borrow_mut();
        if let Some(slot) = killers.get_mut(ply as usize) {
            if slot[0].as_ref() == Some(&killer) {
                return;
            }
            slot[1] = slot[0].take();
            slot[0] = Some(killer);
        }
    }

    pub fn get(&self, ply: u8) -> KillerMovePair<M> {
        self.storage()
            .borrow()
            .get(ply as usize)
            .cloned()
            .unwrap_or([None, None])
    }

    pub fn clear(&mut self) {
        self.killers.clear();
    }
}
