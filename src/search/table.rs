//! Transposition table: solved positions keyed by [`StateKey`].
//!
//! The table is a pure cache. A verdict is a function of the key alone, so a
//! second store for the same key must agree with the first.

use rustc_hash::FxHashMap;

use super::key::StateKey;

/// Map from position to "the mover can force a win".
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: FxHashMap<StateKey, bool>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &StateKey) -> Option<bool> {
        self.entries.get(key).copied()
    }

    /// Record a verdict.
    #[inline]
    pub fn insert(&mut self, key: StateKey, win: bool) {
        let previous = self.entries.insert(key, win);
        debug_assert!(
            previous.map_or(true, |old| old == win),
            "conflicting verdicts for {:?}",
            key
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
