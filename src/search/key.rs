//! Transposition keys.

use serde::{Deserialize, Serialize};

use crate::core::Hand;
use crate::moves::Move;

/// A position as seen by the player about to move.
///
/// Both hands are ordered mover first, so the same key is reached whichever
/// physical player holds the mover's seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey {
    pub mover: u64,
    pub opponent: u64,
    pub last: u64,
}

impl StateKey {
    #[inline]
    #[must_use]
    pub fn new(mover: &Hand, opponent: &Hand, last: &Move) -> Self {
        Self {
            mover: mover.code(),
            opponent: opponent.code(),
            last: last.code(),
        }
    }
}
