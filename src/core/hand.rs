//! Per-rank card counts held by one player.
//!
//! A `Hand` never tracks individual cards, only how many of each rank remain.
//! Moves mutate hands in place through `Move::apply` / `Move::undo`, which
//! must be called in strictly nested order on the same hand.

use serde::{Deserialize, Serialize};

use super::error::{Result, SolverError};
use super::rank::Rank;

/// Card counts indexed by rank.
///
/// ```
/// use dou_solver::core::{Hand, Rank};
///
/// let hand = Hand::from_ranks([3, 3, 3, 4, 5]).unwrap();
/// assert_eq!(hand.count(Rank::THREE), 3);
/// assert_eq!(hand.len(), 5);
/// assert!(Hand::from_ranks([3, 18]).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HandCounts")]
pub struct Hand {
    counts: [u8; Rank::COUNT],
}

/// Unchecked wire form of a [`Hand`].
#[derive(Deserialize)]
struct HandCounts {
    counts: [u8; Rank::COUNT],
}

impl TryFrom<HandCounts> for Hand {
    type Error = SolverError;

    fn try_from(raw: HandCounts) -> Result<Self> {
        let hand = Self { counts: raw.counts };
        for rank in Rank::all() {
            hand.check_copies(rank)?;
        }
        Ok(hand)
    }
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; Rank::COUNT] }
    }

    /// Build a hand from raw rank values, one entry per card.
    ///
    /// Every value must lie in 3..=17 and no rank may exceed its deck count.
    /// Nothing is returned on failure, so a partially built hand never escapes.
    pub fn from_ranks(values: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut hand = Self::new();
        for value in values {
            let rank = Rank::new(value)?;
            hand.counts[rank.index()] += 1;
            hand.check_copies(rank)?;
        }
        Ok(hand)
    }

    /// Build a hand from `(rank value, count)` pairs.
    pub fn from_counts(counts: &[(u8, u8)]) -> Result<Self> {
        let mut hand = Self::new();
        for &(value, count) in counts {
            let rank = Rank::new(value)?;
            hand.counts[rank.index()] = hand.counts[rank.index()].saturating_add(count);
            hand.check_copies(rank)?;
        }
        Ok(hand)
    }

    /// Every card of one 54-card deck.
    #[must_use]
    pub fn full_deck() -> Self {
        let mut hand = Self::new();
        for rank in Rank::all() {
            hand.counts[rank.index()] = rank.deck_copies();
        }
        hand
    }

    fn check_copies(&self, rank: Rank) -> Result<()> {
        let count = self.count(rank);
        let limit = rank.deck_copies();
        if count > limit {
            return Err(SolverError::TooManyCopies { rank, count, limit });
        }
        Ok(())
    }

    /// Number of cards of `rank`.
    #[inline]
    #[must_use]
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.index()]
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate over `(rank, count)` for every rank with at least one card.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(i, &c)| (Rank::from_index(i), c))
    }

    /// Expand into one rank per card, weakest first.
    #[must_use]
    pub fn to_ranks(&self) -> Vec<Rank> {
        self.iter()
            .flat_map(|(rank, count)| std::iter::repeat(rank).take(count as usize))
            .collect()
    }

    /// Whether this hand holds at least every card of `other`.
    #[must_use]
    pub fn contains(&self, other: &Hand) -> bool {
        self.counts.iter().zip(other.counts.iter()).all(|(a, b)| a >= b)
    }

    /// Remove `n` cards of `rank`.
    ///
    /// Panics if the hand holds fewer than `n`.
    #[inline]
    pub(crate) fn take(&mut self, rank: Rank, n: u8) {
        let slot = &mut self.counts[rank.index()];
        assert!(*slot >= n, "hand holds {} of {}, cannot take {}", *slot, rank, n);
        *slot -= n;
    }

    /// Return `n` cards of `rank`.
    #[inline]
    pub(crate) fn give(&mut self, rank: Rank, n: u8) {
        self.counts[rank.index()] += n;
    }

    /// Pack the 15 counts into 3 bits each, weakest rank in the low bits.
    ///
    /// Counts never exceed 4, so the packing is injective over every hand a
    /// deck can produce.
    #[must_use]
    pub fn code(&self) -> u64 {
        self.counts
            .iter()
            .enumerate()
            .fold(0u64, |code, (i, &c)| code | (u64::from(c) & 0x7) << (i * 3))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, (rank, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}*{}", rank, count)?;
        }
        Ok(())
    }
}
