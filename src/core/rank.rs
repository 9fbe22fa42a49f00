//! Card ranks ordered by strength.
//!
//! Ranks use their face value for the numbered cards, so the raw encoding is
//! 3..=10 for the pips, then 11 = Jack, 12 = Queen, 13 = King, 14 = Ace,
//! 15 = "2", 16 = Small Joker and 17 = Big Joker. Comparing two `Rank`s
//! compares their strength.

use serde::{Deserialize, Serialize};

use super::error::{Result, SolverError};

/// One of the 15 card ranks.
///
/// ```
/// use dou_solver::core::Rank;
///
/// let ace = Rank::new(14).unwrap();
/// assert_eq!(ace, Rank::ACE);
/// assert!(Rank::TWO > Rank::ACE);
/// assert!(Rank::new(2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const THREE: Rank = Rank(3);
    pub const FOUR: Rank = Rank(4);
    pub const FIVE: Rank = Rank(5);
    pub const SIX: Rank = Rank(6);
    pub const SEVEN: Rank = Rank(7);
    pub const EIGHT: Rank = Rank(8);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);
    pub const TWO: Rank = Rank(15);
    pub const SMALL_JOKER: Rank = Rank(16);
    pub const BIG_JOKER: Rank = Rank(17);

    /// Number of distinct ranks.
    pub const COUNT: usize = 15;

    /// Create a rank from its raw value, rejecting anything outside 3..=17.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::THREE.0..=Self::BIG_JOKER.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SolverError::InvalidRank(value))
        }
    }

    /// Raw rank value (3..=17).
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position in strength order (3 → 0, Big Joker → 14).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - Self::THREE.0) as usize
    }

    /// Inverse of [`Rank::index`].
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u8 + Self::THREE.0)
    }

    /// The rank `steps` positions above this one.
    ///
    /// Only used for runs, which never leave 3..=Ace.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, steps: u8) -> Self {
        debug_assert!(self.0 + steps <= Self::BIG_JOKER.0);
        Self(self.0 + steps)
    }

    /// All ranks, weakest first.
    pub fn all() -> impl Iterator<Item = Rank> + Clone {
        Self::range(Self::THREE, Self::BIG_JOKER)
    }

    /// Ranks from `low` to `high` inclusive.
    pub fn range(low: Rank, high: Rank) -> impl Iterator<Item = Rank> + Clone {
        (low.0..=high.0).map(Rank)
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 >= Self::SMALL_JOKER.0
    }

    /// Whether the rank may appear in a straight, pair run or airplane body.
    #[must_use]
    pub const fn is_sequence_rank(self) -> bool {
        self.0 <= Self::ACE.0
    }

    /// How many copies of this rank a single deck holds.
    #[must_use]
    pub const fn deck_copies(self) -> u8 {
        if self.is_joker() {
            1
        } else {
            4
        }
    }

    /// Display name used in move labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            14 => "Ace",
            15 => "2",
            16 => "Small Joker",
            _ => "Big Joker",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = SolverError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
