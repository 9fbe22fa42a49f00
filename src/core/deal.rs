//! A pair of hands drawn from one deck.
//!
//! `Deal` is the starting position of a solve: `first` moves first. Both
//! hands together may never need more copies of a rank than a 54-card deck
//! holds.

use serde::{Deserialize, Serialize};

use super::error::{Result, SolverError};
use super::hand::Hand;
use super::rank::Rank;
use super::rng::DealRng;

/// Starting hands of the two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DealHands")]
pub struct Deal {
    /// Hand of the player who leads.
    pub first: Hand,
    /// Hand of the player who responds.
    pub second: Hand,
}

/// Unchecked wire form of a [`Deal`].
#[derive(Deserialize)]
struct DealHands {
    first: Hand,
    second: Hand,
}

impl TryFrom<DealHands> for Deal {
    type Error = SolverError;

    fn try_from(raw: DealHands) -> Result<Self> {
        Self::new(raw.first, raw.second)
    }
}

impl Deal {
    /// Pair two hands, checking they fit in one deck.
    pub fn new(first: Hand, second: Hand) -> Result<Self> {
        for rank in Rank::all() {
            let count = first.count(rank) + second.count(rank);
            let limit = rank.deck_copies();
            if count > limit {
                return Err(SolverError::DeckOverflow { rank, count, limit });
            }
        }
        Ok(Self { first, second })
    }

    /// Shuffle a full deck with `seed` and deal `first_len` then `second_len` cards.
    #[must_use]
    pub fn random(seed: u64, first_len: usize, second_len: usize) -> Self {
        assert!(
            first_len + second_len <= 54,
            "Cannot deal {} cards from a 54-card deck",
            first_len + second_len
        );

        let mut deck = Hand::full_deck().to_ranks();
        DealRng::new(seed).shuffle(&mut deck);

        let mut first = Hand::new();
        let mut second = Hand::new();
        for &rank in &deck[..first_len] {
            first.give(rank, 1);
        }
        for &rank in &deck[first_len..first_len + second_len] {
            second.give(rank, 1);
        }

        Self { first, second }
    }

    /// Cards of the deck held by neither player.
    #[must_use]
    pub fn remaining(&self) -> Hand {
        let mut rest = Hand::full_deck();
        for (rank, count) in self.first.iter().chain(self.second.iter()) {
            rest.take(rank, count);
        }
        rest
    }

    /// The same deal with the other player leading.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}
