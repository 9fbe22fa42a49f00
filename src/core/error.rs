//! Error type shared by the whole crate.

use super::rank::Rank;
use crate::moves::Move;

/// Failures reported by hand construction, deals and checked move application.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// A raw rank value outside 3..=17.
    #[error("invalid rank {0}: expected a value in 3..=17")]
    InvalidRank(u8),

    /// A single hand holding more copies of a rank than the deck has.
    #[error("too many copies of {rank}: {count} exceeds the deck's {limit}")]
    TooManyCopies { rank: Rank, count: u8, limit: u8 },

    /// A move applied to a hand that does not hold its cards.
    #[error("cannot apply `{mv}`: the hand does not hold its cards")]
    IllegalApply { mv: Move },

    /// A move that names no real combination, such as a run leaving 3..=Ace.
    #[error("malformed move {mv:?}: {reason}")]
    InvalidMove { mv: Move, reason: &'static str },

    /// Two hands that together need more copies of a rank than the deck has.
    #[error("deal uses {count} copies of {rank} but the deck holds {limit}")]
    DeckOverflow { rank: Rank, count: u8, limit: u8 },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SolverError::InvalidRank(19).to_string(),
            "invalid rank 19: expected a value in 3..=17"
        );

        let err = SolverError::TooManyCopies { rank: Rank::ACE, count: 5, limit: 4 };
        assert_eq!(err.to_string(), "too many copies of Ace: 5 exceeds the deck's 4");

        let err = SolverError::IllegalApply { mv: Move::Pair(Rank::KING) };
        assert_eq!(err.to_string(), "cannot apply `Pair King`: the hand does not hold its cards");

        let err = SolverError::InvalidMove { mv: Move::Bomb(Rank::BIG_JOKER), reason: "jokers come in one copy" };
        assert_eq!(err.to_string(), "malformed move Bomb(Rank(17)): jokers come in one copy");
    }
}
