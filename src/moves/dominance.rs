//! Which move may follow which.
//!
//! `beats` is a strict partial order with two special cases layered on top:
//! Pass beats any real move but never another Pass, so passing is only ever
//! legal in response; and Rocket and Bomb cut across shapes.

use std::cmp::Reverse;

use super::generate::candidates;
use super::shape::Move;
use crate::core::Hand;

impl Move {
    /// Whether `self` may be played on top of `previous`.
    ///
    /// ```
    /// use dou_solver::core::Rank;
    /// use dou_solver::moves::Move;
    ///
    /// assert!(Move::Single(Rank::ACE).beats(&Move::Single(Rank::FIVE)));
    /// assert!(Move::Bomb(Rank::THREE).beats(&Move::Pair(Rank::ACE)));
    /// assert!(!Move::Bomb(Rank::TWO).beats(&Move::Rocket));
    /// assert!(Move::Pass.beats(&Move::Single(Rank::THREE)));
    /// assert!(!Move::Pass.beats(&Move::Pass));
    /// ```
    #[must_use]
    pub fn beats(&self, previous: &Move) -> bool {
        match (self, previous) {
            (Move::Pass, Move::Pass) => false,
            (Move::Pass, _) => true,

            (Move::Rocket, Move::Rocket) => false,
            (Move::Rocket, _) => true,
            (_, Move::Rocket) => false,

            (Move::Bomb(a), Move::Bomb(b)) => a > b,
            (Move::Bomb(_), _) => true,

            // Leading: any real move opens.
            (_, Move::Pass) => true,

            (Move::Single(a), Move::Single(b)) | (Move::Pair(a), Move::Pair(b)) => a > b,
            (Move::Straight { start: a, len: la }, Move::Straight { start: b, len: lb })
            | (Move::ConsecutivePairs { start: a, len: la }, Move::ConsecutivePairs { start: b, len: lb }) => {
                la == lb && a > b
            }
            (Move::Triple { rank: a, attachment: x }, Move::Triple { rank: b, attachment: y }) => {
                x.width() == y.width() && a > b
            }
            (
                Move::FourWithTwo { rank: a, pairs: pa, .. },
                Move::FourWithTwo { rank: b, pairs: pb, .. },
            ) => pa == pb && a > b,
            (
                Move::Airplane { start: a, len: la, wing: wa, .. },
                Move::Airplane { start: b, len: lb, wing: wb, .. },
            ) => la == lb && wa == wb && a > b,

            _ => false,
        }
    }
}

/// Every move from `hand` that beats `previous`, strongest options first.
///
/// Moves are ordered by shape priority (Rocket, Bomb, the structured shapes,
/// Pass last), then by lead rank descending. Ties between moves of equal shape
/// and lead are broken by encoding so the order is total.
///
/// ```
/// use dou_solver::core::{Hand, Rank};
/// use dou_solver::moves::{legal_moves, Move};
///
/// let hand = Hand::from_ranks([4, 9, 9]).unwrap();
/// let moves = legal_moves(&hand, &Move::Single(Rank::FIVE));
///
/// assert_eq!(moves, vec![Move::Single(Rank::NINE), Move::Pass]);
/// ```
#[must_use]
pub fn legal_moves(hand: &Hand, previous: &Move) -> Vec<Move> {
    let mut moves: Vec<Move> = candidates(hand).filter(|mv| mv.beats(previous)).collect();
    moves.sort_unstable_by_key(order_key);
    moves
}

fn order_key(mv: &Move) -> Reverse<(u8, u8, u64)> {
    Reverse((
        mv.shape().priority(),
        mv.lead().map_or(0, |rank| rank.value()),
        mv.code(),
    ))
}
