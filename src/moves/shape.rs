//! Move representation: one variant per playable shape.
//!
//! A `Move` names exactly the cards it removes from a hand. `apply` and
//! `undo` are exact inverses and must be called in stack order on the same
//! hand; search relies on this to explore the tree without copying hands.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Hand, Rank, Result, SolverError};

/// Wing ranks of an airplane, in increasing rank order.
///
/// Airplane bodies are at most six triples long, so wings never spill.
pub type Wings = SmallVec<[Rank; 6]>;

/// Structural category of a move.
///
/// The discriminant doubles as the tag in the low bits of [`Move::code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Shape {
    Single = 0,
    Pair = 1,
    Straight = 2,
    ConsecutivePairs = 3,
    FourWithTwo = 4,
    Airplane = 5,
    Triple = 6,
    Bomb = 7,
    Rocket = 8,
    Pass = 9,
}

impl Shape {
    /// Tag value used by the move encoding.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> u64 {
        self as u64
    }

    /// Position in the "strongest options first" ordering of legal moves.
    ///
    /// Rocket first, then Bomb, then the structured shapes, Pass last.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Shape::Rocket => 9,
            Shape::Bomb => 8,
            Shape::Triple => 7,
            Shape::Airplane => 6,
            Shape::FourWithTwo => 5,
            Shape::ConsecutivePairs => 4,
            Shape::Straight => 3,
            Shape::Pair => 2,
            Shape::Single => 1,
            Shape::Pass => 0,
        }
    }
}

/// What rides along with a triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attachment {
    None,
    Single(Rank),
    Pair(Rank),
}

impl Attachment {
    /// Cards per attachment unit (0 for a bare triple).
    #[must_use]
    pub const fn width(self) -> u8 {
        match self {
            Attachment::None => 0,
            Attachment::Single(_) => 1,
            Attachment::Pair(_) => 2,
        }
    }

    /// The attachment viewed as a standalone move.
    #[must_use]
    pub fn as_move(self) -> Move {
        match self {
            Attachment::None => Move::Pass,
            Attachment::Single(rank) => Move::Single(rank),
            Attachment::Pair(rank) => Move::Pair(rank),
        }
    }
}

/// Wing unit carried by an airplane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WingKind {
    None = 0,
    Single = 1,
    Pair = 2,
}

impl WingKind {
    /// Cards per wing.
    #[must_use]
    pub const fn unit(self) -> u8 {
        self as u8
    }
}

/// One playable combination.
///
/// ```
/// use dou_solver::core::{Hand, Rank};
/// use dou_solver::moves::Move;
///
/// let mut hand = Hand::from_ranks([5, 6, 7, 8, 9, 9]).unwrap();
/// let straight = Move::Straight { start: Rank::FIVE, len: 5 };
///
/// straight.apply(&mut hand);
/// assert_eq!(hand.len(), 1);
/// straight.undo(&mut hand);
/// assert_eq!(hand.len(), 6);
/// ```
///
/// Deserialization runs [`Move::validate`], so a decoded move always names
/// a real combination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoveRepr")]
pub enum Move {
    /// Decline to play. Also stands for "nobody has led yet".
    Pass,
    Single(Rank),
    Pair(Rank),
    /// `len` (5..=12) consecutive singles inside 3..=Ace.
    Straight { start: Rank, len: u8 },
    /// `len` (3..=12) consecutive pairs inside 3..=Ace.
    ConsecutivePairs { start: Rank, len: u8 },
    Triple { rank: Rank, attachment: Attachment },
    /// Four of a kind.
    Bomb(Rank),
    /// Both jokers.
    Rocket,
    /// Four of a kind with two singles (`pairs == false`) or two pairs.
    FourWithTwo {
        rank: Rank,
        first: Rank,
        second: Rank,
        pairs: bool,
    },
    /// `len` (2..=6) consecutive triples, optionally with one wing per triple.
    Airplane {
        start: Rank,
        len: u8,
        wing: WingKind,
        wings: Wings,
    },
}

/// Unchecked wire form of a [`Move`].
#[derive(Deserialize)]
#[serde(rename = "Move")]
enum MoveRepr {
    Pass,
    Single(Rank),
    Pair(Rank),
    Straight { start: Rank, len: u8 },
    ConsecutivePairs { start: Rank, len: u8 },
    Triple { rank: Rank, attachment: Attachment },
    Bomb(Rank),
    Rocket,
    FourWithTwo { rank: Rank, first: Rank, second: Rank, pairs: bool },
    Airplane { start: Rank, len: u8, wing: WingKind, wings: Wings },
}

impl TryFrom<MoveRepr> for Move {
    type Error = SolverError;

    fn try_from(raw: MoveRepr) -> Result<Self> {
        let mv = match raw {
            MoveRepr::Pass => Move::Pass,
            MoveRepr::Single(rank) => Move::Single(rank),
            MoveRepr::Pair(rank) => Move::Pair(rank),
            MoveRepr::Straight { start, len } => Move::Straight { start, len },
            MoveRepr::ConsecutivePairs { start, len } => Move::ConsecutivePairs { start, len },
            MoveRepr::Triple { rank, attachment } => Move::Triple { rank, attachment },
            MoveRepr::Bomb(rank) => Move::Bomb(rank),
            MoveRepr::Rocket => Move::Rocket,
            MoveRepr::FourWithTwo { rank, first, second, pairs } => Move::FourWithTwo { rank, first, second, pairs },
            MoveRepr::Airplane { start, len, wing, wings } => Move::Airplane { start, len, wing, wings },
        };
        mv.validate()?;
        Ok(mv)
    }
}

/// `len` in `lengths` and the run `start..start+len` inside 3..=Ace.
fn check_run(start: Rank, len: u8, lengths: std::ops::RangeInclusive<u8>) -> std::result::Result<(), &'static str> {
    if !lengths.contains(&len) {
        return Err("run length out of range");
    }
    if start.value() + len - 1 > Rank::ACE.value() {
        return Err("run leaves 3..=Ace");
    }
    Ok(())
}

impl Move {
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Move::Pass => Shape::Pass,
            Move::Single(_) => Shape::Single,
            Move::Pair(_) => Shape::Pair,
            Move::Straight { .. } => Shape::Straight,
            Move::ConsecutivePairs { .. } => Shape::ConsecutivePairs,
            Move::Triple { .. } => Shape::Triple,
            Move::Bomb(_) => Shape::Bomb,
            Move::Rocket => Shape::Rocket,
            Move::FourWithTwo { .. } => Shape::FourWithTwo,
            Move::Airplane { .. } => Shape::Airplane,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    /// Rank compared when two moves of the same shape meet: the rank of the
    /// body, or the start of a run. `None` for Pass and Rocket.
    #[must_use]
    pub fn lead(&self) -> Option<Rank> {
        match *self {
            Move::Pass | Move::Rocket => None,
            Move::Single(rank)
            | Move::Pair(rank)
            | Move::Bomb(rank)
            | Move::Triple { rank, .. }
            | Move::FourWithTwo { rank, .. } => Some(rank),
            Move::Straight { start, .. }
            | Move::ConsecutivePairs { start, .. }
            | Move::Airplane { start, .. } => Some(start),
        }
    }

    /// Visit every `(rank, copies)` group of cards this move consumes.
    ///
    /// The same rank may be visited more than once (e.g. a four with two
    /// identical singles).
    pub fn for_each_group(&self, mut f: impl FnMut(Rank, u8)) {
        match self {
            Move::Pass => {}
            Move::Single(rank) => f(*rank, 1),
            Move::Pair(rank) => f(*rank, 2),
            Move::Bomb(rank) => f(*rank, 4),
            Move::Rocket => {
                f(Rank::SMALL_JOKER, 1);
                f(Rank::BIG_JOKER, 1);
            }
            Move::Straight { start, len } => {
                (0..*len).for_each(|i| f(start.offset(i), 1));
            }
            Move::ConsecutivePairs { start, len } => {
                (0..*len).for_each(|i| f(start.offset(i), 2));
            }
            Move::Triple { rank, attachment } => {
                f(*rank, 3);
                match *attachment {
                    Attachment::None => {}
                    Attachment::Single(other) => f(other, 1),
                    Attachment::Pair(other) => f(other, 2),
                }
            }
            Move::FourWithTwo { rank, first, second, pairs } => {
                let unit = if *pairs { 2 } else { 1 };
                f(*rank, 4);
                f(*first, unit);
                f(*second, unit);
            }
            Move::Airplane { start, len, wing, wings } => {
                (0..*len).for_each(|i| f(start.offset(i), 3));
                if *wing != WingKind::None {
                    wings.iter().for_each(|&w| f(w, wing.unit()));
                }
            }
        }
    }

    /// Number of cards this move removes from a hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let mut total = 0;
        self.for_each_group(|_, n| total += n as usize);
        total
    }

    /// The cards of this move as a hand.
    #[must_use]
    pub fn cards(&self) -> Hand {
        let mut hand = Hand::new();
        self.for_each_group(|rank, n| hand.give(rank, n));
        hand
    }

    /// Remove this move's cards from `hand`.
    ///
    /// The hand must hold the cards; moves produced by the generator for this
    /// hand always do. Use [`Move::try_apply`] for moves from elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if the hand lacks any of the cards.
    #[inline]
    pub fn apply(&self, hand: &mut Hand) {
        self.for_each_group(|rank, n| hand.take(rank, n));
    }

    /// Put this move's cards back into `hand`, reversing the latest `apply`.
    #[inline]
    pub fn undo(&self, hand: &mut Hand) {
        self.for_each_group(|rank, n| hand.give(rank, n));
    }

    /// Check the move names a real combination on its own, independent of
    /// any hand. Every generated move passes.
    pub fn validate(&self) -> Result<()> {
        let checked = match self {
            Move::Pass | Move::Rocket | Move::Single(_) => Ok(()),
            Move::Pair(rank) | Move::Bomb(rank) if rank.is_joker() => Err("jokers come in one copy"),
            Move::Pair(_) | Move::Bomb(_) => Ok(()),
            Move::Straight { start, len } => check_run(*start, *len, 5..=12),
            Move::ConsecutivePairs { start, len } => check_run(*start, *len, 3..=12),
            Move::Triple { rank, attachment } => match *attachment {
                _ if rank.is_joker() => Err("jokers come in one copy"),
                Attachment::Single(other) | Attachment::Pair(other) if other == *rank => {
                    Err("attachment repeats the body rank")
                }
                Attachment::Pair(other) if other.is_joker() => Err("jokers come in one copy"),
                _ => Ok(()),
            },
            Move::FourWithTwo { rank, first, second, .. } => {
                if rank.is_joker() || first.is_joker() || second.is_joker() {
                    Err("four with two never uses jokers")
                } else if first == rank || second == rank {
                    Err("attachment repeats the body rank")
                } else if first > second {
                    Err("attachments out of order")
                } else {
                    Ok(())
                }
            }
            Move::Airplane { start, len, wing, wings } => check_run(*start, *len, 2..=6).and_then(|()| {
                let body = *start..=start.offset(*len - 1);
                let expected = if *wing == WingKind::None { 0 } else { *len as usize };
                if wings.len() != expected {
                    Err("wing count does not match the body")
                } else if wings.windows(2).any(|w| w[0] > w[1]) {
                    Err("wings out of order")
                } else if wings.iter().any(|w| body.contains(w)) {
                    Err("wing inside the body")
                } else if *wing == WingKind::Pair && wings.iter().any(|w| w.is_joker()) {
                    Err("jokers come in one copy")
                } else {
                    Ok(())
                }
            }),
        };
        checked.map_err(|reason| SolverError::InvalidMove { mv: self.clone(), reason })
    }

    /// Checked [`Move::apply`]: leaves `hand` untouched and fails with
    /// `InvalidMove` for a malformed move or `IllegalApply` if the hand
    /// lacks any of the cards.
    pub fn try_apply(&self, hand: &mut Hand) -> Result<()> {
        self.validate()?;
        if !hand.contains(&self.cards()) {
            return Err(SolverError::IllegalApply { mv: self.clone() });
        }
        self.apply(hand);
        Ok(())
    }
}

fn write_run(f: &mut std::fmt::Formatter<'_>, start: Rank, len: u8) -> std::fmt::Result {
    write!(f, "{}-{}", start, start.offset(len.saturating_sub(1)))
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => f.write_str("Pass"),
            Move::Single(rank) => write!(f, "Single {}", rank),
            Move::Pair(rank) => write!(f, "Pair {}", rank),
            Move::Bomb(rank) => write!(f, "Bomb {}", rank),
            Move::Rocket => f.write_str("Rocket"),
            Move::Straight { start, len } => {
                f.write_str("Straight ")?;
                write_run(f, *start, *len)
            }
            Move::ConsecutivePairs { start, len } => {
                f.write_str("Consecutive pairs ")?;
                write_run(f, *start, *len)
            }
            Move::Triple { rank, attachment } => match attachment {
                Attachment::None => write!(f, "Triple {}", rank),
                Attachment::Single(other) => write!(f, "Triple {} + Single {}", rank, other),
                Attachment::Pair(other) => write!(f, "Triple {} + Pair {}", rank, other),
            },
            Move::FourWithTwo { rank, first, second, pairs } => {
                let kind = if *pairs { "Pairs" } else { "Singles" };
                write!(f, "Four {} + {} {} {}", rank, kind, first, second)
            }
            Move::Airplane { start, len, wing, wings } => {
                f.write_str("Airplane ")?;
                write_run(f, *start, *len)?;
                match wing {
                    WingKind::None => return Ok(()),
                    WingKind::Single => f.write_str(" + Singles")?,
                    WingKind::Pair => f.write_str(" + Pairs")?,
                }
                for w in wings {
                    write!(f, " {}", w)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn hand(counts: &[(u8, u8)]) -> Hand {
        Hand::from_counts(counts).unwrap()
    }

    #[test]
    fn test_card_counts() {
        assert_eq!(Move::Pass.card_count(), 0);
        assert_eq!(Move::Single(Rank::ACE).card_count(), 1);
        assert_eq!(Move::Rocket.card_count(), 2);
        assert_eq!(Move::Straight { start: Rank::THREE, len: 7 }.card_count(), 7);
        assert_eq!(Move::ConsecutivePairs { start: Rank::THREE, len: 3 }.card_count(), 6);
        assert_eq!(
            Move::Triple { rank: Rank::KING, attachment: Attachment::Pair(Rank::FOUR) }.card_count(),
            5
        );
        assert_eq!(
            Move::FourWithTwo { rank: Rank::NINE, first: Rank::THREE, second: Rank::FIVE, pairs: true }
                .card_count(),
            8
        );
        let plane = Move::Airplane {
            start: Rank::THREE,
            len: 2,
            wing: WingKind::Single,
            wings: smallvec![Rank::SEVEN, Rank::NINE],
        };
        assert_eq!(plane.card_count(), 8);
    }

    #[test]
    fn test_apply_undo_rocket() {
        let mut h = hand(&[(16, 1), (17, 1), (3, 1)]);
        let before = h;

        Move::Rocket.apply(&mut h);
        assert_eq!(h, hand(&[(3, 1)]));

        Move::Rocket.undo(&mut h);
        assert_eq!(h, before);
    }

    #[test]
    fn test_apply_undo_four_with_same_singles() {
        let mut h = hand(&[(9, 4), (3, 2)]);
        let mv = Move::FourWithTwo { rank: Rank::NINE, first: Rank::THREE, second: Rank::THREE, pairs: false };

        mv.apply(&mut h);
        assert!(h.is_empty());

        mv.undo(&mut h);
        assert_eq!(h, hand(&[(9, 4), (3, 2)]));
    }

    #[test]
    fn test_try_apply_rejects_missing_cards() {
        let mut h = hand(&[(5, 1)]);
        let mv = Move::Pair(Rank::FIVE);

        assert_eq!(mv.try_apply(&mut h), Err(SolverError::IllegalApply { mv: mv.clone() }));
        assert_eq!(h, hand(&[(5, 1)]));

        assert!(Move::Single(Rank::FIVE).try_apply(&mut h).is_ok());
        assert!(h.is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot take 2")]
    fn test_apply_missing_cards_panics() {
        let mut h = hand(&[(5, 1)]);
        Move::Pair(Rank::FIVE).apply(&mut h);
    }

    #[test]
    fn test_try_apply_rejects_malformed_move() {
        let mut h = Hand::full_deck();
        let mv = Move::Straight { start: Rank::JACK, len: 5 };

        assert!(matches!(mv.try_apply(&mut h), Err(SolverError::InvalidMove { .. })));
        assert_eq!(h, Hand::full_deck());
    }

    #[test]
    fn test_validate() {
        assert!(Move::Straight { start: Rank::TEN, len: 5 }.validate().is_ok());
        assert!(Move::Straight { start: Rank::THREE, len: 12 }.validate().is_ok());
        assert!(Move::Straight { start: Rank::THREE, len: 4 }.validate().is_err());
        assert!(Move::Straight { start: Rank::ACE, len: 12 }.validate().is_err());
        assert!(Move::Straight { start: Rank::THREE, len: 0 }.validate().is_err());
        assert!(Move::ConsecutivePairs { start: Rank::QUEEN, len: 3 }.validate().is_ok());
        assert!(Move::ConsecutivePairs { start: Rank::KING, len: 3 }.validate().is_err());

        assert!(Move::Pair(Rank::SMALL_JOKER).validate().is_err());
        assert!(Move::Bomb(Rank::TWO).validate().is_ok());
        assert!(Move::Triple { rank: Rank::FIVE, attachment: Attachment::Single(Rank::BIG_JOKER) }
            .validate()
            .is_ok());
        assert!(Move::Triple { rank: Rank::FIVE, attachment: Attachment::Pair(Rank::FIVE) }
            .validate()
            .is_err());

        let four = |first, second| Move::FourWithTwo { rank: Rank::NINE, first, second, pairs: false };
        assert!(four(Rank::THREE, Rank::TWO).validate().is_ok());
        assert!(four(Rank::TWO, Rank::THREE).validate().is_err());
        assert!(four(Rank::THREE, Rank::SMALL_JOKER).validate().is_err());

        let plane = |wing, wings: &[Rank]| Move::Airplane {
            start: Rank::FIVE,
            len: 2,
            wing,
            wings: wings.iter().copied().collect(),
        };
        assert!(plane(WingKind::None, &[]).validate().is_ok());
        assert!(plane(WingKind::Single, &[Rank::THREE, Rank::BIG_JOKER]).validate().is_ok());
        assert!(plane(WingKind::Pair, &[Rank::SEVEN, Rank::SEVEN]).validate().is_ok());
        assert!(plane(WingKind::Single, &[Rank::THREE]).validate().is_err());
        assert!(plane(WingKind::Single, &[Rank::SIX, Rank::SEVEN]).validate().is_err());
        assert!(plane(WingKind::Single, &[Rank::EIGHT, Rank::THREE]).validate().is_err());
        assert!(plane(WingKind::Pair, &[Rank::THREE, Rank::BIG_JOKER]).validate().is_err());
        assert!(plane(WingKind::None, &[Rank::THREE, Rank::FOUR]).validate().is_err());
    }

    #[test]
    fn test_cards() {
        let mv = Move::Triple { rank: Rank::FOUR, attachment: Attachment::Single(Rank::ACE) };
        assert_eq!(mv.cards(), hand(&[(4, 3), (14, 1)]));
    }

    #[test]
    fn test_lead() {
        assert_eq!(Move::Pass.lead(), None);
        assert_eq!(Move::Rocket.lead(), None);
        assert_eq!(Move::Bomb(Rank::TWO).lead(), Some(Rank::TWO));
        assert_eq!(Move::Straight { start: Rank::SIX, len: 5 }.lead(), Some(Rank::SIX));
    }

    #[test]
    fn test_shape_priority_is_total() {
        let shapes = [
            Shape::Single,
            Shape::Pair,
            Shape::Straight,
            Shape::ConsecutivePairs,
            Shape::FourWithTwo,
            Shape::Airplane,
            Shape::Triple,
            Shape::Bomb,
            Shape::Rocket,
            Shape::Pass,
        ];
        let mut priorities: Vec<_> = shapes.iter().map(|s| s.priority()).collect();
        priorities.sort_unstable();
        priorities.dedup();
        assert_eq!(priorities.len(), shapes.len());
        assert!(Shape::Rocket.priority() > Shape::Bomb.priority());
        assert!(Shape::Bomb.priority() > Shape::Triple.priority());
        assert!(Shape::Single.priority() > Shape::Pass.priority());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Move::Pass.to_string(), "Pass");
        assert_eq!(Move::Single(Rank::ACE).to_string(), "Single Ace");
        assert_eq!(Move::Straight { start: Rank::TEN, len: 5 }.to_string(), "Straight 10-Ace");
        assert_eq!(
            Move::ConsecutivePairs { start: Rank::THREE, len: 3 }.to_string(),
            "Consecutive pairs 3-5"
        );
        assert_eq!(
            Move::Triple { rank: Rank::KING, attachment: Attachment::Single(Rank::FOUR) }.to_string(),
            "Triple King + Single 4"
        );
        assert_eq!(
            Move::FourWithTwo { rank: Rank::NINE, first: Rank::THREE, second: Rank::TWO, pairs: false }
                .to_string(),
            "Four 9 + Singles 3 2"
        );
        let plane = Move::Airplane {
            start: Rank::THREE,
            len: 2,
            wing: WingKind::Pair,
            wings: smallvec![Rank::SEVEN, Rank::SEVEN],
        };
        assert_eq!(plane.to_string(), "Airplane 3-4 + Pairs 7 7");
        assert_eq!(Move::Rocket.to_string(), "Rocket");
    }

    #[test]
    fn test_move_serialization() {
        let plane = Move::Airplane {
            start: Rank::FIVE,
            len: 2,
            wing: WingKind::Single,
            wings: smallvec![Rank::THREE, Rank::BIG_JOKER],
        };
        let json = serde_json::to_string(&plane).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(plane, back);
    }

    #[test]
    fn test_move_deserialization_checks_shape() {
        let ok = serde_json::json!({ "Straight": { "start": 10, "len": 5 } });
        assert_eq!(
            serde_json::from_value::<Move>(ok).unwrap(),
            Move::Straight { start: Rank::TEN, len: 5 }
        );

        for bad in [
            serde_json::json!({ "Straight": { "start": 14, "len": 12 } }),
            serde_json::json!({ "Straight": { "start": 3, "len": 0 } }),
            serde_json::json!({ "ConsecutivePairs": { "start": 3, "len": 13 } }),
            serde_json::json!({ "Bomb": 17 }),
            serde_json::json!({ "Airplane": { "start": 3, "len": 2, "wing": "Single", "wings": [3, 9] } }),
        ] {
            let err = serde_json::from_value::<Move>(bad.clone()).unwrap_err();
            assert!(err.to_string().starts_with("malformed move"), "{}: {}", bad, err);
        }
    }
}
