//! Candidate move generation.
//!
//! Every shape has its own generator and none consults another. Generators
//! borrow the hand and yield `Move` values lazily, so a caller that stops
//! early never builds the rest.
//!
//! Attachment domains:
//! - Triple attachments may be any other rank, jokers included.
//! - Four-with-two attachments exclude both jokers; "2" is allowed.
//! - Airplane wings may be any rank outside the body, "2" and jokers
//!   included. A joker can only ever be a single wing.

use smallvec::SmallVec;

use super::shape::{Attachment, Move, WingKind, Wings};
use crate::core::{Hand, Rank};

/// Every candidate playable from `hand`, shape by shape, ending with Pass.
///
/// ```
/// use dou_solver::core::Hand;
/// use dou_solver::moves::{candidates, Move};
///
/// let hand = Hand::from_ranks([3, 3, 3, 4, 5]).unwrap();
/// let moves: Vec<Move> = candidates(&hand).collect();
///
/// // 3 singles, 1 pair, 3 triples (bare, +4, +5) and Pass.
/// assert_eq!(moves.len(), 8);
/// assert_eq!(moves.last(), Some(&Move::Pass));
/// ```
pub fn candidates(hand: &Hand) -> impl Iterator<Item = Move> + '_ {
    singles(hand)
        .chain(pairs(hand))
        .chain(straights(hand))
        .chain(consecutive_pairs(hand))
        .chain(airplanes(hand))
        .chain(fours_with_two(hand))
        .chain(triples(hand))
        .chain(bombs(hand))
        .chain(rocket(hand))
        .chain(std::iter::once(Move::Pass))
}

fn with_at_least(hand: &Hand, copies: u8) -> impl Iterator<Item = Rank> + '_ {
    Rank::all().filter(move |&rank| hand.count(rank) >= copies)
}

pub fn singles(hand: &Hand) -> impl Iterator<Item = Move> + '_ {
    with_at_least(hand, 1).map(Move::Single)
}

pub fn pairs(hand: &Hand) -> impl Iterator<Item = Move> + '_ {
    with_at_least(hand, 2).map(Move::Pair)
}

pub fn bombs(hand: &Hand) -> impl Iterator<Item = Move> + '_ {
    with_at_least(hand, 4).map(Move::Bomb)
}

pub fn rocket(hand: &Hand) -> impl Iterator<Item = Move> {
    let both = hand.count(Rank::SMALL_JOKER) > 0 && hand.count(Rank::BIG_JOKER) > 0;
    both.then_some(Move::Rocket).into_iter()
}

/// `(start, len)` of every run inside 3..=Ace with `len` in
/// `min_len..=max_len` whose ranks all hold at least `copies` cards.
///
/// Shorter runs come first, then lower starts.
fn runs(hand: &Hand, min_len: u8, max_len: u8, copies: u8) -> impl Iterator<Item = (Rank, u8)> + '_ {
    let span = Rank::ACE.value() - Rank::THREE.value() + 1;
    (min_len..=max_len.min(span)).flat_map(move |len| {
        Rank::range(Rank::THREE, Rank::ACE)
            .take_while(move |start| start.value() + len - 1 <= Rank::ACE.value())
            .filter(move |&start| (0..len).all(|i| hand.count(start.offset(i)) >= copies))
            .map(move |start| (start, len))
    })
}

pub fn straights(hand: &Hand) -> impl Iterator<Item = Move> + '_ {
    runs(hand, 5, 12, 1).map(|(start, len)| Move::Straight { start, len })
}

pub fn consecutive_pairs(hand: &Hand) -> impl Iterator<Item = Move> + '_ {
    runs(hand, 3, 12, 2).map(|(start, len)| Move::ConsecutivePairs { start, len })
}

pub fn triples(hand: &Hand) -> impl Iterator<Item = Move> + '_ {
    with_at_least(hand, 3).flat_map(move |rank| {
        let bare = std::iter::once(Move::Triple { rank, attachment: Attachment::None });
        let attached = with_at_least(hand, 1)
            .filter(move |&other| other != rank)
            .flat_map(move |other| {
                let single = Move::Triple { rank, attachment: Attachment::Single(other) };
                let pair = (hand.count(other) >= 2)
                    .then_some(Move::Triple { rank, attachment: Attachment::Pair(other) });
                std::iter::once(single).chain(pair)
            });
        bare.chain(attached)
    })
}

/// Unordered attachment pairs `first <= second` for a four of `body`, each
/// attachment being `unit` cards of a non-joker rank other than the body.
fn attachment_pairs(hand: &Hand, body: Rank, unit: u8) -> impl Iterator<Item = (Rank, Rank)> + '_ {
    let usable = move |rank: Rank| rank != body && hand.count(rank) >= unit;
    Rank::range(Rank::THREE, Rank::TWO)
        .filter(move |&rank| usable(rank))
        .flat_map(move |first| {
            Rank::range(first, Rank::TWO)
                .filter(move |&second| usable(second))
                .filter(move |&second| second != first || hand.count(first) >= 2 * unit)
                .map(move |second| (first, second))
        })
}

pub fn fours_with_two(hand: &Hand) -> impl Iterator<Item = Move> + '_ {
    Rank::range(Rank::THREE, Rank::TWO)
        .filter(move |&rank| hand.count(rank) >= 4)
        .flat_map(move |rank| {
            let singles = attachment_pairs(hand, rank, 1).map(move |(first, second)| Move::FourWithTwo {
                rank,
                first,
                second,
                pairs: false,
            });
            let pairs = attachment_pairs(hand, rank, 2).map(move |(first, second)| Move::FourWithTwo {
                rank,
                first,
                second,
                pairs: true,
            });
            singles.chain(pairs)
        })
}

pub fn airplanes(hand: &Hand) -> impl Iterator<Item = Move> + '_ {
    runs(hand, 2, 6, 3).flat_map(move |(start, len)| {
        let mut planes = vec![Move::Airplane {
            start,
            len,
            wing: WingKind::None,
            wings: Wings::new(),
        }];
        for wing in [WingKind::Single, WingKind::Pair] {
            planes.extend(wing_sets(hand, start, len, wing).into_iter().map(|wings| Move::Airplane {
                start,
                len,
                wing,
                wings,
            }));
        }
        planes
    })
}

/// Every multiset of exactly `len` wings of kind `wing` drawn from ranks
/// outside the body `start..start + len`.
fn wing_sets(hand: &Hand, start: Rank, len: u8, wing: WingKind) -> Vec<Wings> {
    let unit = wing.unit();
    let body_end = start.offset(len - 1);
    let pool: SmallVec<[(Rank, u8); 15]> = Rank::all()
        .filter(|&rank| rank < start || rank > body_end)
        .map(|rank| (rank, hand.count(rank) / unit))
        .filter(|&(_, available)| available > 0)
        .collect();

    let mut out = Vec::new();
    let mut current = Wings::new();
    pick_wings(&pool, len, &mut current, &mut out);
    out
}

fn pick_wings(pool: &[(Rank, u8)], needed: u8, current: &mut Wings, out: &mut Vec<Wings>) {
    if needed == 0 {
        out.push(current.clone());
        return;
    }
    let Some((&(rank, available), rest)) = pool.split_first() else {
        return;
    };

    let mark = current.len();
    for take in 0..=available.min(needed) {
        current.truncate(mark);
        current.extend(std::iter::repeat(rank).take(take as usize));
        pick_wings(rest, needed - take, current, out);
    }
    current.truncate(mark);
}
