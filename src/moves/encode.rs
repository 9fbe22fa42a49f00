//! Canonical fixed-width move encoding.
//!
//! ```text
//! Bits 0-3:  shape tag (Shape discriminant)
//! Bits 4-8:  lead rank (body rank, or run start)
//!
//! Straight / ConsecutivePairs:
//!   Bits 9-12:  run length
//! Triple:
//!   Bits 9-17:  attachment encoded as its own move (Pass / Single / Pair)
//! FourWithTwo:
//!   Bits 9-13:  first attachment rank
//!   Bits 14-18: second attachment rank
//!   Bit 19:     attachments are pairs
//! Airplane:
//!   Bits 9-11:  body length
//!   Bits 12-13: wing kind
//!   Bits 14-43: up to six wing ranks, 5 bits each, in order
//! ```
//!
//! The code depends only on the move's value, so equal moves always share a
//! code and distinct moves never do.

use super::shape::{Attachment, Move};
use crate::core::Rank;

const RANK_BITS: u32 = 5;
const LEAD_SHIFT: u32 = 4;
const FIELD_SHIFT: u32 = LEAD_SHIFT + RANK_BITS;

#[inline]
fn rank_bits(rank: Rank) -> u64 {
    u64::from(rank.value())
}

impl Attachment {
    /// Encoding of the attachment as a standalone move.
    #[must_use]
    pub fn code(self) -> u64 {
        self.as_move().code()
    }
}

impl Move {
    /// Pack this move into a `u64`; see the module docs for the layout.
    #[must_use]
    pub fn code(&self) -> u64 {
        let tag = self.shape().tag();
        let lead = self.lead().map_or(0, rank_bits) << LEAD_SHIFT;

        let fields = match self {
            Move::Pass | Move::Rocket | Move::Single(_) | Move::Pair(_) | Move::Bomb(_) => 0,
            Move::Straight { len, .. } | Move::ConsecutivePairs { len, .. } => u64::from(*len),
            Move::Triple { attachment, .. } => attachment.code(),
            Move::FourWithTwo { first, second, pairs, .. } => {
                rank_bits(*first) | rank_bits(*second) << RANK_BITS | u64::from(*pairs) << (2 * RANK_BITS)
            }
            Move::Airplane { len, wing, wings, .. } => {
                let head = u64::from(*len) | u64::from(wing.unit()) << 3;
                wings
                    .iter()
                    .enumerate()
                    .fold(head, |code, (i, &w)| code | rank_bits(w) << (5 + i as u32 * RANK_BITS))
            }
        };

        tag | lead | fields << FIELD_SHIFT
    }
}
