//! Game tree nodes.
//!
//! Uses arena-based allocation with index references (NodeId) so a tree can
//! be serialized and handed to a presentation layer as-is.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::moves::Move;

/// Index into the [`GameTree`](super::tree::GameTree) node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One position in the explorable tree.
///
/// `win` is the verdict for the player about to move *after* `mv`, so a
/// child with `win == true` is bad news for whoever just played it.
///
/// An empty `children` list does not mean the position is terminal: check
/// `complete`, and expand again with the live hands if it is not set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    /// The move that led here. The root holds a synthetic Pass.
    pub mv: Move,

    /// Can the player to move here force a win?
    pub win: bool,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Plies from the root.
    pub depth: u16,

    /// Expanded children, strongest move first.
    pub children: SmallVec<[NodeId; 8]>,

    /// Every legal move from here has a child.
    pub complete: bool,
}

impl Node {
    /// Create the root node.
    pub fn root() -> Self {
        Self::new(Move::Pass, NodeId::NONE, 0)
    }

    /// Create an unexpanded node reached by `mv`.
    pub fn new(mv: Move, parent: NodeId, depth: u16) -> Self {
        Self {
            mv,
            win: false,
            parent,
            depth,
            children: SmallVec::new(),
            complete: false,
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Expanded and without any legal move: the opponent has already won.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.complete && self.children.is_empty()
    }
}
