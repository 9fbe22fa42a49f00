//! Arena-based game tree.
//!
//! Uses a flat `Vec<Node>` with index-based references. Hands are not stored
//! in nodes; [`GameTree::hands_at`] replays the path from the deal instead.

use serde::{Deserialize, Serialize};

use super::node::{Node, NodeId};
use crate::core::{Deal, Hand};

/// Explorable tree rooted at a deal, with `deal.first` to move at the root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameTree {
    /// All nodes in the tree.
    nodes: Vec<Node>,

    /// The root node ID (always 0).
    root: NodeId,

    /// Starting hands.
    deal: Deal,
}

impl GameTree {
    /// Create a tree holding only the root.
    pub fn new(deal: Deal) -> Self {
        Self {
            nodes: vec![Node::root()],
            root: NodeId::new(0),
            deal,
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of `id`, strongest move first.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Nodes from the root down to `id`, both included.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self.get(id).depth as usize + 1);
        let mut current = id;
        while !current.is_none() {
            path.push(current);
            current = self.get(current).parent;
        }
        path.reverse();
        path
    }

    /// `(mover, opponent)` hands at `id`.
    pub fn hands_at(&self, id: NodeId) -> (Hand, Hand) {
        let mut mover = self.deal.first;
        let mut opponent = self.deal.second;
        for step in self.path(id).into_iter().skip(1) {
            self.get(step).mv.apply(&mut mover);
            std::mem::swap(&mut mover, &mut opponent);
        }
        (mover, opponent)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            complete_count: self.nodes.iter().filter(|n| n.complete).count(),
            terminal_count: self.nodes.iter().filter(|n| n.is_terminal()).count(),
            leaf_count: self.nodes.iter().filter(|n| n.children.is_empty()).count(),
            total_children: self.nodes.iter().map(|n| n.children.len()).sum(),
        }
    }
}

/// Statistics about the game tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    pub node_count: usize,
    pub max_depth: u16,

    /// Nodes with every legal move expanded.
    pub complete_count: usize,

    pub terminal_count: usize,

    /// Nodes with no children yet, terminal or not.
    pub leaf_count: usize,

    pub total_children: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let expanded = self.node_count - self.leaf_count;
        if expanded == 0 {
            0.0
        } else {
            self.total_children as f64 / expanded as f64
        }
    }
}
