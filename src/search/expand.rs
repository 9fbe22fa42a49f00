//! One-ply expansion of the game tree on top of the solver.
//!
//! Children are created in `legal_moves` order and each gets its verdict from
//! a full solve. By default expansion stops at the first child that loses
//! for its mover, which already proves the parent a win; the remaining
//! siblings are added by a later eager expansion. Children of a node are
//! therefore always a prefix of the eager list, and `complete` records
//! whether that prefix is the whole list.

use std::time::Instant;

use log::{debug, trace};

use super::node::{Node, NodeId};
use super::solver::Solver;
use super::tree::GameTree;
use crate::core::Hand;
use crate::moves::legal_moves;

impl Solver {
    /// Expand `id` given the live hands at that node.
    ///
    /// Short-circuits on the first winning child unless the config asks for
    /// eager expansion, leaving the node incomplete with only the prefix of
    /// children up to that winner. Call [`Solver::expand_all`] on the node to
    /// add the remaining siblings. Returns the node's verdict.
    pub fn expand(&mut self, tree: &mut GameTree, id: NodeId, mover: &Hand, opponent: &Hand) -> bool {
        let short_circuit = !self.config.eager_expansion;
        self.grow(tree, id, mover, opponent, short_circuit)
    }

    /// Expand every legal move of `id`, keeping children already present.
    pub fn expand_all(&mut self, tree: &mut GameTree, id: NodeId, mover: &Hand, opponent: &Hand) -> bool {
        self.grow(tree, id, mover, opponent, false)
    }

    /// [`Solver::expand`] with the hands replayed from the tree's deal.
    pub fn expand_node(&mut self, tree: &mut GameTree, id: NodeId) -> bool {
        let (mover, opponent) = tree.hands_at(id);
        self.expand(tree, id, &mover, &opponent)
    }

    fn grow(&mut self, tree: &mut GameTree, id: NodeId, mover: &Hand, opponent: &Hand, short_circuit: bool) -> bool {
        if tree.get(id).complete {
            return tree.get(id).win;
        }

        let start = Instant::now();
        self.stats.reset();

        if opponent.is_empty() {
            let node = tree.get_mut(id);
            node.win = false;
            node.complete = true;
            debug!("{} is terminal", id);
            return false;
        }

        let last = tree.get(id).mv.clone();
        let depth = tree.get(id).depth + 1;
        let moves = legal_moves(mover, &last);
        let existing = tree.get(id).children.len();

        let mut mover = *mover;
        let mut opponent = *opponent;
        let mut win = false;
        let mut visited = 0;

        for (i, mv) in moves.iter().enumerate() {
            let child_win = if i < existing {
                let child = tree.get(tree.get(id).children[i]);
                debug_assert_eq!(&child.mv, mv, "children must follow legal move order");
                child.win
            } else {
                mv.apply(&mut mover);
                let child_win = self.search(&mut opponent, &mut mover, mv, depth);
                mv.undo(&mut mover);

                let mut child = Node::new(mv.clone(), id, depth);
                child.win = child_win;
                let child_id = tree.alloc(child);
                tree.get_mut(id).children.push(child_id);
                trace!("{} -> {}: {} (next mover wins: {})", id, child_id, mv, child_win);
                child_win
            };

            visited = i + 1;
            if !child_win {
                win = true;
                if short_circuit {
                    break;
                }
            }
        }

        let node = tree.get_mut(id);
        node.win = win;
        node.complete = visited == moves.len();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "expanded {}: win={} children={}/{} complete={} states={} {}us",
            id,
            win,
            node.children.len(),
            moves.len(),
            node.complete,
            self.stats.states,
            self.stats.time_us
        );
        win
    }
}
