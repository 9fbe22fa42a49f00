//! Exact endgame search and the explorable tree built on it.
//!
//! ## Overview
//!
//! - **Solver**: exhaustive minimax with a transposition table, answering
//!   "can the player to move force a win?"
//! - **Game tree**: an arena of nodes, one ply expanded at a time, where
//!   each child carries the verdict for the player who must answer it
//! - **Lazy expansion**: a node stops growing at its first winning child;
//!   `expand_all` fills in the rest on demand
//!
//! ## Usage
//!
//! ```rust
//! use dou_solver::core::{Deal, Hand};
//! use dou_solver::search::{GameTree, Solver, SolverConfig};
//!
//! let deal = Deal::new(
//!     Hand::from_ranks([3, 3, 3, 4, 5]).unwrap(),
//!     Hand::from_ranks([6, 6, 7, 7, 8, 8]).unwrap(),
//! )
//! .unwrap();
//!
//! let mut solver = Solver::new(SolverConfig::default());
//! let mut tree = GameTree::new(deal);
//! let root = tree.root();
//!
//! assert!(solver.expand_node(&mut tree, root));
//! for &child in tree.children(root) {
//!     let node = tree.get(child);
//!     println!("{}: next mover wins = {}", node.mv, node.win);
//! }
//! ```

pub mod key;
pub mod table;
pub mod config;
pub mod stats;
pub mod solver;
pub mod node;
pub mod tree;
pub mod expand;

pub use key::StateKey;
pub use table::TranspositionTable;
pub use config::SolverConfig;
pub use stats::SolveStats;
pub use solver::{solve, Solver};
pub use node::{Node, NodeId};
pub use tree::{GameTree, TreeStats};
