//! # dou-solver
//!
//! Exact solver for two-hand Dou Dizhu endgames.
//!
//! Given both players' hands and the move currently on the table, the solver
//! decides whether the player to move can force emptying their hand first,
//! assuming both sides play perfectly with full information.
//!
//! ## Design Principles
//!
//! 1. **Exact**: Plain minimax with no evaluation function and no depth
//!    limit. Every ply removes cards, so the search always terminates.
//!
//! 2. **In-place search**: Hands are mutated with `apply` / `undo` in strict
//!    stack order instead of being copied per node.
//!
//! 3. **Explicit context**: The transposition table lives in a `Solver`
//!    owned by the caller; there is no global state.
//!
//! ## Modules
//!
//! - `core`: Ranks, hands, deals, errors, seeded dealing
//! - `moves`: Move shapes, generation, dominance, encoding
//! - `search`: Solver, transposition table, explorable game tree

pub mod core;
pub mod moves;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Deal, DealRng, Hand, Rank, Result, SolverError};

pub use crate::moves::{candidates, legal_moves, Attachment, Move, Shape, WingKind, Wings};

pub use crate::search::{
    solve, GameTree, Node, NodeId, SolveStats, Solver, SolverConfig, StateKey, TranspositionTable, TreeStats,
};
