//! Move shapes and the rules connecting them.
//!
//! - `shape`: the `Move` sum type, apply/undo and labels
//! - `generate`: per-shape candidate generators
//! - `dominance`: `Move::beats` and `legal_moves`
//! - `encode`: fixed-width move codes

pub mod shape;
pub mod generate;
pub mod dominance;
pub mod encode;

pub use shape::{Attachment, Move, Shape, WingKind, Wings};
pub use generate::candidates;
pub use dominance::legal_moves;
