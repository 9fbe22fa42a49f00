//! Core data model: ranks, hands, deals, errors and seeded dealing.
//!
//! Nothing in here knows about move shapes or search; the `moves` and
//! `search` modules build on these types.

pub mod rank;
pub mod hand;
pub mod deal;
pub mod rng;
pub mod error;

pub use rank::Rank;
pub use hand::Hand;
pub use deal::Deal;
pub use rng::DealRng;
pub use error::{Result, SolverError};
