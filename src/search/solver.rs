//! Exact minimax over two hands.
//!
//! The search mutates both hands in place: every `apply` is matched by an
//! `undo` before the loop moves on or returns, so callers get their hands
//! back unchanged. Recursion depth is bounded by the total number of cards,
//! since every ply but a pass removes at least one.

use std::time::Instant;

use log::debug;

use super::config::SolverConfig;
use super::key::StateKey;
use super::stats::SolveStats;
use super::table::TranspositionTable;
use crate::core::Hand;
use crate::moves::{legal_moves, Move};

/// Search context: owns the transposition table and statistics.
///
/// A table is only valid for one deck's worth of positions, but positions
/// never depend on who reached them, so one solver may be reused across
/// many queries.
#[derive(Clone, Debug)]
pub struct Solver {
    pub(crate) config: SolverConfig,
    table: TranspositionTable,
    pub(crate) stats: SolveStats,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        let table = TranspositionTable::with_capacity(if config.use_table { config.table_capacity } else { 0 });
        Self {
            config,
            table,
            stats: SolveStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Statistics of the latest top-level call.
    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    pub fn clear_table(&mut self) {
        self.table.clear();
    }

    /// Can the player holding `mover` force a win when it is their turn and
    /// `last` is the move on the table?
    ///
    /// `last == Move::Pass` means the mover leads.
    ///
    /// ```
    /// use dou_solver::core::Hand;
    /// use dou_solver::moves::Move;
    /// use dou_solver::search::Solver;
    ///
    /// let mover = Hand::from_ranks([3, 5]).unwrap();
    /// let opponent = Hand::from_ranks([4]).unwrap();
    ///
    /// let mut solver = Solver::default();
    /// assert!(solver.solve(&mover, &opponent, &Move::Pass));
    /// assert!(!solver.solve(&opponent, &mover, &Move::Pass));
    /// ```
    pub fn solve(&mut self, mover: &Hand, opponent: &Hand, last: &Move) -> bool {
        let start = Instant::now();
        self.stats.reset();

        let mut mover = *mover;
        let mut opponent = *opponent;
        let win = self.search(&mut mover, &mut opponent, last, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "solved {} vs {} after {}: win={} states={} hits={} table={} {}us",
            mover,
            opponent,
            last,
            win,
            self.stats.states,
            self.stats.table_hits,
            self.table.len(),
            self.stats.time_us
        );
        win
    }

    /// Recursive step. Does not reset statistics.
    pub(crate) fn search(&mut self, mover: &mut Hand, opponent: &mut Hand, last: &Move, depth: u16) -> bool {
        self.stats.states += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        // The opponent emptied their hand on the previous ply.
        if opponent.is_empty() {
            return false;
        }

        let key = StateKey::new(mover, opponent, last);
        if self.config.use_table {
            if let Some(win) = self.table.get(&key) {
                self.stats.table_hits += 1;
                return win;
            }
        }

        let moves = legal_moves(mover, last);
        assert!(
            !(moves.is_empty() && last.is_pass() && !mover.is_empty()),
            "no legal lead from non-empty hand {}",
            mover
        );

        let mut win = false;
        for mv in &moves {
            mv.apply(mover);
            let reply = self.search(opponent, mover, mv, depth + 1);
            mv.undo(mover);
            if !reply {
                win = true;
                break;
            }
        }

        if self.config.use_table {
            self.table.insert(key, win);
            self.stats.table_stores += 1;
        }
        win
    }
}

/// Solve one position with a fresh [`Solver`].
///
/// Prefer keeping a `Solver` around when asking about many related
/// positions; its table carries over between calls.
pub fn solve(mover: &Hand, opponent: &Hand, last: &Move) -> bool {
    Solver::default().solve(mover, opponent, last)
}
