//! Solver statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one top-level solve or expansion.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SolveStats {
    /// Positions entered by the search.
    pub states: u64,

    /// Positions answered from the transposition table.
    pub table_hits: u64,

    /// Verdicts written to the transposition table.
    pub table_stores: u64,

    /// Deepest ply reached.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SolveStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Positions entered per second.
    #[must_use]
    pub fn states_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.states as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Share of entered positions answered from the table.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.states == 0 {
            0.0
        } else {
            self.table_hits as f64 / self.states as f64
        }
    }

    /// Fold another run's counters into these.
    pub fn merge(&mut self, other: &SolveStats) {
        self.states += other.states;
        self.table_hits += other.table_hits;
        self.table_stores += other.table_stores;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.time_us += other.time_us;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SolveStats::new();
        assert_eq!(stats.states, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.states_per_second(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SolveStats::new();
        stats.states = 1000;
        stats.table_hits = 250;
        stats.time_us = 500_000;

        assert_eq!(stats.states_per_second(), 2000.0);
        assert_eq!(stats.hit_rate(), 0.25);
    }

    #[test]
    fn test_stats_merge_and_reset() {
        let mut total = SolveStats::new();
        let mut run = SolveStats::new();
        run.states = 10;
        run.max_depth = 4;
        run.time_us = 7;

        total.merge(&run);
        total.merge(&run);
        assert_eq!(total.states, 20);
        assert_eq!(total.max_depth, 4);
        assert_eq!(total.time_us, 14);

        total.reset();
        assert_eq!(total.states, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SolveStats::new();
        stats.states = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SolveStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.states, deserialized.states);
    }
}
