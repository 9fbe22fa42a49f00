//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

/// Solver configuration parameters.
///
/// None of these change a verdict; they only trade memory and time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Consult and fill the transposition table.
    /// Disabling it is only useful for checking the table itself.
    pub use_table: bool,

    /// Initial capacity of the transposition table.
    pub table_capacity: usize,

    /// Expand every child of a node instead of stopping at the first move
    /// that wins for the player at that node.
    pub eager_expansion: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            use_table: true,
            table_capacity: 1 << 16,
            eager_expansion: false,
        }
    }
}

impl SolverConfig {
    /// Create a new config with the transposition table switched on or off.
    pub fn with_table(mut self, enabled: bool) -> Self {
        self.use_table = enabled;
        self
    }

    /// Create a new config with a custom table capacity.
    pub fn with_table_capacity(mut self, capacity: usize) -> Self {
        self.table_capacity = capacity;
        self
    }

    /// Create a new config with eager expansion switched on or off.
    pub fn with_eager_expansion(mut self, eager: bool) -> Self {
        self.eager_expansion = eager;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert!(config.use_table);
        assert!(!config.eager_expansion);
        assert_eq!(config.table_capacity, 65_536);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::default()
            .with_table(false)
            .with_table_capacity(128)
            .with_eager_expansion(true);

        assert!(!config.use_table);
        assert_eq!(config.table_capacity, 128);
        assert!(config.eager_expansion);
    }

    #[test]
    fn test_serialization() {
        let config = SolverConfig::default().with_eager_expansion(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
