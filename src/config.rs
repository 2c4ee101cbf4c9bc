//! Central configuration for an optimizer run.
//!
//! All tunable run parameters are defined here for easy adjustment.

use allocator::{SquadSchema, Strategy};
use types::Cash;

/// Master configuration for one optimizer invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Pool Generation
    // ─────────────────────────────────────────────────────────────────────────
    /// Number of sample players to generate.
    pub pool_size: usize,
    /// RNG seed for the sample pool (same seed, same pool).
    pub seed: u64,

    // ─────────────────────────────────────────────────────────────────────────
    // Allocation Control
    // ─────────────────────────────────────────────────────────────────────────
    /// Run a single strategy, or compare all of them when `None`.
    pub strategy: Option<Strategy>,
    /// Override for the schema's budget cap.
    pub budget_cap: Option<Cash>,
    /// Emit the winning roster as JSON on stdout.
    pub json: bool,
    /// Enable verbose logging.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pool_size: 450,
            seed: 42,
            strategy: None,
            budget_cap: None,
            json: false,
            verbose: false,
        }
    }
}

impl RunConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters for fluent configuration
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the sample pool size.
    pub fn pool_size(mut self, size: usize) -> Self {
        self.pool_size = size;
        self
    }

    /// Set the pool RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run only the given strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Override the schema budget cap (whole dollars).
    pub fn budget_cap(mut self, cap: i64) -> Self {
        self.budget_cap = Some(Cash(cap));
        self
    }

    /// Emit machine-readable output.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Computed Properties
    // ─────────────────────────────────────────────────────────────────────────

    /// The squad schema this run allocates against.
    pub fn schema(&self) -> SquadSchema {
        let schema = SquadSchema::default();
        match self.budget_cap {
            Some(cap) => schema.with_budget_cap(cap),
            None => schema,
        }
    }

    /// Strategies this run evaluates.
    pub fn strategies(&self) -> Vec<Strategy> {
        match self.strategy {
            Some(strategy) => vec![strategy],
            None => Strategy::ALL.to_vec(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preset Configurations
// ─────────────────────────────────────────────────────────────────────────────

impl RunConfig {
    /// Quick run: a small pool for fast iteration.
    pub fn quick() -> Self {
        Self::default().pool_size(120)
    }

    /// Tight cap: stress the fallback passes.
    pub fn tight_budget() -> Self {
        Self::default().budget_cap(7_000_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_consistency() {
        let config = RunConfig::default();

        assert!(config.pool_size > 0, "pool should not be empty");
        assert!(
            config.schema().validate().is_ok(),
            "default schema must be valid"
        );
        assert_eq!(config.strategies(), Strategy::ALL.to_vec());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RunConfig::new()
            .pool_size(200)
            .seed(7)
            .strategy(Strategy::Balanced);

        assert_eq!(config.pool_size, 200);
        assert_eq!(config.seed, 7);
        assert_eq!(config.strategies(), vec![Strategy::Balanced]);
    }

    #[test]
    fn test_budget_override_flows_into_schema() {
        let config = RunConfig::new().budget_cap(8_500_000);
        assert_eq!(config.schema().budget_cap(), Cash(8_500_000));
        assert!(config.schema().validate().is_ok());
    }

    #[test]
    fn test_preset_configs_differ_from_default() {
        let default = RunConfig::default();
        let quick = RunConfig::quick();
        let tight = RunConfig::tight_budget();

        assert_ne!(quick.pool_size, default.pool_size);
        assert_ne!(tight.schema().budget_cap(), default.schema().budget_cap());
    }
}
