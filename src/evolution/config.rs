//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::operators::MutationWeights;
use crate::error::{EvolveError, Result};

/// Configuration for the query-evolution engine.
///
/// # Defaults
///
/// ```
/// use evoquery::evolution::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evoquery::evolution::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_seed(42)
///     .with_mutation_weights(2.0, 1.0, 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Relative weights of the add/remove/replace mutation operators.
    pub mutation: MutationWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mutation: MutationWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the mutation operator weights.
    pub fn with_mutation_weights(mut self, add: f64, remove: f64, replace: f64) -> Self {
        self.mutation = MutationWeights {
            add,
            remove,
            replace,
        };
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`EvolveError::InvalidConfig`] with a description if any
    /// parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        self.mutation.validate().map_err(EvolveError::InvalidConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(42)
            .with_mutation_weights(2.0, 0.5, 1.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.mutation.add, 2.0);
        assert_eq!(config.mutation.remove, 0.5);
        assert_eq!(config.mutation.replace, 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        let config = EngineConfig::default().with_mutation_weights(0.0, 0.0, 0.0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EvolveError::InvalidConfig(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = EngineConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(7));
        assert_eq!(back.mutation, config.mutation);
    }
}
