//! Configuration management for randomized sort runs

use crate::error::{SortError, SortResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default shuffle budget when the caller does not specify one
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Largest shuffle budget accepted by [`SortConfig::validate`]
pub const MAX_SHUFFLE_BUDGET: usize = 1_000_000_000;

/// Main configuration structure for randomized sort operations
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Upper bound on random shuffles before the sort gives up
    pub max_attempts: usize,
    /// Seed for the shuffle generator; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Interpret input values as signed integers
    pub numeric: bool,
    /// Output file path (stdout when unset)
    pub output_file: Option<String>,
    /// Report shuffle accounting to stderr
    pub debug: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            numeric: false,
            output_file: None,
            debug: false,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shuffle budget
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the shuffle generator seed
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enable numeric interpretation of input values
    pub fn with_numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    /// Set output file
    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        // A zero budget is legal: already-ordered input still succeeds.
        if self.max_attempts > MAX_SHUFFLE_BUDGET {
            return Err(SortError::invalid_budget(&format!(
                "shuffle budget too large (maximum {MAX_SHUFFLE_BUDGET})"
            )));
        }

        Ok(())
    }

    /// Build the shuffle generator, seeded for reproducible runs when a
    /// seed is configured
    pub fn rng(&self) -> StdRng {
        if let Some(seed) = self.seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        }
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output_file.is_none()
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    /// Set the shuffle budget
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Seed the shuffle generator
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Enable numeric interpretation of input values
    pub fn numeric(mut self) -> Self {
        self.config.numeric = true;
        self
    }

    /// Set output file
    pub fn output_file(mut self, file: String) -> Self {
        self.config.output_file = Some(file);
        self
    }

    /// Enable debug mode
    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.seed, None);
        assert!(!config.numeric);
        assert!(!config.debug);
        assert!(config.writing_to_stdout());
    }

    #[test]
    fn test_config_builder() {
        let config = SortConfigBuilder::new()
            .max_attempts(500)
            .seed(42)
            .numeric()
            .build()
            .expect("Failed to build test config");

        assert_eq!(config.max_attempts, 500);
        assert_eq!(config.seed, Some(42));
        assert!(config.numeric);
    }

    #[test]
    fn test_validate_accepts_zero_budget() {
        let config = SortConfig::default().with_max_attempts(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_budget() {
        let config = SortConfig::default().with_max_attempts(MAX_SHUFFLE_BUDGET + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SortConfig::default().with_seed(Some(7));
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
