//! Configuration for the input validation pipeline

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Thresholds applied by [`InputValidator`](crate::InputValidator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Smallest accepted number of samples in each of `x`, `y`, `z`
    pub min_samples: usize,

    /// Largest accepted repetition count
    pub max_reps: i64,

    /// Repetition counts below this value are accepted with a warning
    pub low_reps_threshold: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_samples: 4,
            max_reps: 100_000_000,
            low_reps_threshold: 1000,
        }
    }
}

impl ValidationConfig {
    /// Create a new configuration builder
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cindep_validate::ValidationConfig;
    ///
    /// let config = ValidationConfig::builder()
    ///     .min_samples(10)
    ///     .max_reps(50_000)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.min_samples, 10);
    /// ```
    #[must_use]
    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::default()
    }

    /// Validate all configuration parameters
    ///
    /// # Validation Rules
    ///
    /// - `min_samples`: at least 1
    /// - `max_reps`: at least 1
    /// - `low_reps_threshold`: not above `max_reps`
    ///
    /// # Errors
    /// - `ValidationError::InvalidConfig` naming the offending parameter
    pub fn validate(&self) -> Result<()> {
        if self.min_samples == 0 {
            return Err(ValidationError::config_value_error(
                "min_samples",
                self.min_samples,
                ">= 1",
                Some(4),
            ));
        }

        if self.max_reps < 1 {
            return Err(ValidationError::config_value_error(
                "max_reps",
                self.max_reps,
                ">= 1",
                Some(100_000_000),
            ));
        }

        if self.low_reps_threshold > self.max_reps {
            return Err(ValidationError::invalid_config(format!(
                "low_reps_threshold {} exceeds max_reps {}",
                self.low_reps_threshold, self.max_reps
            )));
        }

        Ok(())
    }

    /// Parse a configuration from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for `ValidationConfig`
#[derive(Debug, Default)]
pub struct ValidationConfigBuilder {
    config: ValidationConfig,
}

impl ValidationConfigBuilder {
    /// Set the minimum number of samples
    #[must_use]
    pub fn min_samples(mut self, min_samples: usize) -> Self {
        self.config.min_samples = min_samples;
        self
    }

    /// Set the maximum repetition count
    #[must_use]
    pub fn max_reps(mut self, max_reps: i64) -> Self {
        self.config.max_reps = max_reps;
        self
    }

    /// Set the repetition count below which a warning is logged
    #[must_use]
    pub fn low_reps_threshold(mut self, threshold: i64) -> Self {
        self.config.low_reps_threshold = threshold;
        self
    }

    /// Build the configuration, validating it first
    pub fn build(self) -> Result<ValidationConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
