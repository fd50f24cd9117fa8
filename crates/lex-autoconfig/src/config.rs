//! Configuration types for column type detection.
//!
//! This module provides configuration options using the builder pattern.

use serde::{Deserialize, Serialize};

/// Distinct-value ratio below which a column is treated as multinomial.
pub const DEFAULT_MULTINOMIAL_THRESHOLD: f64 = 0.1;

/// Configuration for the type detector.
///
/// Use [`DetectorConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use lex_autoconfig::config::DetectorConfig;
///
/// let config = DetectorConfig::builder()
///     .count_column("occurrences")
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Columns whose distinct-value ratio stays below this value become multinomial.
    /// Default: 0.1 (10%)
    #[serde(default = "default_threshold")]
    pub multinomial_threshold: f64,

    /// Column holding a per-row occurrence weight.
    /// If None, every row counts once.
    /// Default: None
    #[serde(default)]
    pub count_column: Option<String>,
}

fn default_threshold() -> f64 {
    DEFAULT_MULTINOMIAL_THRESHOLD
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            multinomial_threshold: DEFAULT_MULTINOMIAL_THRESHOLD,
            count_column: None,
        }
    }
}

impl DetectorConfig {
    /// Create a new configuration builder.
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let threshold = self.multinomial_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "multinomial_threshold".to_string(),
                value: threshold,
            });
        }

        if let Some(ref column) = self.count_column
            && column.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyCountColumn);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be greater than 0.0 and at most 1.0)")]
    InvalidThreshold { field: String, value: f64 },

    #[error("Count column name must not be blank")]
    EmptyCountColumn,
}

impl From<ConfigValidationError> for crate::error::AutoConfigError {
    fn from(err: ConfigValidationError) -> Self {
        crate::error::AutoConfigError::InvalidConfig(err.to_string())
    }
}

/// Builder for [`DetectorConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct DetectorConfigBuilder {
    multinomial_threshold: Option<f64>,
    count_column: Option<String>,
}

impl DetectorConfigBuilder {
    /// Set the distinct-value ratio under which a column becomes multinomial.
    ///
    /// # Arguments
    /// * `threshold` - Value in (0.0, 1.0] (e.g., 0.1 = 10%)
    pub fn multinomial_threshold(mut self, threshold: f64) -> Self {
        self.multinomial_threshold = Some(threshold);
        self
    }

    /// Weight each row by the value of this column instead of counting it once.
    pub fn count_column(mut self, column: impl Into<String>) -> Self {
        self.count_column = Some(column.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `DetectorConfig` or an error if validation fails.
    pub fn build(self) -> Result<DetectorConfig, ConfigValidationError> {
        let config = DetectorConfig {
            multinomial_threshold: self
                .multinomial_threshold
                .unwrap_or(DEFAULT_MULTINOMIAL_THRESHOLD),
            count_column: self.count_column,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert_eq!(config.multinomial_threshold, 0.1);
        assert!(config.count_column.is_none());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = DetectorConfig::builder()
            .multinomial_threshold(0.05)
            .count_column("hits")
            .build()
            .unwrap();

        assert_eq!(config.multinomial_threshold, 0.05);
        assert_eq!(config.count_column.as_deref(), Some("hits"));
    }

    #[test]
    fn test_validation_invalid_threshold() {
        for bad in [0.0, -0.1, 1.5, f64::NAN] {
            let result = DetectorConfig::builder().multinomial_threshold(bad).build();
            assert!(matches!(
                result.unwrap_err(),
                ConfigValidationError::InvalidThreshold { .. }
            ));
        }
    }

    #[test]
    fn test_validation_blank_count_column() {
        let result = DetectorConfig::builder().count_column("  ").build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyCountColumn
        ));
    }

    #[test]
    fn test_config_from_json_uses_defaults() {
        let config: DetectorConfig = serde_json::from_str(r#"{"count_column": "n"}"#).unwrap();
        assert_eq!(config.multinomial_threshold, DEFAULT_MULTINOMIAL_THRESHOLD);
        assert_eq!(config.count_column.as_deref(), Some("n"));
    }
}
