//! Validation configuration.
//!
//! # Examples
//!
//! ```
//! use diffusion_gate::config::ValidationConfig;
//!
//! let config = ValidationConfig::new()
//!     .with_name_attribute("symbol")
//!     .with_weight_attribute("confidence")
//!     .with_advisory_logging(false)
//!     .build();
//!
//! assert_eq!(config.name_attribute, "symbol");
//! assert!(!config.log_advisories);
//! ```

use crate::graph::{NAME_ATTRIBUTE, WEIGHT_ATTRIBUTE};
use serde::{Deserialize, Serialize};

/// Settings for graph validation.
///
/// Scores and kernel validation have no tunable behaviour; the graph
/// validator needs to know which attributes hold node names and edge
/// weights, and whether advisories should also be logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Node attribute holding node names
    pub name_attribute: String,
    /// Edge attribute holding edge weights
    pub weight_attribute: String,
    /// Emit a `warn`-level log record for every advisory
    pub log_advisories: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_attribute: NAME_ATTRIBUTE.to_string(),
            weight_attribute: WEIGHT_ATTRIBUTE.to_string(),
            log_advisories: true,
        }
    }
}

impl ValidationConfig {
    /// Create a new configuration with defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use diffusion_gate::config::ValidationConfig;
    ///
    /// let config = ValidationConfig::new();
    /// assert_eq!(config.name_attribute, "name");
    /// assert_eq!(config.weight_attribute, "weight");
    /// assert!(config.log_advisories);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node attribute holding node names.
    #[must_use]
    pub fn with_name_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.name_attribute = attribute.into();
        self
    }

    /// Set the edge attribute holding edge weights.
    #[must_use]
    pub fn with_weight_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.weight_attribute = attribute.into();
        self
    }

    /// Enable or disable logging of advisories.
    ///
    /// Advisories are always returned in the report; this only controls the
    /// log records.
    #[must_use]
    pub fn with_advisory_logging(mut self, enabled: bool) -> Self {
        self.log_advisories = enabled;
        self
    }

    /// Finalize the configuration (no-op, for API consistency).
    #[must_use]
    pub fn build(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ValidationConfig::default();
        assert_eq!(config.name_attribute, "name");
        assert_eq!(config.weight_attribute, "weight");
        assert!(config.log_advisories);
    }

    #[test]
    fn test_builder() {
        let config = ValidationConfig::new()
            .with_name_attribute("gene")
            .with_weight_attribute("score")
            .build();
        assert_eq!(config.name_attribute, "gene");
        assert_eq!(config.weight_attribute, "score");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{"name_attribute": "symbol"}"#).expect("valid JSON");
        assert_eq!(config.name_attribute, "symbol");
        assert_eq!(config.weight_attribute, "weight");
        assert!(config.log_advisories);
    }
}
