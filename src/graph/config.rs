//! Store configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`GraphConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid graph configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sizing hints for a freshly created store
///
/// Hints only pre-allocate; they never limit how many vertices or edges a
/// store can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Expected number of vertices
    pub vertex_capacity_hint: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity_hint: 64,
        }
    }
}

impl GraphConfig {
    /// Parse a configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::default();
        assert_eq!(config.vertex_capacity_hint, 64);
    }

    #[test]
    fn test_json_fields() {
        let config = GraphConfig::from_json_str(r#"{ "vertex_capacity_hint": 10 }"#).unwrap();
        assert_eq!(config.vertex_capacity_hint, 10);

        let empty = GraphConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, GraphConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let result = GraphConfig::from_json_str("{ vertex_capacity_hint: }");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
