//! Builder configuration.

use serde::{Deserialize, Serialize};

/// Default parameter name prefix (`:param1`, `:param2`, ...).
pub const DEFAULT_PARAM_PREFIX: &str = "param";

/// Default entity alias, also the default SELECT expression.
pub const DEFAULT_ALIAS: &str = "e";

/// Naming conventions used by a builder.
///
/// The defaults reproduce `:param<N>` names and the `e` alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QbConfig {
    /// Prefix for generated parameter names.
    pub param_prefix: String,
    /// Alias used when a constructor is not given one.
    pub default_alias: String,
}

impl Default for QbConfig {
    fn default() -> Self {
        Self {
            param_prefix: DEFAULT_PARAM_PREFIX.to_string(),
            default_alias: DEFAULT_ALIAS.to_string(),
        }
    }
}

impl QbConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix for generated parameter names.
    pub fn with_param_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.param_prefix = prefix.into();
        self
    }

    /// Set the default entity alias.
    pub fn with_default_alias(mut self, alias: impl Into<String>) -> Self {
        self.default_alias = alias.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: QbConfig = serde_json::from_str(r#"{ "param_prefix": "p" }"#).unwrap();
        assert_eq!(cfg, QbConfig::new().with_param_prefix("p"));
        assert_eq!(cfg.default_alias, DEFAULT_ALIAS);
    }
}
