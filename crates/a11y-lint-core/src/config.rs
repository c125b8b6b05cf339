//! Configuration types for a11y-lint.

use crate::shaper::ResultLimits;
use crate::types::Impact;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for a11y-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule preset to use ("full" or "basic").
    #[serde(default)]
    pub preset: Option<String>,

    /// Impact threshold for a failing exit status (default: "minor").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Result truncation limits.
    #[serde(default)]
    pub limits: ResultLimits,

    /// Per-rule configurations, keyed by rule id.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or `max_nodes_per_rule` is 0.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        // A violation must keep at least one finding as evidence.
        if config.limits.max_nodes_per_rule == 0 {
            return Err(ConfigError::InvalidLimit {
                name: "max_nodes_per_rule",
            });
        }
        Ok(config)
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules
            .get(rule_id)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Resolves the failing impact threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `fail_on` names an unknown impact.
    pub fn fail_on_impact(&self) -> Result<Impact, ConfigError> {
        match self.fail_on.as_deref() {
            None => Ok(Impact::Minor),
            Some(name) => Impact::from_name(name).ok_or_else(|| ConfigError::UnknownImpact {
                name: name.to_string(),
            }),
        }
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(a11y_lint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(a11y_lint::config::parse))]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Unknown impact name in `fail_on`.
    #[error("Unknown impact `{name}`")]
    #[diagnostic(
        code(a11y_lint::config::impact),
        help("Valid values: minor, moderate, serious, critical")
    )]
    UnknownImpact {
        /// The rejected name.
        name: String,
    },

    /// A limit that must be positive was set to 0.
    #[error("Limit `{name}` must be at least 1")]
    #[diagnostic(
        code(a11y_lint::config::limit),
        help("Remove the key to use the default, or set it to 1 or more")
    )]
    InvalidLimit {
        /// The offending `[limits]` key.
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert_eq!(config.limits, ResultLimits::default());
        assert_eq!(config.fail_on_impact().unwrap(), Impact::Minor);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "basic"
fail_on = "serious"

[limits]
max_nodes_per_rule = 3

[rules.meta-viewport]
enabled = false

[rules.image-alt]
enabled = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("basic"));
        assert_eq!(config.fail_on_impact().unwrap(), Impact::Serious);
        assert_eq!(config.limits.max_nodes_per_rule, 3);
        assert_eq!(config.limits.max_contrast_findings, 10);
        assert!(!config.is_rule_enabled("meta-viewport"));
        assert!(config.is_rule_enabled("image-alt"));
        assert!(config.is_rule_enabled("label"));
    }

    #[test]
    fn test_invalid_fail_on() {
        let config = Config::parse("fail_on = \"error\"").unwrap();
        assert!(matches!(
            config.fail_on_impact(),
            Err(ConfigError::UnknownImpact { .. })
        ));
    }

    #[test]
    fn test_zero_nodes_per_rule_is_rejected() {
        let result = Config::parse("[limits]\nmax_nodes_per_rule = 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidLimit {
                name: "max_nodes_per_rule"
            })
        ));

        let config = Config::parse("[limits]\nmax_nodes_per_rule = 1\n").unwrap();
        assert_eq!(config.limits.max_nodes_per_rule, 1);
    }

    #[test]
    fn test_zero_contrast_findings_is_allowed() {
        let config = Config::parse("[limits]\nmax_contrast_findings = 0\n").unwrap();
        assert_eq!(config.limits.max_contrast_findings, 0);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::parse("preset = ["),
            Err(ConfigError::Parse { .. })
        ));
    }
}
