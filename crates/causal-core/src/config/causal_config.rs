//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ExtensionConfig, InterventionConfig, ObservabilityConfig, SelectionPolicy};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CAUSAL_*`)
/// 2. TOML file passed to [`CausalConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalConfig {
    pub extension: ExtensionConfig,
    pub intervention: InterventionConfig,
    pub observability: ObservabilityConfig,
}

impl CausalConfig {
    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: CausalConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no environment overrides).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CausalConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CAUSAL_*` overrides. `lookup` abstracts the environment for tests.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(defaults::ENV_MAX_EXTENSIONS) {
            let value = raw.trim().parse::<usize>().map_err(|e| ConfigError::ValidationFailed {
                field: defaults::ENV_MAX_EXTENSIONS.to_string(),
                message: e.to_string(),
            })?;
            self.extension.max_extensions = Some(value);
        }
        if let Some(raw) = lookup(defaults::ENV_SELECTION_POLICY) {
            self.intervention.policy = SelectionPolicy::from_str_name(raw.trim()).ok_or_else(|| {
                ConfigError::ValidationFailed {
                    field: defaults::ENV_SELECTION_POLICY.to_string(),
                    message: format!("unknown selection policy '{raw}'"),
                }
            })?;
        }
        if let Some(raw) = lookup(defaults::ENV_LOG_LEVEL) {
            self.observability.log_level = raw.trim().to_lowercase();
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.max_extensions == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "extension.max_extensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !defaults::VALID_LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {:?}, got '{}'",
                    defaults::VALID_LOG_LEVELS,
                    self.observability.log_level
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn env_overrides_take_priority() {
        let env: HashMap<&str, &str> = [
            ("CAUSAL_MAX_EXTENSIONS", "12"),
            ("CAUSAL_SELECTION_POLICY", "worst_case"),
            ("CAUSAL_LOG_LEVEL", "DEBUG"),
        ]
        .into_iter()
        .collect();
        let mut config = CausalConfig::default();
        config
            .apply_env_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.extension.max_extensions, Some(12));
        assert_eq!(config.intervention.policy, SelectionPolicy::WorstCase);
        assert_eq!(config.observability.log_level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_env_policy_is_rejected() {
        let mut config = CausalConfig::default();
        let result = config.apply_env_overrides(|k| {
            (k == "CAUSAL_SELECTION_POLICY").then(|| "bogus".to_string())
        });
        assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
        assert_eq!(config.intervention.policy, SelectionPolicy::Oracle);
    }
}
