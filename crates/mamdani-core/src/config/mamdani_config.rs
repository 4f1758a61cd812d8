//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{EngineConfig, ObservabilityConfig};
use crate::constants::{PROJECT_CONFIG_FILENAME, USER_CONFIG_DIR};
use crate::errors::ConfigError;
use crate::types::EmptyAggregatePolicy;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MAMDANI_*`)
/// 2. Project config (`mamdani.toml` in the project root)
/// 3. User config (`~/.mamdani/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MamdaniConfig {
    pub engine: EngineConfig,
    pub observability: ObservabilityConfig,
}

impl MamdaniConfig {
    /// Load configuration with layered resolution, reading the user config
    /// from the home directory.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_user_config(root, Self::user_config_path().as_deref())
    }

    /// Load configuration with an explicit user config path (or none).
    pub fn load_with_user_config(
        root: &Path,
        user_config: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Unreadable files are skipped, bad TOML is fatal.
        if let Some(path) = user_config {
            if path.exists() {
                match Self::merge_toml_file(&mut config, path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(path = %path.display(), error = %e, "skipping user config");
                    }
                }
            }
        }

        let project_path = root.join(PROJECT_CONFIG_FILENAME);
        if project_path.exists() {
            Self::merge_toml_file(&mut config, &project_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &MamdaniConfig) -> Result<(), ConfigError> {
        if let Some(value) = config.engine.fallback_value {
            if !value.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.fallback_value".to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        if config.engine.effective_empty_aggregate_policy() == EmptyAggregatePolicy::Fixed
            && config.engine.fallback_value.is_none()
        {
            return Err(ConfigError::ValidationFailed {
                field: "engine.fallback_value".to_string(),
                message: "required when empty_aggregate_policy = \"fixed\"".to_string(),
            });
        }
        if config.engine.parallel_batch_threshold == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.parallel_batch_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref filter) = config.observability.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.mamdani/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MamdaniConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: MamdaniConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut MamdaniConfig, other: &MamdaniConfig) {
        if other.engine.defuzz_method.is_some() {
            base.engine.defuzz_method = other.engine.defuzz_method;
        }
        if other.engine.empty_aggregate_policy.is_some() {
            base.engine.empty_aggregate_policy = other.engine.empty_aggregate_policy;
        }
        if other.engine.fallback_value.is_some() {
            base.engine.fallback_value = other.engine.fallback_value;
        }
        if other.engine.parallel_batch_threshold.is_some() {
            base.engine.parallel_batch_threshold = other.engine.parallel_batch_threshold;
        }
        if other.observability.log_filter.is_some() {
            base.observability.log_filter = other.observability.log_filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `MAMDANI_DEFUZZ_METHOD`, `MAMDANI_FALLBACK_VALUE`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut MamdaniConfig) {
        if let Ok(val) = std::env::var("MAMDANI_DEFUZZ_METHOD") {
            if let Ok(v) = val.parse() {
                config.engine.defuzz_method = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MAMDANI_EMPTY_AGGREGATE_POLICY") {
            if let Ok(v) = val.parse() {
                config.engine.empty_aggregate_policy = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MAMDANI_FALLBACK_VALUE") {
            if let Ok(v) = val.parse::<f64>() {
                config.engine.fallback_value = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MAMDANI_PARALLEL_BATCH_THRESHOLD") {
            if let Ok(v) = val.parse::<usize>() {
                config.engine.parallel_batch_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MAMDANI_LOG_FILTER") {
            config.observability.log_filter = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
