use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;

/// Logging configuration. `MAMDANI_LOG` still wins when set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Fallback `EnvFilter` directive. Default: `mamdani=info`.
    pub log_filter: Option<String>,
}

impl ObservabilityConfig {
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
