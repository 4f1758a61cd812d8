//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging with the compiled default filter.
///
/// Reads `MAMDANI_LOG` for per-module log levels, e.g.
/// `MAMDANI_LOG=mamdani_engine::inference=debug,mamdani_core=warn`.
/// Falls back to `mamdani=info` if unset or invalid.
pub fn init_tracing() {
    install(DEFAULT_LOG_FILTER);
}

/// Initialize logging, falling back to the configured filter when
/// `MAMDANI_LOG` is unset or invalid.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    install(config.effective_log_filter());
}

/// Idempotent: only the first call installs a subscriber. If the process
/// already has a global subscriber it is kept, and that is logged at debug.
fn install(fallback: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();

        // Another global subscriber won; ours (and its filter) is dropped.
        if let Err(e) = installed {
            ::tracing::debug!(error = %e, "tracing subscriber already installed; keeping it");
        }
    });
}
