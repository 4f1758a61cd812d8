//! Tests for the tracing/observability setup.

use std::sync::Mutex;

use mamdani_core::config::ObservabilityConfig;
use mamdani_core::tracing::{init_tracing, init_tracing_with};

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_with_debug_filter_does_not_panic() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("MAMDANI_LOG", "debug");
    init_tracing();
    std::env::remove_var("MAMDANI_LOG");
}

#[test]
fn init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing_with(&ObservabilityConfig::default());
}

#[test]
fn invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("MAMDANI_LOG", "this_is=garbage=not=a=filter");
    let config = ObservabilityConfig {
        log_filter: Some("mamdani_engine=debug".to_string()),
    };
    init_tracing_with(&config);
    std::env::remove_var("MAMDANI_LOG");
}
