use std::sync::Mutex;

use mamdani_core::config::*;
use mamdani_core::{ConfigError, DefuzzMethod, EmptyAggregatePolicy};

/// Serializes tests that touch `MAMDANI_*` environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MamdaniConfig::from_toml("").unwrap();

    assert_eq!(config.engine.effective_defuzz_method(), DefuzzMethod::Centroid);
    assert_eq!(
        config.engine.effective_empty_aggregate_policy(),
        EmptyAggregatePolicy::Fail
    );
    assert_eq!(config.engine.fallback_value, None);
    assert_eq!(config.engine.effective_parallel_batch_threshold(), 64);
    assert_eq!(config.observability.effective_log_filter(), "mamdani=info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[engine]
defuzz_method = "bisector"
"#;
    let config = MamdaniConfig::from_toml(toml).unwrap();
    assert_eq!(config.engine.effective_defuzz_method(), DefuzzMethod::Bisector);
    // Non-overridden fields keep defaults
    assert_eq!(
        config.engine.effective_empty_aggregate_policy(),
        EmptyAggregatePolicy::Fail
    );
    assert_eq!(config.engine.effective_parallel_batch_threshold(), 64);
}

#[test]
fn fixed_policy_requires_fallback_value() {
    let toml = r#"
[engine]
empty_aggregate_policy = "fixed"
"#;
    let err = MamdaniConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "engine.fallback_value"));

    let toml = r#"
[engine]
empty_aggregate_policy = "fixed"
fallback_value = 50.0
"#;
    let config = MamdaniConfig::from_toml(toml).unwrap();
    assert_eq!(config.engine.fallback_value, Some(50.0));
}

#[test]
fn zero_batch_threshold_is_rejected() {
    let toml = r#"
[engine]
parallel_batch_threshold = 0
"#;
    assert!(matches!(
        MamdaniConfig::from_toml(toml),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn unknown_method_is_a_parse_error() {
    let toml = r#"
[engine]
defuzz_method = "median"
"#;
    assert!(matches!(
        MamdaniConfig::from_toml(toml),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn to_toml_round_trips() {
    let mut config = MamdaniConfig::default();
    config.engine.defuzz_method = Some(DefuzzMethod::MeanOfMaximum);
    config.engine.empty_aggregate_policy = Some(EmptyAggregatePolicy::Midpoint);
    config.observability.log_filter = Some("mamdani=debug".to_string());

    let text = config.to_toml().unwrap();
    let parsed = MamdaniConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn project_file_overrides_user_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let user_dir = tempfile::tempdir().unwrap();
    let project_dir = tempfile::tempdir().unwrap();

    let user_path = user_dir.path().join("config.toml");
    std::fs::write(
        &user_path,
        "[engine]\ndefuzz_method = \"bisector\"\nparallel_batch_threshold = 8\n",
    )
    .unwrap();
    std::fs::write(
        project_dir.path().join("mamdani.toml"),
        "[engine]\ndefuzz_method = \"largest_of_maximum\"\n",
    )
    .unwrap();

    let config =
        MamdaniConfig::load_with_user_config(project_dir.path(), Some(&user_path)).unwrap();
    assert_eq!(
        config.engine.effective_defuzz_method(),
        DefuzzMethod::LargestOfMaximum
    );
    // User layer still supplies what the project leaves unset.
    assert_eq!(config.engine.effective_parallel_batch_threshold(), 8);
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let project_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        project_dir.path().join("mamdani.toml"),
        "[engine]\nempty_aggregate_policy = \"fail\"\n",
    )
    .unwrap();

    std::env::set_var("MAMDANI_EMPTY_AGGREGATE_POLICY", "midpoint");
    std::env::set_var("MAMDANI_PARALLEL_BATCH_THRESHOLD", "not-a-number");
    let config = MamdaniConfig::load_with_user_config(project_dir.path(), None);
    std::env::remove_var("MAMDANI_EMPTY_AGGREGATE_POLICY");
    std::env::remove_var("MAMDANI_PARALLEL_BATCH_THRESHOLD");

    let config = config.unwrap();
    assert_eq!(
        config.engine.effective_empty_aggregate_policy(),
        EmptyAggregatePolicy::Midpoint
    );
    // Unparseable env values are ignored.
    assert_eq!(config.engine.effective_parallel_batch_threshold(), 64);
}

#[test]
fn invalid_project_toml_is_fatal() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let project_dir = tempfile::tempdir().unwrap();
    std::fs::write(project_dir.path().join("mamdani.toml"), "[engine\n").unwrap();

    let err = MamdaniConfig::load_with_user_config(project_dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let project_dir = tempfile::tempdir().unwrap();
    let missing_user = project_dir.path().join("nope.toml");

    let config =
        MamdaniConfig::load_with_user_config(project_dir.path(), Some(&missing_user)).unwrap();
    assert_eq!(config, MamdaniConfig::default());
}
