// Single source of truth for all default values.

// --- Universe ---
/// Upper bound on the number of sample points a universe may hold.
pub const MAX_UNIVERSE_SAMPLES: usize = 1_000_000;

// --- Rules ---
pub const DEFAULT_RULE_WEIGHT: f64 = 1.0;

// --- Engine ---
/// Below this many input sets, `compute_batch` stays on the calling thread.
pub const DEFAULT_PARALLEL_BATCH_THRESHOLD: usize = 64;

// --- Observability ---
pub const LOG_ENV_VAR: &str = "MAMDANI_LOG";
pub const DEFAULT_LOG_FILTER: &str = "mamdani=info";

// --- Config ---
pub const PROJECT_CONFIG_FILENAME: &str = "mamdani.toml";
pub const USER_CONFIG_DIR: &str = ".mamdani";
