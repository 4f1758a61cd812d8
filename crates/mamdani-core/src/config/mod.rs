//! Configuration system.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod engine_config;
pub mod mamdani_config;
pub mod observability_config;

pub use engine_config::EngineConfig;
pub use mamdani_config::MamdaniConfig;
pub use observability_config::ObservabilityConfig;
