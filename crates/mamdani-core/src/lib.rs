//! # mamdani-core
//!
//! Foundation crate for the Mamdani fuzzy inference engine.
//! Defines shared types, traits, errors, config, tracing, and constants.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::MamdaniConfig;
pub use errors::{
    ConfigError, DefinitionError, InferenceError, MamdaniError, MamdaniErrorCode, MamdaniResult,
};
pub use types::{Clause, DefuzzMethod, EmptyAggregatePolicy, Universe, VariableRole};
