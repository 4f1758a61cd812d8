//! Evaluation-time errors. These abort a single call and never touch the
//! shared registry or rule base.

use super::error_code::{self, MamdaniErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("no crisp value supplied for input variable {0}")]
    MissingInput(String),

    #[error("input {variable} is not a finite number: {value}")]
    NonFiniteInput { variable: String, value: f64 },

    #[error("aggregated membership for {0} is zero everywhere; no rule fired")]
    EmptyAggregate(String),

    #[error("aggregate for {variable} does not match the defuzzification universe: {reason}")]
    UniverseMismatch { variable: String, reason: String },

    #[error("no output variable named {0}")]
    UnknownOutput(String),

    #[error("empty_aggregate_policy is \"fixed\" but no fallback_value is set (output {0})")]
    MissingFallback(String),

    #[error("rule base was built against registry {expected}, evaluated with registry {actual}")]
    RegistryMismatch { expected: u64, actual: u64 },
}

impl MamdaniErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingInput(_) => error_code::MISSING_INPUT,
            Self::NonFiniteInput { .. } => error_code::NON_FINITE_INPUT,
            Self::EmptyAggregate(_) => error_code::EMPTY_AGGREGATE,
            Self::UniverseMismatch { .. } => error_code::UNIVERSE_MISMATCH,
            Self::UnknownOutput(_) => error_code::UNKNOWN_OUTPUT,
            Self::MissingFallback(_) => error_code::MISSING_FALLBACK,
            Self::RegistryMismatch { .. } => error_code::REGISTRY_MISMATCH,
        }
    }
}
