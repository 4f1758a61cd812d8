//! Definition errors, raised while building a registry or rule base.

use super::error_code::{self, MamdaniErrorCode};

/// Configuration-time errors. Any of these aborts construction: a registry or
/// rule base is only handed out once every definition has been accepted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("invalid {kind} shape: {reason}")]
    InvalidShape { kind: &'static str, reason: String },

    #[error("invalid universe [{min}, {max}] step {step}: {reason}")]
    InvalidUniverse {
        min: f64,
        max: f64,
        step: f64,
        reason: String,
    },

    #[error("variable already defined: {0}")]
    DuplicateVariable(String),

    #[error("term {term} already defined on variable {variable}")]
    DuplicateTerm { variable: String, term: String },

    #[error("term {term} on variable {variable} has support [{low}, {high}] outside universe [{min}, {max}]")]
    Domain {
        variable: String,
        term: String,
        low: f64,
        high: f64,
        min: f64,
        max: f64,
    },

    #[error("variable {0} has no terms")]
    NoTerms(String),

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("unknown term {term} on variable {variable}")]
    UnknownTerm { variable: String, term: String },

    #[error("variable {variable} is an {actual} variable, expected {expected}")]
    RoleMismatch {
        variable: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("rule has no antecedent clauses")]
    EmptyAntecedent,

    #[error("variable {0} appears more than once in a rule antecedent")]
    DuplicateAntecedent(String),

    #[error("rule weight {0} outside (0, 1]")]
    InvalidWeight(f64),
}

impl MamdaniErrorCode for DefinitionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidShape { .. } => error_code::INVALID_SHAPE,
            Self::InvalidUniverse { .. } => error_code::INVALID_UNIVERSE,
            Self::DuplicateVariable(_) => error_code::DUPLICATE_VARIABLE,
            Self::DuplicateTerm { .. } => error_code::DUPLICATE_TERM,
            Self::Domain { .. } => error_code::DOMAIN_ERROR,
            Self::NoTerms(_) => error_code::NO_TERMS,
            Self::UnknownVariable(_) => error_code::UNKNOWN_VARIABLE,
            Self::UnknownTerm { .. } => error_code::UNKNOWN_TERM,
            Self::RoleMismatch { .. } => error_code::ROLE_MISMATCH,
            Self::EmptyAntecedent => error_code::EMPTY_ANTECEDENT,
            Self::DuplicateAntecedent(_) => error_code::DUPLICATE_ANTECEDENT,
            Self::InvalidWeight(_) => error_code::INVALID_WEIGHT,
        }
    }
}
