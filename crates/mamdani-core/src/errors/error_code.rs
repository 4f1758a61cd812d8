//! MamdaniErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so integrators can branch on a stable
/// code string instead of parsing display messages.
pub trait MamdaniErrorCode {
    /// Returns the error code string (e.g., "EMPTY_AGGREGATE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Definition-time codes.
pub const INVALID_SHAPE: &str = "INVALID_SHAPE";
pub const INVALID_UNIVERSE: &str = "INVALID_UNIVERSE";
pub const DUPLICATE_VARIABLE: &str = "DUPLICATE_VARIABLE";
pub const DUPLICATE_TERM: &str = "DUPLICATE_TERM";
pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
pub const NO_TERMS: &str = "NO_TERMS";
pub const UNKNOWN_VARIABLE: &str = "UNKNOWN_VARIABLE";
pub const UNKNOWN_TERM: &str = "UNKNOWN_TERM";
pub const ROLE_MISMATCH: &str = "ROLE_MISMATCH";
pub const EMPTY_ANTECEDENT: &str = "EMPTY_ANTECEDENT";
pub const DUPLICATE_ANTECEDENT: &str = "DUPLICATE_ANTECEDENT";
pub const INVALID_WEIGHT: &str = "INVALID_WEIGHT";

// Evaluation-time codes.
pub const MISSING_INPUT: &str = "MISSING_INPUT";
pub const NON_FINITE_INPUT: &str = "NON_FINITE_INPUT";
pub const EMPTY_AGGREGATE: &str = "EMPTY_AGGREGATE";
pub const UNIVERSE_MISMATCH: &str = "UNIVERSE_MISMATCH";
pub const UNKNOWN_OUTPUT: &str = "UNKNOWN_OUTPUT";
pub const MISSING_FALLBACK: &str = "MISSING_FALLBACK";
pub const REGISTRY_MISMATCH: &str = "REGISTRY_MISMATCH";

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
