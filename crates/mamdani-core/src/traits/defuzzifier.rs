use crate::errors::InferenceError;
use crate::types::Universe;

/// Collapses sampled membership values into one crisp value.
pub trait IDefuzzifier: Send + Sync {
    /// `samples[i]` is the membership at `universe.points()[i]`.
    /// `variable` names the output and is only used in error reporting.
    /// Fails with `EmptyAggregate` when every sample is zero.
    fn defuzzify(
        &self,
        variable: &str,
        samples: &[f64],
        universe: &Universe,
    ) -> Result<f64, InferenceError>;
}
