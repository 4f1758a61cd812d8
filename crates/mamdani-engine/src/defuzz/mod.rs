//! Defuzzifier: collapse an aggregated membership function to one crisp value.
//!
//! Every method fails with `EmptyAggregate` on an all-zero aggregate; picking a
//! fallback is the caller's decision.

pub mod area;
pub mod maximum;

use mamdani_core::errors::InferenceError;
use mamdani_core::traits::IDefuzzifier;
use mamdani_core::{DefuzzMethod, Universe};

pub use area::{Bisector, Centroid};
pub use maximum::{LargestOfMaximum, MeanOfMaximum, SmallestOfMaximum};

use crate::inference::AggregatedMembership;

/// Centroid-of-area defuzzification of an aggregate over its universe.
pub fn defuzzify(
    aggregated: &AggregatedMembership,
    universe: &Universe,
) -> Result<f64, InferenceError> {
    defuzzify_with(DefuzzMethod::Centroid, aggregated, universe)
}

/// Defuzzify with an explicit method.
pub fn defuzzify_with(
    method: DefuzzMethod,
    aggregated: &AggregatedMembership,
    universe: &Universe,
) -> Result<f64, InferenceError> {
    if aggregated.universe != universe.bounds() {
        return Err(InferenceError::UniverseMismatch {
            variable: aggregated.variable.clone(),
            reason: format!(
                "sampled on {:?}, given {:?}",
                aggregated.universe,
                universe.bounds()
            ),
        });
    }
    defuzzifier_for(method).defuzzify(&aggregated.variable, &aggregated.samples, universe)
}

/// The stateless implementation behind each method.
pub fn defuzzifier_for(method: DefuzzMethod) -> &'static dyn IDefuzzifier {
    match method {
        DefuzzMethod::Centroid => &Centroid,
        DefuzzMethod::Bisector => &Bisector,
        DefuzzMethod::MeanOfMaximum => &MeanOfMaximum,
        DefuzzMethod::SmallestOfMaximum => &SmallestOfMaximum,
        DefuzzMethod::LargestOfMaximum => &LargestOfMaximum,
    }
}

/// Shared guard: pair samples with points, or report a length mismatch or
/// an empty aggregate.
fn nonempty<'a>(
    variable: &str,
    samples: &'a [f64],
    universe: &'a Universe,
) -> Result<(&'a [f64], &'a [f64]), InferenceError> {
    if samples.len() != universe.len() {
        return Err(InferenceError::UniverseMismatch {
            variable: variable.to_string(),
            reason: format!("{} samples for {} points", samples.len(), universe.len()),
        });
    }
    if samples.iter().all(|&m| m <= 0.0) {
        return Err(InferenceError::EmptyAggregate(variable.to_string()));
    }
    Ok((universe.points(), samples))
}
