//! Maximum-based methods: pick among the sample points at peak membership.

use mamdani_core::errors::InferenceError;
use mamdani_core::traits::IDefuzzifier;
use mamdani_core::Universe;

use super::nonempty;

/// Sample points whose membership equals the aggregate's height.
fn plateau<'a>(points: &'a [f64], samples: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
    let height = samples.iter().copied().fold(0.0, f64::max);
    points
        .iter()
        .zip(samples)
        .filter(move |&(_, &m)| m == height)
        .map(|(&x, _)| x)
}

/// Mean of the points at maximum membership.
pub struct MeanOfMaximum;

impl IDefuzzifier for MeanOfMaximum {
    fn defuzzify(
        &self,
        variable: &str,
        samples: &[f64],
        universe: &Universe,
    ) -> Result<f64, InferenceError> {
        let (points, samples) = nonempty(variable, samples, universe)?;
        let (sum, count) = plateau(points, samples).fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
        Ok(sum / count as f64)
    }
}

/// Smallest point at maximum membership.
pub struct SmallestOfMaximum;

impl IDefuzzifier for SmallestOfMaximum {
    fn defuzzify(
        &self,
        variable: &str,
        samples: &[f64],
        universe: &Universe,
    ) -> Result<f64, InferenceError> {
        let (points, samples) = nonempty(variable, samples, universe)?;
        plateau(points, samples)
            .next()
            .ok_or_else(|| InferenceError::EmptyAggregate(variable.to_string()))
    }
}

/// Largest point at maximum membership.
pub struct LargestOfMaximum;

impl IDefuzzifier for LargestOfMaximum {
    fn defuzzify(
        &self,
        variable: &str,
        samples: &[f64],
        universe: &Universe,
    ) -> Result<f64, InferenceError> {
        let (points, samples) = nonempty(variable, samples, universe)?;
        plateau(points, samples)
            .last()
            .ok_or_else(|| InferenceError::EmptyAggregate(variable.to_string()))
    }
}
