//! Area-based methods. Membership is treated as piecewise linear between
//! sample points, and each segment is integrated exactly.

use mamdani_core::errors::InferenceError;
use mamdani_core::traits::IDefuzzifier;
use mamdani_core::Universe;

use super::nonempty;

/// Centroid of area: `∫ x·μ(x) dx / ∫ μ(x) dx`.
pub struct Centroid;

impl IDefuzzifier for Centroid {
    fn defuzzify(
        &self,
        variable: &str,
        samples: &[f64],
        universe: &Universe,
    ) -> Result<f64, InferenceError> {
        let (points, samples) = nonempty(variable, samples, universe)?;

        let mut area = 0.0;
        let mut moment = 0.0;
        for i in 1..points.len() {
            let (x0, x1) = (points[i - 1], points[i]);
            let (m0, m1) = (samples[i - 1], samples[i]);
            let h = x1 - x0;
            area += h * (m0 + m1) / 2.0;
            moment += h / 6.0 * (x0 * (2.0 * m0 + m1) + x1 * (m0 + 2.0 * m1));
        }

        let centroid = moment / area;
        if !centroid.is_finite() {
            return Err(InferenceError::EmptyAggregate(variable.to_string()));
        }
        Ok(universe.clamp(centroid))
    }
}

/// Vertical line splitting the area into two equal halves.
pub struct Bisector;

impl IDefuzzifier for Bisector {
    fn defuzzify(
        &self,
        variable: &str,
        samples: &[f64],
        universe: &Universe,
    ) -> Result<f64, InferenceError> {
        let (points, samples) = nonempty(variable, samples, universe)?;

        let segments: Vec<f64> = (1..points.len())
            .map(|i| (points[i] - points[i - 1]) * (samples[i - 1] + samples[i]) / 2.0)
            .collect();
        let half = segments.iter().sum::<f64>() / 2.0;
        if !half.is_finite() || half <= 0.0 {
            return Err(InferenceError::EmptyAggregate(variable.to_string()));
        }

        let mut cumulative = 0.0;
        for (i, &segment) in segments.iter().enumerate() {
            if segment > 0.0 && cumulative + segment >= half {
                let (x0, x1) = (points[i], points[i + 1]);
                let (m0, m1) = (samples[i], samples[i + 1]);
                let h = x1 - x0;
                let remaining = half - cumulative;
                // Solve m0·t + (m1 - m0)·t² / 2h = remaining for t in [0, h].
                let slope = (m1 - m0) / (2.0 * h);
                let disc = (m0 * m0 + 4.0 * slope * remaining).max(0.0);
                let t = 2.0 * remaining / (m0 + disc.sqrt());
                return Ok(universe.clamp(x0 + t.clamp(0.0, h)));
            }
            cumulative += segment;
        }
        Ok(universe.max())
    }
}
