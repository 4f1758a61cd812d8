//! Bounded, sampled numeric domain of a linguistic variable.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_UNIVERSE_SAMPLES;
use crate::errors::DefinitionError;

/// Serialized form of a [`Universe`]: just the bounds and the step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniverseBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// An ordered range `[min, max]` with a fixed sampling step.
///
/// Sample points are `min + i * step`, with the last point pinned to `max`
/// even when the span is not a multiple of the step. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UniverseBounds", into = "UniverseBounds")]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
    points: Vec<f64>,
}

impl Universe {
    /// Build a universe, rejecting non-finite bounds, an empty range, or a
    /// non-positive step.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, DefinitionError> {
        let invalid = |reason: &str| DefinitionError::InvalidUniverse {
            min,
            max,
            step,
            reason: reason.to_string(),
        };

        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(invalid("bounds and step must be finite"));
        }
        if min >= max {
            return Err(invalid("min must be strictly less than max"));
        }
        if step <= 0.0 {
            return Err(invalid("step must be positive"));
        }

        // Tolerate float noise so [0, 1] step 0.1 yields 11 points, not 12.
        let intervals = ((max - min) / step - 1e-9).ceil().max(1.0);
        if intervals + 1.0 > MAX_UNIVERSE_SAMPLES as f64 {
            return Err(invalid("too many sample points"));
        }
        let intervals = intervals as usize;

        let mut points: Vec<f64> = (0..intervals).map(|i| min + i as f64 * step).collect();
        points.push(max);

        Ok(Self {
            min,
            max,
            step,
            points,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sample points used for numeric integration, ascending.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a valid universe holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }

    /// Clamp a crisp value to the nearest bound.
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    pub fn bounds(&self) -> UniverseBounds {
        UniverseBounds {
            min: self.min,
            max: self.max,
            step: self.step,
        }
    }
}

impl TryFrom<UniverseBounds> for Universe {
    type Error = DefinitionError;

    fn try_from(bounds: UniverseBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.min, bounds.max, bounds.step)
    }
}

impl From<Universe> for UniverseBounds {
    fn from(universe: Universe) -> Self {
        universe.bounds()
    }
}
