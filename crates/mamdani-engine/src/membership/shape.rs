//! Membership function descriptors and their evaluation.

use std::fmt;

use mamdani_core::errors::DefinitionError;
use serde::{Deserialize, Serialize};

/// A membership function shape, tagged by kind.
///
/// ```text
/// kind = "triangular",  a, b, c        (a <= b <= c)
/// kind = "trapezoidal", a, b, c, d     (a <= b <= c <= d)
/// kind = "gaussian",    mean, sigma    (sigma > 0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MembershipShape {
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    Gaussian { mean: f64, sigma: f64 },
}

impl MembershipShape {
    /// Validated triangular shape.
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self, DefinitionError> {
        let shape = Self::Triangular { a, b, c };
        shape.validate()?;
        Ok(shape)
    }

    /// Validated trapezoidal shape.
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self, DefinitionError> {
        let shape = Self::Trapezoidal { a, b, c, d };
        shape.validate()?;
        Ok(shape)
    }

    /// Validated gaussian shape.
    pub fn gaussian(mean: f64, sigma: f64) -> Result<Self, DefinitionError> {
        let shape = Self::Gaussian { mean, sigma };
        shape.validate()?;
        Ok(shape)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Triangular { .. } => "triangular",
            Self::Trapezoidal { .. } => "trapezoidal",
            Self::Gaussian { .. } => "gaussian",
        }
    }

    /// Check parameter ordering and finiteness.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let invalid = |reason: String| DefinitionError::InvalidShape {
            kind: self.kind(),
            reason,
        };

        let params: Vec<f64> = match *self {
            Self::Triangular { a, b, c } => vec![a, b, c],
            Self::Trapezoidal { a, b, c, d } => vec![a, b, c, d],
            Self::Gaussian { mean, sigma } => vec![mean, sigma],
        };
        if params.iter().any(|p| !p.is_finite()) {
            return Err(invalid(format!("parameters must be finite: {params:?}")));
        }

        match self {
            Self::Triangular { .. } | Self::Trapezoidal { .. } => {
                if params.windows(2).any(|w| w[0] > w[1]) {
                    return Err(invalid(format!(
                        "parameters must be non-decreasing: {params:?}"
                    )));
                }
            }
            Self::Gaussian { sigma, .. } => {
                if *sigma <= 0.0 {
                    return Err(invalid(format!("sigma must be positive, got {sigma}")));
                }
            }
        }
        Ok(())
    }

    /// Interval outside which the degree is zero.
    ///
    /// Gaussians have unbounded support; their mean is returned as a
    /// degenerate interval so domain checks still anchor the shape.
    pub fn support(&self) -> (f64, f64) {
        match *self {
            Self::Triangular { a, c, .. } => (a, c),
            Self::Trapezoidal { a, d, .. } => (a, d),
            Self::Gaussian { mean, .. } => (mean, mean),
        }
    }

    /// Degree of membership of `x`, in [0, 1].
    ///
    /// Degenerate edges (`a == b`, `b == c`, ...) become vertical shoulders:
    /// the plateau value holds at the shared point and the shape is zero on
    /// the open side, so no division by a zero-width ramp ever happens.
    pub fn membership(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => ramp(x, a, b, b, c),
            Self::Trapezoidal { a, b, c, d } => ramp(x, a, b, c, d),
            Self::Gaussian { mean, sigma } => {
                let z = (x - mean) / sigma;
                (-0.5 * z * z).exp()
            }
        }
    }
}

impl fmt::Display for MembershipShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Triangular { a, b, c } => write!(f, "tri({a}, {b}, {c})"),
            Self::Trapezoidal { a, b, c, d } => write!(f, "trap({a}, {b}, {c}, {d})"),
            Self::Gaussian { mean, sigma } => write!(f, "gauss({mean}, {sigma})"),
        }
    }
}

/// Piecewise-linear trapezoid with plateau `[b, c]`. A triangle is `b == c`.
fn ramp(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x < a || x > d {
        0.0
    } else if (b..=c).contains(&x) {
        1.0
    } else if x < b {
        // a <= x < b, so b > a.
        (x - a) / (b - a)
    } else {
        // c < x <= d, so d > c.
        (d - x) / (d - c)
    }
}

/// Evaluate `shape` at `x`. Free-function form of [`MembershipShape::membership`].
pub fn membership(shape: &MembershipShape, x: f64) -> f64 {
    shape.membership(x)
}
