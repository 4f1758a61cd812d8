//! Engine policy enums selectable from configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Method used to collapse an aggregated membership function to a crisp value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzMethod {
    /// Centroid of area.
    #[default]
    Centroid,
    /// Point splitting the area into two equal halves.
    Bisector,
    /// Mean of the sample points at maximum membership.
    MeanOfMaximum,
    /// Smallest sample point at maximum membership.
    SmallestOfMaximum,
    /// Largest sample point at maximum membership.
    LargestOfMaximum,
}

impl DefuzzMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Centroid => "centroid",
            Self::Bisector => "bisector",
            Self::MeanOfMaximum => "mean_of_maximum",
            Self::SmallestOfMaximum => "smallest_of_maximum",
            Self::LargestOfMaximum => "largest_of_maximum",
        }
    }

    pub const ALL: [DefuzzMethod; 5] = [
        Self::Centroid,
        Self::Bisector,
        Self::MeanOfMaximum,
        Self::SmallestOfMaximum,
        Self::LargestOfMaximum,
    ];
}

impl fmt::Display for DefuzzMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DefuzzMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| format!("unknown defuzzification method: {s}"))
    }
}

/// What the system facade does when an output's aggregate is empty.
///
/// The defuzzifier itself always reports `EmptyAggregate`; this policy is the
/// integrator's explicit decision about a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyAggregatePolicy {
    /// Propagate `EmptyAggregate` to the caller.
    #[default]
    Fail,
    /// Substitute the midpoint of the output universe.
    Midpoint,
    /// Substitute the configured fallback value (clamped to the universe).
    Fixed,
}

impl EmptyAggregatePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Midpoint => "midpoint",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for EmptyAggregatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EmptyAggregatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail" => Ok(Self::Fail),
            "midpoint" => Ok(Self::Midpoint),
            "fixed" => Ok(Self::Fixed),
            other => Err(format!("unknown empty aggregate policy: {other}")),
        }
    }
}
