use mamdani_core::types::UniverseBounds;
use serde::Serialize;

use super::firing::RuleActivation;
use crate::registry::LinguisticVariable;
use crate::rules::Rule;

/// Combined output membership for one output variable, sampled on its universe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedMembership {
    pub variable: String,
    pub universe: UniverseBounds,
    /// `samples[i]` is the membership at the universe's `i`-th point.
    pub samples: Vec<f64>,
    /// Activations of the rules targeting this output, in rule order.
    pub activations: Vec<RuleActivation>,
}

impl AggregatedMembership {
    /// True when no rule contributed: the membership is zero everywhere.
    pub fn is_empty(&self) -> bool {
        self.samples.iter().all(|&m| m == 0.0)
    }

    /// Highest membership value in the aggregate.
    pub fn height(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }

    /// Number of contributing rules (non-zero strength).
    pub fn rules_fired(&self) -> usize {
        self.activations.iter().filter(|a| a.strength > 0.0).count()
    }
}

/// Clip each firing rule's consequent term and fold with pointwise max.
///
/// `rules` are the rules targeting `output`, paired with their strengths.
/// Max and min are exact on floats, so the result is independent of rule order.
pub(crate) fn aggregate<'a>(
    output: &LinguisticVariable,
    rules: impl IntoIterator<Item = (&'a Rule, f64)>,
) -> AggregatedMembership {
    let mut samples = vec![0.0_f64; output.universe().len()];
    let mut activations = Vec::new();

    for (rule, strength) in rules {
        activations.push(RuleActivation {
            rule: rule.id(),
            strength,
        });
        if strength <= 0.0 {
            continue;
        }
        let term = &output.terms()[rule.resolved_consequent.term];
        for (agg, &mu) in samples.iter_mut().zip(term.samples()) {
            *agg = agg.max(mu.min(strength));
        }
    }

    AggregatedMembership {
        variable: output.name().to_string(),
        universe: output.universe().bounds(),
        samples,
        activations,
    }
}
