use serde::Serialize;

use crate::rules::{Rule, RuleId};

/// How strongly one rule fired for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleActivation {
    pub rule: RuleId,
    /// In `[0, weight]`.
    pub strength: f64,
}

/// Fuzzy AND (min) over the antecedent degrees, scaled by the rule weight.
///
/// `degrees[v][t]` is the membership of input variable `v` in its term `t`.
pub(crate) fn firing_strength(rule: &Rule, degrees: &[Vec<f64>]) -> f64 {
    let conjunction = rule
        .resolved_antecedents
        .iter()
        .map(|c| degrees[c.variable][c.term])
        .fold(1.0_f64, f64::min);
    conjunction * rule.weight
}
