use std::collections::BTreeMap;

use mamdani_core::errors::InferenceError;
use mamdani_core::VariableRole;
use tracing::debug;

use super::aggregate::{self, AggregatedMembership};
use super::firing;
use super::inputs::CrispInputs;
use crate::registry::VariableRegistry;
use crate::rules::RuleBase;

/// Per-call evaluation state. Created by one evaluation, owned by it, and
/// dropped afterwards; nothing here is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    /// Crisp inputs actually used, after clamping.
    inputs: BTreeMap<String, f64>,
    /// `degrees[v][t]`: membership of input `v` in term `t`. Empty for
    /// variables no rule references.
    degrees: Vec<Vec<f64>>,
    /// Firing strength per rule, in rule order.
    strengths: Vec<f64>,
    clamped: usize,
    aggregates: BTreeMap<String, AggregatedMembership>,
    outputs: BTreeMap<String, f64>,
}

impl EvaluationContext {
    /// Stage 1: fuzzify every input variable the rule base references.
    pub(crate) fn fuzzify(
        registry: &VariableRegistry,
        rule_base: &RuleBase,
        inputs: &(impl CrispInputs + ?Sized),
    ) -> Result<Self, InferenceError> {
        let mut ctx = Self {
            degrees: vec![Vec::new(); registry.len()],
            ..Self::default()
        };

        for &index in &rule_base.referenced_inputs {
            let variable = &registry.variables[index];
            let raw = inputs
                .crisp(variable.name())
                .ok_or_else(|| InferenceError::MissingInput(variable.name().to_string()))?;
            if !raw.is_finite() {
                return Err(InferenceError::NonFiniteInput {
                    variable: variable.name().to_string(),
                    value: raw,
                });
            }

            let value = variable.universe().clamp(raw);
            if value != raw {
                ctx.clamped += 1;
                debug!(variable = variable.name(), raw, clamped = value, "input clamped to universe");
            }

            ctx.degrees[index] = variable.fuzzify(value);
            ctx.inputs.insert(variable.name().to_string(), value);
        }
        Ok(ctx)
    }

    /// Stage 2: firing strength of every rule.
    pub(crate) fn fire(&mut self, rule_base: &RuleBase) {
        self.strengths = rule_base
            .rules
            .iter()
            .map(|rule| firing::firing_strength(rule, &self.degrees))
            .collect();
    }

    /// Stages 3 and 4: clip and aggregate per output variable. Every output
    /// variable gets an aggregate, even when no rule targets it.
    pub(crate) fn aggregate(&mut self, registry: &VariableRegistry, rule_base: &RuleBase) {
        for (index, output) in registry
            .variables
            .iter()
            .enumerate()
            .filter(|(_, v)| v.role() == VariableRole::Output)
        {
            let targeting = rule_base
                .rules
                .iter()
                .zip(&self.strengths)
                .filter(|(rule, _)| rule.output_index() == index)
                .map(|(rule, &strength)| (rule, strength));
            let aggregated = aggregate::aggregate(output, targeting);
            self.aggregates
                .insert(output.name().to_string(), aggregated);
        }
    }

    pub(crate) fn set_output(&mut self, variable: &str, value: f64) {
        self.outputs.insert(variable.to_string(), value);
    }

    /// Crisp inputs after clamping, keyed by variable name.
    pub fn inputs(&self) -> &BTreeMap<String, f64> {
        &self.inputs
    }

    /// Firing strength per rule, in rule order.
    pub fn strengths(&self) -> &[f64] {
        &self.strengths
    }

    /// Number of rules with non-zero firing strength.
    pub fn rules_fired(&self) -> usize {
        self.strengths.iter().filter(|&&s| s > 0.0).count()
    }

    /// Number of inputs that were outside their universe.
    pub fn clamped_inputs(&self) -> usize {
        self.clamped
    }

    pub fn aggregates(&self) -> &BTreeMap<String, AggregatedMembership> {
        &self.aggregates
    }

    /// Crisp outputs written by defuzzification.
    pub fn outputs(&self) -> &BTreeMap<String, f64> {
        &self.outputs
    }

    pub fn into_aggregates(self) -> BTreeMap<String, AggregatedMembership> {
        self.aggregates
    }
}
