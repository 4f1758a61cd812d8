use std::collections::BTreeMap;

use mamdani_core::errors::InferenceError;
use tracing::debug;

use super::aggregate::AggregatedMembership;
use super::context::EvaluationContext;
use super::inputs::CrispInputs;
use crate::registry::VariableRegistry;
use crate::rules::RuleBase;

/// Stateless Mamdani inference over a registry and rule base.
///
/// Both are only read, so any number of evaluations may run concurrently.
pub struct InferenceEngine;

impl InferenceEngine {
    /// Run fuzzification, rule firing and aggregation, keeping the full
    /// per-call context for inspection.
    pub fn run(
        rule_base: &RuleBase,
        registry: &VariableRegistry,
        inputs: &(impl CrispInputs + ?Sized),
    ) -> Result<EvaluationContext, InferenceError> {
        if rule_base.registry_id() != registry.id() {
            return Err(InferenceError::RegistryMismatch {
                expected: rule_base.registry_id(),
                actual: registry.id(),
            });
        }

        let mut ctx = EvaluationContext::fuzzify(registry, rule_base, inputs)?;
        ctx.fire(rule_base);
        ctx.aggregate(registry, rule_base);

        debug!(
            rules_total = rule_base.len(),
            rules_fired = ctx.rules_fired(),
            inputs_clamped = ctx.clamped_inputs(),
            "inference complete"
        );
        Ok(ctx)
    }

    /// Aggregated membership per output variable.
    pub fn evaluate(
        rule_base: &RuleBase,
        registry: &VariableRegistry,
        inputs: &(impl CrispInputs + ?Sized),
    ) -> Result<BTreeMap<String, AggregatedMembership>, InferenceError> {
        Self::run(rule_base, registry, inputs).map(EvaluationContext::into_aggregates)
    }
}

/// Free-function form of [`InferenceEngine::evaluate`].
pub fn evaluate(
    rule_base: &RuleBase,
    registry: &VariableRegistry,
    inputs: &(impl CrispInputs + ?Sized),
) -> Result<BTreeMap<String, AggregatedMembership>, InferenceError> {
    InferenceEngine::evaluate(rule_base, registry, inputs)
}
