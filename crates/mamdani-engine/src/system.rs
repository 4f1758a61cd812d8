//! FuzzySystem: a registry, its rule base, and the integrator's engine policy.
//!
//! This is where the empty-aggregate fallback is applied. The defuzzifier
//! always reports `EmptyAggregate`; the system turns that into an error or a
//! fallback value according to `EngineConfig::empty_aggregate_policy`.

use std::collections::BTreeMap;

use mamdani_core::config::EngineConfig;
use mamdani_core::errors::{InferenceError, MamdaniResult};
use mamdani_core::{EmptyAggregatePolicy, Universe, VariableRole};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::defuzz;
use crate::inference::{AggregatedMembership, CrispInputs, EvaluationContext, InferenceEngine};
use crate::registry::VariableRegistry;
use crate::rules::RuleBase;

/// Result of one full evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemOutput {
    /// Crisp inputs after clamping.
    pub inputs: BTreeMap<String, f64>,
    /// Crisp value per output variable.
    pub outputs: BTreeMap<String, f64>,
    /// Aggregated membership per output variable, for visualization.
    pub aggregates: BTreeMap<String, AggregatedMembership>,
    /// Outputs whose value came from the empty-aggregate policy.
    pub fallbacks: Vec<String>,
}

impl SystemOutput {
    pub fn output(&self, variable: &str) -> Option<f64> {
        self.outputs.get(variable).copied()
    }
}

/// Immutable inference system, safe to share across threads.
#[derive(Debug, Clone)]
pub struct FuzzySystem {
    registry: VariableRegistry,
    rules: RuleBase,
    engine: EngineConfig,
}

impl FuzzySystem {
    /// Pair a registry with a rule base built against it.
    pub fn new(registry: VariableRegistry, rules: RuleBase) -> MamdaniResult<Self> {
        if rules.registry_id() != registry.id() {
            return Err(InferenceError::RegistryMismatch {
                expected: rules.registry_id(),
                actual: registry.id(),
            }
            .into());
        }
        Ok(Self {
            registry,
            rules,
            engine: EngineConfig::default(),
        })
    }

    /// Registry and rules built together; the ids match by construction.
    pub(crate) fn from_parts(registry: VariableRegistry, rules: RuleBase) -> Self {
        Self {
            registry,
            rules,
            engine: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn rule_base(&self) -> &RuleBase {
        &self.rules
    }

    pub fn config(&self) -> &EngineConfig {
        &self.engine
    }

    /// Aggregated membership per output variable, without defuzzification.
    pub fn evaluate(
        &self,
        inputs: &(impl CrispInputs + ?Sized),
    ) -> Result<BTreeMap<String, AggregatedMembership>, InferenceError> {
        InferenceEngine::evaluate(&self.rules, &self.registry, inputs)
    }

    /// Full pipeline: inference, defuzzification, and fallback policy.
    pub fn compute(&self, inputs: &(impl CrispInputs + ?Sized)) -> Result<SystemOutput, InferenceError> {
        let mut ctx = InferenceEngine::run(&self.rules, &self.registry, inputs)?;
        let fallbacks = self.defuzzify_all(&mut ctx)?;

        let output = SystemOutput {
            inputs: ctx.inputs().clone(),
            outputs: ctx.outputs().clone(),
            fallbacks,
            aggregates: ctx.into_aggregates(),
        };
        debug!(outputs = ?output.outputs, "evaluation complete");
        Ok(output)
    }

    /// Crisp value of a single output variable. A name that is not an output
    /// of this system is `UnknownOutput`, never `EmptyAggregate`.
    pub fn compute_output(
        &self,
        inputs: &(impl CrispInputs + ?Sized),
        variable: &str,
    ) -> Result<f64, InferenceError> {
        let is_output = self
            .registry
            .variable_by_name(variable)
            .is_some_and(|v| v.role() == VariableRole::Output);
        if !is_output {
            return Err(InferenceError::UnknownOutput(variable.to_string()));
        }
        let output = self.compute(inputs)?;
        output
            .output(variable)
            .ok_or_else(|| InferenceError::UnknownOutput(variable.to_string()))
    }

    /// Evaluate independent input sets. Results keep input order; each entry
    /// succeeds or fails on its own. Large batches run on the rayon pool.
    pub fn compute_batch<I>(&self, batch: &[I]) -> Vec<Result<SystemOutput, InferenceError>>
    where
        I: CrispInputs + Sync,
    {
        let threshold = self.engine.effective_parallel_batch_threshold();
        info!(batch_size = batch.len(), parallel = batch.len() >= threshold, "batch evaluation");

        if batch.len() >= threshold {
            batch.par_iter().map(|inputs| self.compute(inputs)).collect()
        } else {
            batch.iter().map(|inputs| self.compute(inputs)).collect()
        }
    }

    /// Defuzzify every aggregate in `ctx`, applying the fallback policy.
    /// Returns the names of outputs that fell back.
    fn defuzzify_all(&self, ctx: &mut EvaluationContext) -> Result<Vec<String>, InferenceError> {
        let method = self.engine.effective_defuzz_method();
        let mut results = Vec::with_capacity(ctx.aggregates().len());
        let mut fallbacks = Vec::new();

        for output in self.registry.variables().filter(|v| v.role() == VariableRole::Output) {
            let Some(aggregated) = ctx.aggregates().get(output.name()) else {
                continue;
            };
            let universe = output.universe();
            let value = match defuzz::defuzzify_with(method, aggregated, universe) {
                Ok(value) => value,
                Err(InferenceError::EmptyAggregate(variable)) => {
                    let value = self.fallback(&variable, universe)?;
                    fallbacks.push(variable);
                    value
                }
                Err(e) => return Err(e),
            };
            results.push((output.name().to_string(), value));
        }

        for (name, value) in results {
            ctx.set_output(&name, value);
        }
        Ok(fallbacks)
    }

    fn fallback(&self, variable: &str, universe: &Universe) -> Result<f64, InferenceError> {
        let policy = self.engine.effective_empty_aggregate_policy();
        let value = match policy {
            EmptyAggregatePolicy::Fail => {
                return Err(InferenceError::EmptyAggregate(variable.to_string()))
            }
            EmptyAggregatePolicy::Midpoint => universe.midpoint(),
            EmptyAggregatePolicy::Fixed => match self.engine.fallback_value {
                Some(value) => universe.clamp(value),
                None => return Err(InferenceError::MissingFallback(variable.to_string())),
            },
        };
        warn!(variable, %policy, value, "no rule fired; using fallback");
        Ok(value)
    }
}
