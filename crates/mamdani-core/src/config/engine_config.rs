//! Inference engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PARALLEL_BATCH_THRESHOLD;
use crate::types::{DefuzzMethod, EmptyAggregatePolicy};

/// Configuration for evaluation and defuzzification.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Defuzzification method. Default: centroid.
    pub defuzz_method: Option<DefuzzMethod>,
    /// Behaviour when no rule fires for an output. Default: fail.
    pub empty_aggregate_policy: Option<EmptyAggregatePolicy>,
    /// Value used by the `fixed` policy.
    pub fallback_value: Option<f64>,
    /// Minimum batch size before `compute_batch` goes parallel. Default: 64.
    pub parallel_batch_threshold: Option<usize>,
}

impl EngineConfig {
    pub fn effective_defuzz_method(&self) -> DefuzzMethod {
        self.defuzz_method.unwrap_or_default()
    }

    pub fn effective_empty_aggregate_policy(&self) -> EmptyAggregatePolicy {
        self.empty_aggregate_policy.unwrap_or_default()
    }

    pub fn effective_parallel_batch_threshold(&self) -> usize {
        self.parallel_batch_threshold
            .unwrap_or(DEFAULT_PARALLEL_BATCH_THRESHOLD)
    }
}
