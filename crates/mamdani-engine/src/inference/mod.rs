//! Inference Engine: Mamdani min/max inference.
//!
//! 1. Fuzzify every input a rule references (clamped to its universe).
//! 2. Firing strength = min of antecedent degrees × rule weight.
//! 3. Implication clips the consequent term at the firing strength.
//! 4. Aggregation takes the pointwise max per output variable.

pub mod aggregate;
pub mod context;
pub mod engine;
pub mod firing;
pub mod inputs;

pub use aggregate::AggregatedMembership;
pub use context::EvaluationContext;
pub use engine::{evaluate, InferenceEngine};
pub use firing::RuleActivation;
pub use inputs::CrispInputs;
