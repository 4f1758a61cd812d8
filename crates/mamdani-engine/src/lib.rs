//! # mamdani-engine
//!
//! Mamdani fuzzy inference over linguistic variables.
//! Pipeline: fuzzify, fire (min), clip (min), aggregate (max), defuzzify (centroid).
//! Registries and rule bases are immutable once built and shared freely across threads.

pub mod defuzz;
pub mod definition;
pub mod inference;
pub mod membership;
pub mod presets;
pub mod registry;
pub mod rules;
pub mod system;

pub use defuzz::{defuzzifier_for, defuzzify, defuzzify_with};
pub use definition::{load_system, SystemDefinition};
pub use inference::{evaluate, AggregatedMembership, CrispInputs, EvaluationContext, InferenceEngine};
pub use membership::{membership, MembershipShape};
pub use registry::{RegistryBuilder, VariableHandle, VariableRegistry};
pub use rules::{RuleBase, RuleBaseBuilder, RuleId};
pub use system::{FuzzySystem, SystemOutput};
