//! Shared value types used across the engine.

pub mod clause;
pub mod policy;
pub mod role;
pub mod universe;

pub use clause::Clause;
pub use policy::{DefuzzMethod, EmptyAggregatePolicy};
pub use role::VariableRole;
pub use universe::{Universe, UniverseBounds};
