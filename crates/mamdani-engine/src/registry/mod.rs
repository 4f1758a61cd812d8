//! Linguistic Variable Registry: variables, their universes, and their terms.

pub mod builder;
pub mod variable_registry;
pub mod variable;

pub use builder::RegistryBuilder;
pub use variable_registry::{VariableHandle, VariableRegistry};
pub use variable::{LinguisticVariable, Term};
