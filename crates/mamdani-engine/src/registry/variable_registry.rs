use std::fmt;

use mamdani_core::errors::DefinitionError;
use rustc_hash::FxHashMap;

use super::variable::LinguisticVariable;
use crate::membership;

/// Opaque reference to a variable, valid for the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableHandle {
    pub(crate) registry: u64,
    pub(crate) index: usize,
}

impl fmt::Display for VariableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.registry, self.index)
    }
}

/// Immutable set of linguistic variables. Produced only by
/// [`RegistryBuilder::build`](super::RegistryBuilder::build), so every
/// instance has passed all definition checks.
#[derive(Debug, Clone)]
pub struct VariableRegistry {
    pub(crate) id: u64,
    pub(crate) variables: Vec<LinguisticVariable>,
    pub(crate) by_name: FxHashMap<String, usize>,
}

impl VariableRegistry {
    /// Identity used to pair rule bases with the registry they were validated against.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn handle(&self, name: &str) -> Option<VariableHandle> {
        self.by_name.get(name).map(|&index| VariableHandle {
            registry: self.id,
            index,
        })
    }

    pub fn variable(&self, handle: VariableHandle) -> Result<&LinguisticVariable, DefinitionError> {
        if handle.registry != self.id {
            return Err(DefinitionError::UnknownVariable(handle.to_string()));
        }
        self.variables
            .get(handle.index)
            .ok_or_else(|| DefinitionError::UnknownVariable(handle.to_string()))
    }

    pub fn variable_by_name(&self, name: &str) -> Option<&LinguisticVariable> {
        self.by_name.get(name).map(|&i| &self.variables[i])
    }

    pub fn variables(&self) -> impl Iterator<Item = &LinguisticVariable> {
        self.variables.iter()
    }

    /// Degree of membership of `x` in `term` of the variable behind `handle`.
    /// `x` is clamped to the variable's universe.
    pub fn membership_of(
        &self,
        handle: VariableHandle,
        term: &str,
        x: f64,
    ) -> Result<f64, DefinitionError> {
        let variable = self.variable(handle)?;
        let term = variable
            .term(term)
            .ok_or_else(|| DefinitionError::UnknownTerm {
                variable: variable.name.clone(),
                term: term.to_string(),
            })?;
        Ok(membership::membership(&term.shape, variable.universe.clamp(x)))
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }
}
