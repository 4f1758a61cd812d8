use std::sync::atomic::{AtomicU64, Ordering};

use mamdani_core::errors::DefinitionError;
use mamdani_core::{Universe, VariableRole};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::variable::{LinguisticVariable, Term};
use super::variable_registry::{VariableHandle, VariableRegistry};
use crate::membership::{self, MembershipShape};

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Mutable staging area for variable definitions.
///
/// Every `define_*`/`add_term` call is validated immediately; the registry
/// itself only exists once [`build`](Self::build) succeeds.
#[derive(Debug)]
pub struct RegistryBuilder {
    id: u64,
    variables: Vec<LinguisticVariable>,
    by_name: FxHashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            variables: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Declare a variable. Names are unique across roles.
    pub fn define_variable(
        &mut self,
        name: impl Into<String>,
        role: VariableRole,
        universe: Universe,
    ) -> Result<VariableHandle, DefinitionError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(DefinitionError::DuplicateVariable(name));
        }

        let index = self.variables.len();
        debug!(variable = %name, %role, min = universe.min(), max = universe.max(), "defining variable");
        self.by_name.insert(name.clone(), index);
        self.variables
            .push(LinguisticVariable::new(name, role, universe));

        Ok(VariableHandle {
            registry: self.id,
            index,
        })
    }

    pub fn define_input(
        &mut self,
        name: impl Into<String>,
        universe: Universe,
    ) -> Result<VariableHandle, DefinitionError> {
        self.define_variable(name, VariableRole::Input, universe)
    }

    pub fn define_output(
        &mut self,
        name: impl Into<String>,
        universe: Universe,
    ) -> Result<VariableHandle, DefinitionError> {
        self.define_variable(name, VariableRole::Output, universe)
    }

    /// Attach a term to a variable.
    ///
    /// Rejects invalid shapes, duplicate term names, and shapes whose support
    /// leaves the variable's universe.
    pub fn add_term(
        &mut self,
        handle: VariableHandle,
        term: impl Into<String>,
        shape: MembershipShape,
    ) -> Result<(), DefinitionError> {
        if handle.registry != self.id {
            return Err(DefinitionError::UnknownVariable(handle.to_string()));
        }
        let variable = self
            .variables
            .get_mut(handle.index)
            .ok_or_else(|| DefinitionError::UnknownVariable(handle.to_string()))?;
        let term = term.into();

        shape.validate()?;

        if variable.term_index.contains_key(&term) {
            return Err(DefinitionError::DuplicateTerm {
                variable: variable.name.clone(),
                term,
            });
        }

        let (low, high) = shape.support();
        let universe = &variable.universe;
        if low < universe.min() || high > universe.max() {
            return Err(DefinitionError::Domain {
                variable: variable.name.clone(),
                term,
                low,
                high,
                min: universe.min(),
                max: universe.max(),
            });
        }

        variable
            .term_index
            .insert(term.clone(), variable.terms.len());
        variable.terms.push(Term {
            name: term,
            shape,
            samples: Vec::new(),
        });
        Ok(())
    }

    /// Finish construction. Every variable must carry at least one term.
    /// Output terms are sampled over their universe here, once.
    pub fn build(mut self) -> Result<VariableRegistry, DefinitionError> {
        if let Some(empty) = self.variables.iter().find(|v| v.terms.is_empty()) {
            return Err(DefinitionError::NoTerms(empty.name.clone()));
        }

        for variable in self
            .variables
            .iter_mut()
            .filter(|v| v.role == VariableRole::Output)
        {
            for term in variable.terms.iter_mut() {
                term.samples = membership::sample(&term.shape, &variable.universe);
            }
        }

        info!(
            registry = self.id,
            variable_count = self.variables.len(),
            "variable registry built"
        );

        Ok(VariableRegistry {
            id: self.id,
            variables: self.variables,
            by_name: self.by_name,
        })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
