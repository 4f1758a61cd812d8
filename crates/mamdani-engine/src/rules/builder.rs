use mamdani_core::constants::DEFAULT_RULE_WEIGHT;
use mamdani_core::errors::DefinitionError;
use mamdani_core::{Clause, VariableRole};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::rule::{ResolvedClause, Rule, RuleId};
use super::rule_base::RuleBase;
use crate::registry::VariableRegistry;

/// Validates rules against a built registry and collects them in order.
pub struct RuleBaseBuilder<'r> {
    registry: &'r VariableRegistry,
    rules: Vec<Rule>,
}

impl<'r> RuleBaseBuilder<'r> {
    pub fn new(registry: &'r VariableRegistry) -> Self {
        Self {
            registry,
            rules: Vec::new(),
        }
    }

    /// Add a rule with the default weight of 1.
    pub fn add_rule<I, C>(
        &mut self,
        antecedents: I,
        consequent: impl Into<Clause>,
    ) -> Result<RuleId, DefinitionError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Clause>,
    {
        self.add_weighted_rule(antecedents, consequent, DEFAULT_RULE_WEIGHT)
    }

    /// Add a rule whose firing strength is scaled by `weight` in (0, 1].
    pub fn add_weighted_rule<I, C>(
        &mut self,
        antecedents: I,
        consequent: impl Into<Clause>,
        weight: f64,
    ) -> Result<RuleId, DefinitionError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Clause>,
    {
        if !weight.is_finite() || weight <= 0.0 || weight > 1.0 {
            return Err(DefinitionError::InvalidWeight(weight));
        }

        let antecedents: SmallVec<[Clause; 4]> =
            antecedents.into_iter().map(Into::into).collect();
        if antecedents.is_empty() {
            return Err(DefinitionError::EmptyAntecedent);
        }

        let mut resolved_antecedents: SmallVec<[ResolvedClause; 4]> = SmallVec::new();
        for clause in &antecedents {
            let resolved = self.resolve(clause, VariableRole::Input)?;
            if resolved_antecedents
                .iter()
                .any(|r| r.variable == resolved.variable)
            {
                return Err(DefinitionError::DuplicateAntecedent(clause.variable.clone()));
            }
            resolved_antecedents.push(resolved);
        }

        let consequent = consequent.into();
        let resolved_consequent = self.resolve(&consequent, VariableRole::Output)?;

        let id = RuleId(self.rules.len());
        let rule = Rule {
            id,
            antecedents,
            consequent,
            weight,
            resolved_antecedents,
            resolved_consequent,
        };
        debug!(rule = %rule, "rule added");
        self.rules.push(rule);
        Ok(id)
    }

    pub fn build(self) -> RuleBase {
        let mut referenced_inputs: Vec<usize> = self
            .rules
            .iter()
            .flat_map(|r| r.resolved_antecedents.iter().map(|c| c.variable))
            .collect();
        referenced_inputs.sort_unstable();
        referenced_inputs.dedup();

        info!(
            registry = self.registry.id(),
            rules = self.rules.len(),
            inputs = referenced_inputs.len(),
            "rule base built"
        );

        RuleBase {
            registry_id: self.registry.id(),
            rules: self.rules,
            referenced_inputs,
        }
    }

    /// Resolve a clause to indices and check the variable plays `expected`.
    fn resolve(
        &self,
        clause: &Clause,
        expected: VariableRole,
    ) -> Result<ResolvedClause, DefinitionError> {
        let variable = self
            .registry
            .index_of(&clause.variable)
            .ok_or_else(|| DefinitionError::UnknownVariable(clause.variable.clone()))?;
        let definition = &self.registry.variables[variable];

        if definition.role() != expected {
            return Err(DefinitionError::RoleMismatch {
                variable: clause.variable.clone(),
                expected: expected.name(),
                actual: definition.role().name(),
            });
        }

        let term = definition
            .term_index(&clause.term)
            .ok_or_else(|| DefinitionError::UnknownTerm {
                variable: clause.variable.clone(),
                term: clause.term.clone(),
            })?;

        Ok(ResolvedClause { variable, term })
    }
}
