use mamdani_core::{Universe, VariableRole};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::membership::{self, MembershipShape};

/// A named fuzzy category of a variable.
#[derive(Debug, Clone, Serialize)]
pub struct Term {
    pub name: String,
    pub shape: MembershipShape,
    /// Shape sampled over the universe. Only populated for output variables,
    /// whose terms are clipped pointwise during implication.
    #[serde(skip)]
    pub(crate) samples: Vec<f64>,
}

impl Term {
    /// Cached samples over the owning universe; empty for input terms.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

/// A universe plus uniquely named terms, in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct LinguisticVariable {
    pub(crate) name: String,
    pub(crate) role: VariableRole,
    pub(crate) universe: Universe,
    pub(crate) terms: Vec<Term>,
    #[serde(skip)]
    pub(crate) term_index: FxHashMap<String, usize>,
}

impl LinguisticVariable {
    pub(crate) fn new(name: String, role: VariableRole, universe: Universe) -> Self {
        Self {
            name,
            role,
            universe,
            terms: Vec::new(),
            term_index: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> VariableRole {
        self.role
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term(&self, name: &str) -> Option<&Term> {
        self.term_index(name).map(|i| &self.terms[i])
    }

    pub fn term_index(&self, name: &str) -> Option<usize> {
        self.term_index.get(name).copied()
    }

    /// Membership of `x` in each term, in declaration order.
    /// `x` is clamped to the universe first.
    pub fn fuzzify(&self, x: f64) -> Vec<f64> {
        let x = self.universe.clamp(x);
        self.terms
            .iter()
            .map(|t| membership::membership(&t.shape, x))
            .collect()
    }
}
