use std::fmt;

use mamdani_core::Clause;
use serde::Serialize;
use smallvec::SmallVec;

/// Position of a rule within its rule base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RuleId(pub usize);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0 + 1)
    }
}

/// A clause resolved to registry indices at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedClause {
    pub variable: usize,
    pub term: usize,
}

/// `IF a1 AND a2 ... THEN consequent`, scaled by `weight`.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    pub(crate) id: RuleId,
    pub(crate) antecedents: SmallVec<[Clause; 4]>,
    pub(crate) consequent: Clause,
    pub(crate) weight: f64,
    #[serde(skip)]
    pub(crate) resolved_antecedents: SmallVec<[ResolvedClause; 4]>,
    #[serde(skip)]
    pub(crate) resolved_consequent: ResolvedClause,
}

impl Rule {
    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn antecedents(&self) -> &[Clause] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &Clause {
        &self.consequent
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Registry index of the output variable this rule feeds.
    pub(crate) fn output_index(&self) -> usize {
        self.resolved_consequent.variable
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: IF ", self.id)?;
        for (i, clause) in self.antecedents.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{clause}")?;
        }
        write!(f, " THEN {}", self.consequent)?;
        if self.weight < 1.0 {
            write!(f, " WITH {}", self.weight)?;
        }
        Ok(())
    }
}
