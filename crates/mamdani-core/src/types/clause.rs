use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(variable, term)` reference: "variable IS term".
///
/// Used both as an antecedent atom and as a rule's consequent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clause {
    pub variable: String,
    pub term: String,
}

impl Clause {
    pub fn new(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            term: term.into(),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.variable, self.term)
    }
}

impl<V: Into<String>, T: Into<String>> From<(V, T)> for Clause {
    fn from((variable, term): (V, T)) -> Self {
        Self::new(variable, term)
    }
}
