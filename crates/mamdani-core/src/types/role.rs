use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a linguistic variable receives crisp values or produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableRole {
    /// Receives a crisp value at evaluation time.
    Input,
    /// Receives an aggregated membership function and is defuzzified.
    Output,
}

impl VariableRole {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for VariableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
