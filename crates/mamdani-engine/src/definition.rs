//! Declarative system definitions.
//!
//! A definition is plain data (serde) describing variables, terms and rules.
//! [`SystemDefinition::build`] replays it through the registry and rule base
//! builders, so a loaded file gets exactly the same validation as code.
//!
//! ```toml
//! [[variable]]
//! name = "mood"
//! role = "input"
//! universe = { min = 0.0, max = 10.0, step = 1.0 }
//! terms = [
//!     { name = "low", shape = { kind = "triangular", a = 0.0, b = 0.0, c = 5.0 } },
//! ]
//!
//! [[rule]]
//! if = [{ variable = "mood", term = "low" }]
//! then = { variable = "risk", term = "high" }
//! weight = 1.0
//! ```

use std::path::Path;

use mamdani_core::constants::DEFAULT_RULE_WEIGHT;
use mamdani_core::errors::{ConfigError, DefinitionError, MamdaniResult};
use mamdani_core::types::UniverseBounds;
use mamdani_core::{Clause, Universe, VariableRole};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::membership::MembershipShape;
use crate::registry::RegistryBuilder;
use crate::rules::RuleBaseBuilder;
use crate::system::FuzzySystem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermDefinition {
    pub name: String,
    pub shape: MembershipShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    pub name: String,
    pub role: VariableRole,
    pub universe: UniverseBounds,
    #[serde(default)]
    pub terms: Vec<TermDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    #[serde(rename = "if")]
    pub antecedents: Vec<Clause>,
    #[serde(rename = "then")]
    pub consequent: Clause,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_RULE_WEIGHT
}

/// Variables and rules of one inference system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemDefinition {
    #[serde(rename = "variable", default)]
    pub variables: Vec<VariableDefinition>,
    #[serde(rename = "rule", default)]
    pub rules: Vec<RuleDefinition>,
}

impl SystemDefinition {
    /// Parse a definition from TOML. Structure only; call [`build`](Self::build)
    /// to validate the content.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a definition file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate everything and assemble the system. The first invalid
    /// variable, term or rule aborts construction.
    pub fn build(&self) -> Result<FuzzySystem, DefinitionError> {
        let mut builder = RegistryBuilder::new();
        for variable in &self.variables {
            let UniverseBounds { min, max, step } = variable.universe;
            let handle =
                builder.define_variable(&variable.name, variable.role, Universe::new(min, max, step)?)?;
            for term in &variable.terms {
                builder.add_term(handle, &term.name, term.shape)?;
            }
        }
        let registry = builder.build()?;

        let mut rules = RuleBaseBuilder::new(&registry);
        for rule in &self.rules {
            rules.add_weighted_rule(
                rule.antecedents.iter().cloned(),
                rule.consequent.clone(),
                rule.weight,
            )?;
        }
        let rules = rules.build();

        info!(
            variables = self.variables.len(),
            rules = self.rules.len(),
            "system definition built"
        );
        Ok(FuzzySystem::from_parts(registry, rules))
    }
}

/// Load a definition file and build it in one step.
pub fn load_system(path: &Path) -> MamdaniResult<FuzzySystem> {
    Ok(SystemDefinition::from_file(path)?.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOOD_RISK: &str = r#"
[[variable]]
name = "mood"
role = "input"
universe = { min = 0.0, max = 10.0, step = 1.0 }
terms = [
    { name = "low", shape = { kind = "triangular", a = 0.0, b = 0.0, c = 5.0 } },
    { name = "high", shape = { kind = "triangular", a = 5.0, b = 10.0, c = 10.0 } },
]

[[variable]]
name = "risk"
role = "output"
universe = { min = 0.0, max = 100.0, step = 1.0 }
terms = [
    { name = "low", shape = { kind = "triangular", a = 0.0, b = 0.0, c = 40.0 } },
    { name = "high", shape = { kind = "triangular", a = 60.0, b = 100.0, c = 100.0 } },
]

[[rule]]
if = [{ variable = "mood", term = "low" }]
then = { variable = "risk", term = "high" }

[[rule]]
if = [{ variable = "mood", term = "high" }]
then = { variable = "risk", term = "low" }
weight = 0.5
"#;

    #[test]
    fn parses_and_builds() {
        let definition = SystemDefinition::from_toml(MOOD_RISK).unwrap();
        assert_eq!(definition.variables.len(), 2);
        assert_eq!(definition.rules[0].weight, 1.0);
        assert_eq!(definition.rules[1].weight, 0.5);

        let system = definition.build().unwrap();
        assert_eq!(system.registry().len(), 2);
        assert_eq!(system.rule_base().len(), 2);
    }

    #[test]
    fn toml_round_trip_preserves_definition() {
        let definition = SystemDefinition::from_toml(MOOD_RISK).unwrap();
        let rendered = definition.to_toml().unwrap();
        assert_eq!(SystemDefinition::from_toml(&rendered).unwrap(), definition);
    }

    #[test]
    fn invalid_content_surfaces_definition_errors() {
        let bad = MOOD_RISK.replace("c = 40.0", "c = 140.0");
        let err = SystemDefinition::from_toml(&bad).unwrap().build().unwrap_err();
        assert!(matches!(err, DefinitionError::Domain { .. }));

        let bad = MOOD_RISK.replace(r#"term = "high" }"#, r#"term = "severe" }"#);
        let err = SystemDefinition::from_toml(&bad).unwrap().build().unwrap_err();
        assert!(matches!(err, DefinitionError::UnknownTerm { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            SystemDefinition::from_toml("[[variable]]\nname = 3"),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
