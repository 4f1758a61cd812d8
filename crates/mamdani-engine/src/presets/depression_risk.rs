//! Depression-risk screening system.
//!
//! Four self-reported inputs (mood, energy, social activity on 0..10; appetite
//! change on -5..5) and one output, `risk` on 0..100, driven by nine rules.
//! Educational only; not a diagnostic tool.

use std::fmt;

use mamdani_core::errors::{DefinitionError, InferenceError};
use mamdani_core::Universe;
use serde::Serialize;

use crate::inference::CrispInputs;
use crate::membership::MembershipShape;
use crate::registry::RegistryBuilder;
use crate::rules::RuleBaseBuilder;
use crate::system::FuzzySystem;

pub const MOOD: &str = "mood";
pub const ENERGY: &str = "energy";
pub const APPETITE: &str = "appetite";
pub const SOCIAL: &str = "social";
pub const RISK: &str = "risk";

/// Build the nine-rule depression-risk system.
pub fn depression_risk_system() -> Result<FuzzySystem, DefinitionError> {
    let tri = MembershipShape::triangular;
    let mut builder = RegistryBuilder::new();

    for name in [MOOD, ENERGY, SOCIAL] {
        let handle = builder.define_input(name, Universe::new(0.0, 10.0, 1.0)?)?;
        builder.add_term(handle, "low", tri(0.0, 0.0, 5.0)?)?;
        builder.add_term(handle, "medium", tri(3.0, 5.0, 7.0)?)?;
        builder.add_term(handle, "high", tri(5.0, 10.0, 10.0)?)?;
    }

    let appetite = builder.define_input(APPETITE, Universe::new(-5.0, 5.0, 1.0)?)?;
    builder.add_term(appetite, "decreased", tri(-5.0, -5.0, 0.0)?)?;
    builder.add_term(appetite, "normal", tri(-2.0, 0.0, 2.0)?)?;
    builder.add_term(appetite, "increased", tri(0.0, 5.0, 5.0)?)?;

    let risk = builder.define_output(RISK, Universe::new(0.0, 100.0, 1.0)?)?;
    builder.add_term(risk, "low", tri(0.0, 0.0, 40.0)?)?;
    builder.add_term(risk, "medium", tri(30.0, 50.0, 70.0)?)?;
    builder.add_term(risk, "high", tri(60.0, 100.0, 100.0)?)?;

    let registry = builder.build()?;
    let mut rules = RuleBaseBuilder::new(&registry);

    rules.add_rule([(MOOD, "low"), (ENERGY, "low"), (SOCIAL, "low")], (RISK, "high"))?;
    rules.add_rule([(MOOD, "low"), (ENERGY, "low"), (APPETITE, "decreased")], (RISK, "high"))?;
    rules.add_rule([(MOOD, "medium"), (ENERGY, "medium"), (SOCIAL, "medium")], (RISK, "medium"))?;
    rules.add_rule([(MOOD, "high"), (ENERGY, "high"), (SOCIAL, "high")], (RISK, "low"))?;
    rules.add_rule([(MOOD, "low"), (SOCIAL, "low")], (RISK, "high"))?;
    rules.add_rule([(ENERGY, "low"), (APPETITE, "decreased")], (RISK, "high"))?;
    rules.add_rule([(MOOD, "medium"), (ENERGY, "medium"), (APPETITE, "normal")], (RISK, "medium"))?;
    rules.add_rule([(SOCIAL, "medium"), (APPETITE, "normal"), (MOOD, "medium")], (RISK, "medium"))?;
    rules.add_rule([(MOOD, "high"), (ENERGY, "medium"), (SOCIAL, "medium")], (RISK, "low"))?;

    let rules = rules.build();
    Ok(FuzzySystem::from_parts(registry, rules))
}

/// Coarse classification of a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// `< 40` is low, `< 70` is medium, anything else is high.
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            Self::Low
        } else if score < 70.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub score: f64,
    pub band: RiskBand,
}

impl RiskAssessment {
    /// Evaluate `system` (normally [`depression_risk_system`]) and classify the score.
    pub fn assess(
        system: &FuzzySystem,
        inputs: &(impl CrispInputs + ?Sized),
    ) -> Result<Self, InferenceError> {
        let score = system.compute_output(inputs, RISK)?;
        Ok(Self {
            score,
            band: RiskBand::from_score(score),
        })
    }
}
