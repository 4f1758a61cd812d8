use super::rule::Rule;

/// Ordered, immutable rules validated against one registry.
///
/// Rules are grouped implicitly by their consequent's output variable.
#[derive(Debug, Clone)]
pub struct RuleBase {
    pub(crate) registry_id: u64,
    pub(crate) rules: Vec<Rule>,
    /// Registry indices of input variables used by any antecedent, ascending.
    pub(crate) referenced_inputs: Vec<usize>,
}

impl RuleBase {
    /// Identity of the registry this rule base was validated against.
    pub fn registry_id(&self) -> u64 {
        self.registry_id
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules whose consequent targets `output`.
    pub fn rules_for<'a>(&'a self, output: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |r| r.consequent.variable == output)
    }
}
