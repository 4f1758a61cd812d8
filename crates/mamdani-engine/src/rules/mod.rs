//! Rule Base: AND-conjunction rules mapping input terms to an output term.

pub mod builder;
pub mod rule;
pub mod rule_base;

pub use builder::RuleBaseBuilder;
pub use rule::{Rule, RuleId};
pub use rule_base::RuleBase;
