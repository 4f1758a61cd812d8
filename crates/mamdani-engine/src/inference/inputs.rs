use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only lookup of crisp input values by variable name.
pub trait CrispInputs {
    fn crisp(&self, variable: &str) -> Option<f64>;
}

impl<S: BuildHasher> CrispInputs for HashMap<String, f64, S> {
    fn crisp(&self, variable: &str) -> Option<f64> {
        self.get(variable).copied()
    }
}

impl<S: BuildHasher> CrispInputs for HashMap<&str, f64, S> {
    fn crisp(&self, variable: &str) -> Option<f64> {
        self.get(variable).copied()
    }
}

impl CrispInputs for BTreeMap<String, f64> {
    fn crisp(&self, variable: &str) -> Option<f64> {
        self.get(variable).copied()
    }
}

impl CrispInputs for [(&str, f64)] {
    fn crisp(&self, variable: &str) -> Option<f64> {
        self.iter()
            .find(|(name, _)| *name == variable)
            .map(|&(_, value)| value)
    }
}

impl<const N: usize> CrispInputs for [(&str, f64); N] {
    fn crisp(&self, variable: &str) -> Option<f64> {
        self.as_slice().crisp(variable)
    }
}

impl<T: CrispInputs + ?Sized> CrispInputs for &T {
    fn crisp(&self, variable: &str) -> Option<f64> {
        (**self).crisp(variable)
    }
}
