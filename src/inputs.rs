use std::collections::HashMap;

/// Crisp input values, keyed by input-variable name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrispInputs(HashMap<String, f64>);

impl CrispInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, variable: impl Into<String>, value: f64) {
        self.0.insert(variable.into(), value);
    }

    pub fn get(&self, variable: &str) -> Option<f64> {
        self.0.get(variable).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CrispInputs {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Per-call fuzzification result: variable name to (term name to degree).
///
/// Produced fresh by [`FuzzySystem::fuzzify`](crate::FuzzySystem::fuzzify)
/// and consumed by rule evaluation; it has no identity beyond the call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FuzzifiedInputs(HashMap<String, HashMap<String, f64>>);

impl FuzzifiedInputs {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity(capacity))
    }

    pub(crate) fn insert_variable(
        &mut self,
        variable: impl Into<String>,
        memberships: HashMap<String, f64>,
    ) {
        self.0.insert(variable.into(), memberships);
    }

    /// Membership degree of `term` for `variable`, if both were fuzzified.
    pub fn degree(&self, variable: &str, term: &str) -> Option<f64> {
        self.0.get(variable)?.get(term).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
