use std::collections::HashMap;

/// Aggregated rule conclusions: output term name to activation degree.
///
/// A term is present only if at least one rule concluding it fired with
/// activation > 0; the stored value is the maximum firing strength across
/// those rules (OR-aggregation via MAX). Callers that need to distinguish
/// "no rule fired" from a computed 0 should check [`is_empty`](Self::is_empty).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutputActivations(HashMap<String, f64>);

impl OutputActivations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a rule conclusion, keeping the larger activation if the term
    /// is already present.
    pub(crate) fn merge_max(&mut self, term: impl Into<String>, activation: f64) {
        let entry = self.0.entry(term.into()).or_insert(activation);
        *entry = entry.max(activation);
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.0.get(term).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(term, degree)| (term.as_str(), *degree))
    }
}
