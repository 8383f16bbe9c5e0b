use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};
use crate::shape::Shape;

/// A named quantity described by a set of named fuzzy terms.
///
/// Variables are built once during configuration and stay immutable while
/// inference runs. Terms keep registration order, which only matters for
/// trace output; membership itself is a pure per-term lookup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinguisticVariable {
    name: String,
    terms: IndexMap<String, Shape>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a term. Re-registering an existing name silently replaces
    /// its shape (last write wins); treat duplicates as a setup bug rather
    /// than relying on the overwrite.
    pub fn add_term(&mut self, term: impl Into<String>, shape: Shape) {
        self.terms.insert(term.into(), shape);
    }

    /// Builder-style variant of [`add_term`](Self::add_term).
    pub fn with_term(mut self, term: impl Into<String>, shape: Shape) -> Self {
        self.add_term(term, shape);
        self
    }

    /// Degree of membership of `value` in `term`.
    ///
    /// This is the one hard failure in the engine: asking for a term that
    /// was never registered is a configuration mistake, not a data
    /// condition, and surfaces as [`FuzzyError::UnknownTerm`].
    pub fn membership(&self, term: &str, value: f64) -> Result<f64> {
        let shape = self.terms.get(term).ok_or_else(|| FuzzyError::UnknownTerm {
            variable: self.name.clone(),
            term: term.to_owned(),
        })?;

        Ok(shape.evaluate(value))
    }

    /// Terms in registration order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &Shape)> {
        self.terms.iter().map(|(name, shape)| (name.as_str(), shape))
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }
}
