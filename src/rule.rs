use serde::{Deserialize, Serialize};

use crate::inputs::FuzzifiedInputs;

/// One `IF ... AND ... THEN ...` rule.
///
/// The antecedent is a non-empty conjunction of (variable, term) pairs,
/// combined via MIN; the consequent names a term of the single output
/// variable. Rules are built through [`FuzzyRule::when`] and are immutable
/// once added to a rule base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuzzyRule {
    antecedents: Vec<Antecedent>,
    consequent: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Antecedent {
    variable: String,
    term: String,
}

impl FuzzyRule {
    /// Starts a rule with its first antecedent, so every built rule has a
    /// non-empty conjunction.
    pub fn when(variable: impl Into<String>, term: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            antecedents: vec![Antecedent {
                variable: variable.into(),
                term: term.into(),
            }],
        }
    }

    pub fn consequent(&self) -> &str {
        &self.consequent
    }

    /// Antecedents as (variable, term) pairs, in rule order.
    pub fn antecedents(&self) -> impl Iterator<Item = (&str, &str)> {
        self.antecedents
            .iter()
            .map(|a| (a.variable.as_str(), a.term.as_str()))
    }

    /// Firing strength of the rule: the running MIN over all antecedent
    /// degrees. A variable or term absent from `inputs` means the required
    /// evidence is missing, so the rule does not apply and the strength is
    /// exactly 0 — never an error.
    pub fn evaluate(&self, inputs: &FuzzifiedInputs) -> f64 {
        let mut activation = 1.0_f64;

        for antecedent in &self.antecedents {
            let Some(degree) = inputs.degree(&antecedent.variable, &antecedent.term) else {
                return 0.;
            };

            activation = activation.min(degree);
        }

        activation
    }
}

/// Intermediate builder returned by [`FuzzyRule::when`].
pub struct RuleBuilder {
    antecedents: Vec<Antecedent>,
}

impl RuleBuilder {
    pub fn and(mut self, variable: impl Into<String>, term: impl Into<String>) -> Self {
        self.antecedents.push(Antecedent {
            variable: variable.into(),
            term: term.into(),
        });
        self
    }

    pub fn then(self, consequent: impl Into<String>) -> FuzzyRule {
        FuzzyRule {
            antecedents: self.antecedents,
            consequent: consequent.into(),
        }
    }
}
