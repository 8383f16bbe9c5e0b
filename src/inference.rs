use std::collections::HashMap;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::defuzz::CentroidDefuzzifier;
use crate::error::{FuzzyError, Result};
use crate::inputs::{CrispInputs, FuzzifiedInputs};
use crate::outputs::OutputActivations;
use crate::rule::FuzzyRule;
use crate::variable::LinguisticVariable;

/// A complete Mamdani inference system: input variables, one output
/// variable, a rule base, and the output domain to defuzzify over.
///
/// Configure everything up front, then call [`evaluate`](Self::evaluate)
/// as often as needed; evaluation takes `&self` and touches no mutable
/// state, so concurrent calls against the same system are safe.
///
/// The intermediate stages [`fuzzify`](Self::fuzzify) and
/// [`activate_rules`](Self::activate_rules) are public so callers can
/// inspect membership degrees and the activation map — in particular to
/// tell "no rule fired" apart from a computed output of 0.
pub struct FuzzySystem {
    input_variables: Vec<LinguisticVariable>,
    output_variable: LinguisticVariable,
    rules: Vec<FuzzyRule>,
    output_range: RangeInclusive<f64>,
    defuzzifier: CentroidDefuzzifier,
}

impl FuzzySystem {
    pub fn new(output_variable: LinguisticVariable, output_range: RangeInclusive<f64>) -> Self {
        Self {
            input_variables: Vec::new(),
            output_variable,
            rules: Vec::new(),
            output_range,
            defuzzifier: CentroidDefuzzifier::default(),
        }
    }

    /// Overrides the default 1000-step defuzzifier.
    pub fn with_defuzzifier(mut self, defuzzifier: CentroidDefuzzifier) -> Self {
        self.defuzzifier = defuzzifier;
        self
    }

    pub fn add_input_variable(&mut self, variable: LinguisticVariable) {
        self.input_variables.push(variable);
    }

    pub fn add_rule(&mut self, rule: FuzzyRule) {
        self.rules.push(rule);
    }

    pub fn output_variable(&self) -> &LinguisticVariable {
        &self.output_variable
    }

    /// Converts crisp inputs to membership degrees for every registered
    /// term of every input variable.
    ///
    /// Fuzzification is deliberately independent of the rule base: all
    /// terms are evaluated, not just the ones rules mention. A missing
    /// crisp value for a registered variable is a caller contract
    /// violation and fails fast with [`FuzzyError::MissingInput`].
    pub fn fuzzify(&self, inputs: &CrispInputs) -> Result<FuzzifiedInputs> {
        let mut fuzzified = FuzzifiedInputs::with_capacity(self.input_variables.len());

        for variable in &self.input_variables {
            let value = inputs
                .get(variable.name())
                .ok_or_else(|| FuzzyError::MissingInput {
                    variable: variable.name().to_owned(),
                })?;

            let mut memberships = HashMap::new();

            for (term, shape) in variable.terms() {
                let degree = shape.evaluate(value);

                debug!(
                    variable = variable.name(),
                    term, value, degree, "fuzzified input"
                );
                memberships.insert(term.to_owned(), degree);
            }

            fuzzified.insert_variable(variable.name(), memberships);
        }

        Ok(fuzzified)
    }

    /// Evaluates every rule in rule-base order and aggregates firing
    /// strengths per consequent term via MAX. Rules with strength exactly
    /// 0 contribute nothing and are dropped.
    pub fn activate_rules(&self, fuzzified: &FuzzifiedInputs) -> OutputActivations {
        let mut activations = OutputActivations::new();

        for (index, rule) in self.rules.iter().enumerate() {
            let strength = rule.evaluate(fuzzified);

            debug!(
                rule = index,
                consequent = rule.consequent(),
                strength,
                "rule evaluated"
            );

            if strength > 0. {
                activations.merge_max(rule.consequent(), strength);
            }
        }

        activations
    }

    /// Full inference pass: fuzzify, activate the rule base, then
    /// defuzzify the aggregated output set over the configured domain.
    pub fn evaluate(&self, inputs: &CrispInputs) -> Result<f64> {
        let fuzzified = self.fuzzify(inputs)?;
        let activations = self.activate_rules(&fuzzified);

        self.defuzzifier.defuzzify(
            &self.output_variable,
            &activations,
            *self.output_range.start(),
            *self.output_range.end(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    fn two_term_system() -> FuzzySystem {
        let output = LinguisticVariable::new("power")
            .with_term("low", Shape::decreasing_linear(0., 50.).unwrap())
            .with_term("high", Shape::increasing_linear(50., 100.).unwrap());
        let input = LinguisticVariable::new("load")
            .with_term("light", Shape::decreasing_linear(0., 10.).unwrap())
            .with_term("heavy", Shape::increasing_linear(5., 15.).unwrap());

        let mut system = FuzzySystem::new(output, 0. ..=100.);
        system.add_input_variable(input);
        system
    }

    #[test]
    fn fuzzify_covers_every_registered_term() {
        let system = two_term_system();
        let inputs: CrispInputs = [("load", 7.5)].into_iter().collect();

        let fuzzified = system.fuzzify(&inputs).unwrap();

        assert_eq!(fuzzified.degree("load", "light"), Some(0.25));
        assert_eq!(fuzzified.degree("load", "heavy"), Some(0.25));
    }

    #[test]
    fn fuzzify_fails_fast_on_missing_input() {
        let system = two_term_system();
        let inputs: CrispInputs = [("pressure", 1.)].into_iter().collect();

        assert_eq!(
            system.fuzzify(&inputs),
            Err(FuzzyError::MissingInput {
                variable: "load".into(),
            })
        );
    }

    #[test]
    fn rules_agreeing_on_a_term_aggregate_via_max() {
        let mut system = two_term_system();
        system.add_rule(FuzzyRule::when("load", "light").then("low"));
        system.add_rule(FuzzyRule::when("load", "heavy").then("low"));

        // light = 0.3, heavy = 0.2, both rules fire on the same term
        let inputs: CrispInputs = [("load", 7.)].into_iter().collect();
        let fuzzified = system.fuzzify(&inputs).unwrap();
        let activations = system.activate_rules(&fuzzified);

        assert_eq!(activations.get("low"), Some(0.3));
        assert_eq!(activations.len(), 1);
    }

    #[test]
    fn zero_strength_rules_are_dropped_from_the_activation_map() {
        let mut system = two_term_system();
        system.add_rule(FuzzyRule::when("load", "heavy").then("high"));
        system.add_rule(FuzzyRule::when("load", "light").then("low"));

        // heavy saturates to 0 below its support
        let inputs: CrispInputs = [("load", 0.)].into_iter().collect();
        let fuzzified = system.fuzzify(&inputs).unwrap();
        let activations = system.activate_rules(&fuzzified);

        assert_eq!(activations.get("high"), None);
        assert_eq!(activations.get("low"), Some(1.));
    }

    #[test]
    fn no_firing_rules_yield_exactly_zero() {
        let mut system = two_term_system();
        system.add_rule(FuzzyRule::when("load", "absent-term").then("high"));

        let inputs: CrispInputs = [("load", 7.5)].into_iter().collect();

        assert_eq!(system.evaluate(&inputs).unwrap(), 0.);
    }

    #[test]
    fn evaluation_is_bit_identical_across_calls() {
        let mut system = two_term_system();
        system.add_rule(FuzzyRule::when("load", "light").then("low"));
        system.add_rule(FuzzyRule::when("load", "heavy").then("high"));

        let inputs: CrispInputs = [("load", 8.)].into_iter().collect();
        let first = system.evaluate(&inputs).unwrap();
        let second = system.evaluate(&inputs).unwrap();

        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn unknown_consequent_surfaces_from_evaluate() {
        let mut system = two_term_system();
        system.add_rule(FuzzyRule::when("load", "light").then("turbo"));

        let inputs: CrispInputs = [("load", 0.)].into_iter().collect();

        assert_eq!(
            system.evaluate(&inputs),
            Err(FuzzyError::UnknownTerm {
                variable: "power".into(),
                term: "turbo".into(),
            })
        );
    }
}
