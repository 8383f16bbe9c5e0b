use tracing::debug;

use crate::error::Result;
use crate::linspace::Linspace;
use crate::outputs::OutputActivations;
use crate::variable::LinguisticVariable;

/// Default number of integration steps, giving `DEFAULT_SAMPLES + 1`
/// sample points over the output domain.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Centroid-of-area defuzzifier.
///
/// Approximates `∫x·μ(x)dx / ∫μ(x)dx` over the output domain with a
/// left-to-right Riemann sum on a fixed grid. The aggregated membership
/// `μ(x)` is the standard Mamdani implication-then-aggregation: each active
/// output term's set is clipped at its activation degree, and the
/// aggregate is the pointwise MAX over the clipped sets.
#[derive(Clone, Copy, Debug)]
pub struct CentroidDefuzzifier {
    samples: usize,
}

impl Default for CentroidDefuzzifier {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES)
    }
}

impl CentroidDefuzzifier {
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// Crisp centroid of the aggregated output set over `[min, max]`.
    ///
    /// Returns exactly 0 when the denominator is 0, i.e. when no rule
    /// fired or no active term has support inside the domain; that is the
    /// defined rest-state fallback, not an error. The only failure mode is
    /// an activation entry naming a term the output variable never
    /// registered.
    pub fn defuzzify(
        &self,
        output: &LinguisticVariable,
        activations: &OutputActivations,
        min: f64,
        max: f64,
    ) -> Result<f64> {
        let step = (max - min) / self.samples as f64;
        let mut numerator = 0.;
        let mut denominator = 0.;

        for x in Linspace::new(min, max, self.samples + 1) {
            let mu = self.aggregated_membership(output, activations, x)?;

            numerator += x * mu * step;
            denominator += mu * step;
        }

        let crisp = if denominator == 0. {
            0.
        } else {
            numerator / denominator
        };

        debug!(
            output = output.name(),
            numerator, denominator, crisp, "centroid defuzzification"
        );

        Ok(crisp)
    }

    /// Aggregated membership at a single point: MAX over active terms of
    /// `min(activation, term membership)`.
    fn aggregated_membership(
        &self,
        output: &LinguisticVariable,
        activations: &OutputActivations,
        x: f64,
    ) -> Result<f64> {
        let mut max_mu = 0.;

        for (term, activation) in activations.iter() {
            let mu = output.membership(term, x)?;
            max_mu = f64::max(max_mu, f64::min(activation, mu));
        }

        Ok(max_mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuzzyError;
    use crate::shape::Shape;
    use approx::assert_relative_eq;

    fn fan_speed() -> LinguisticVariable {
        LinguisticVariable::new("fan_speed")
            .with_term("off", Shape::decreasing_linear(0., 30.).unwrap())
            .with_term("medium", Shape::triangular(20., 50., 80.).unwrap())
            .with_term("max", Shape::increasing_linear(70., 100.).unwrap())
    }

    #[test]
    fn empty_activation_map_falls_back_to_zero() {
        let defuzz = CentroidDefuzzifier::default();
        let crisp = defuzz
            .defuzzify(&fan_speed(), &OutputActivations::new(), 0., 100.)
            .unwrap();

        assert_eq!(crisp, 0.);
    }

    #[test]
    fn symmetric_clipped_triangle_centers_on_its_peak() {
        let mut activations = OutputActivations::new();
        activations.merge_max("medium", 1. / 3.);

        let defuzz = CentroidDefuzzifier::default();
        let crisp = defuzz.defuzzify(&fan_speed(), &activations, 0., 100.).unwrap();

        // triangular(20, 50, 80) clipped at 1/3 stays symmetric about 50
        assert_relative_eq!(crisp, 50., epsilon = 1e-6);
    }

    #[test]
    fn aggregation_clips_each_term_at_its_activation() {
        let mut activations = OutputActivations::new();
        activations.merge_max("medium", 0.5);
        activations.merge_max("max", 0.25);

        let defuzz = CentroidDefuzzifier::default();
        let var = fan_speed();

        // At the medium peak the clip dominates the raw membership of 1
        assert_eq!(
            defuzz.aggregated_membership(&var, &activations, 50.).unwrap(),
            0.5
        );
        // At 100 only the max ramp contributes, clipped to 0.25
        assert_eq!(
            defuzz.aggregated_membership(&var, &activations, 100.).unwrap(),
            0.25
        );
    }

    #[test]
    fn pulling_activation_toward_max_raises_the_centroid() {
        let defuzz = CentroidDefuzzifier::default();
        let var = fan_speed();

        let mut medium_only = OutputActivations::new();
        medium_only.merge_max("medium", 0.6);
        let base = defuzz.defuzzify(&var, &medium_only, 0., 100.).unwrap();

        let mut with_max = OutputActivations::new();
        with_max.merge_max("medium", 0.6);
        with_max.merge_max("max", 0.8);
        let raised = defuzz.defuzzify(&var, &with_max, 0., 100.).unwrap();

        assert!(raised > base);
    }

    #[test]
    fn unknown_consequent_term_surfaces_a_configuration_error() {
        let mut activations = OutputActivations::new();
        activations.merge_max("turbo", 0.5);

        let defuzz = CentroidDefuzzifier::default();

        assert_eq!(
            defuzz.defuzzify(&fan_speed(), &activations, 0., 100.),
            Err(FuzzyError::UnknownTerm {
                variable: "fan_speed".into(),
                term: "turbo".into(),
            })
        );
    }

    #[test]
    fn degenerate_domain_returns_the_fallback() {
        let mut activations = OutputActivations::new();
        activations.merge_max("medium", 1.);

        let defuzz = CentroidDefuzzifier::default();
        // step is 0, so both integrals stay 0 and the fallback applies
        let crisp = defuzz.defuzzify(&fan_speed(), &activations, 50., 50.).unwrap();

        assert_eq!(crisp, 0.);
    }
}
