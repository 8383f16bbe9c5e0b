//! Mamdani-style min/max fuzzy inference with centroid defuzzification.
//!
//! Crisp inputs are fuzzified against the named terms of each input
//! variable, a rule base is evaluated with MIN for conjunction and MAX for
//! aggregation, and the resulting output fuzzy set is collapsed to a crisp
//! value by centroid-of-area numeric integration.
//!
//! A system is configured once and is immutable afterwards; every
//! [`FuzzySystem::evaluate`] call is a pure computation, safe to run
//! concurrently against the same system. Diagnostic narration of
//! fuzzification degrees, rule firing strengths, and the defuzzification
//! integral is emitted as [`tracing`] events and never affects the result.
//!
//! # Example
//!
//! ```
//! use mamdani::{CrispInputs, FuzzyRule, FuzzySystem, LinguisticVariable, Shape};
//!
//! let fan = LinguisticVariable::new("fan_speed")
//!     .with_term("off", Shape::decreasing_linear(0.0, 30.0)?)
//!     .with_term("max", Shape::increasing_linear(70.0, 100.0)?);
//! let temperature = LinguisticVariable::new("temperature")
//!     .with_term("low", Shape::decreasing_linear(15.0, 22.0)?)
//!     .with_term("high", Shape::increasing_linear(28.0, 35.0)?);
//!
//! let mut system = FuzzySystem::new(fan, 0.0..=100.0);
//! system.add_input_variable(temperature);
//! system.add_rule(FuzzyRule::when("temperature", "high").then("max"));
//! system.add_rule(FuzzyRule::when("temperature", "low").then("off"));
//!
//! let inputs: CrispInputs = [("temperature", 31.5)].into_iter().collect();
//! let speed = system.evaluate(&inputs)?;
//! assert!(speed > 50.0 && speed < 100.0);
//! # Ok::<(), mamdani::FuzzyError>(())
//! ```

mod defuzz;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod outputs;
mod rule;
mod shape;
mod variable;

pub use defuzz::{CentroidDefuzzifier, DEFAULT_SAMPLES};
pub use error::{FuzzyError, Result};
pub use inference::FuzzySystem;
pub use inputs::{CrispInputs, FuzzifiedInputs};
pub use outputs::OutputActivations;
pub use rule::{FuzzyRule, RuleBuilder};
pub use shape::Shape;
pub use variable::LinguisticVariable;
