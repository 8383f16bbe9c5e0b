use thiserror::Error;

/// Configuration errors surfaced by the engine.
///
/// Every variant indicates a setup or caller-contract mistake; nothing here
/// is a transient runtime condition. Out-of-range crisp values never error,
/// they saturate inside the membership functions instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuzzyError {
    /// A rule consequent or membership lookup referenced a term that was
    /// never registered on the variable.
    #[error("unknown term `{term}` on variable `{variable}`")]
    UnknownTerm { variable: String, term: String },

    /// `fuzzify` was called without a crisp value for a registered input
    /// variable.
    #[error("missing crisp input for variable `{variable}`")]
    MissingInput { variable: String },

    /// Membership-function breakpoints violate their ordering constraint,
    /// e.g. a triangular shape with `a > b`.
    #[error("invalid {shape} shape: {reason}")]
    InvalidShape {
        shape: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
