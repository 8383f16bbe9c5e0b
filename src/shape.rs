use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};
use crate::math;

/// A membership function as tagged configuration data.
///
/// Shapes are plain breakpoint records rather than closures so that a
/// variable/term definition is serializable and testable in isolation.
/// The checked constructors enforce the breakpoint ordering at setup time;
/// evaluation itself never fails, out-of-range inputs saturate to 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// 0 at and beyond `a` and `c`, peak 1 at `b`. Requires `a <= b <= c`.
    Triangular { a: f64, b: f64, c: f64 },
    /// 0 outside `[a, d]`, plateau 1 on `[b, c]`. Requires `a <= b <= c <= d`.
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    /// 0 for `x <= a`, 1 for `x >= b`. Requires `a < b`.
    IncreasingLinear { a: f64, b: f64 },
    /// 1 for `x <= a`, 0 for `x >= b`. Requires `a < b`.
    DecreasingLinear { a: f64, b: f64 },
}

impl Shape {
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a <= b && b <= c) {
            return Err(FuzzyError::InvalidShape {
                shape: "triangular",
                reason: "breakpoints must satisfy a <= b <= c",
            });
        }

        Ok(Self::Triangular { a, b, c })
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        if !(a <= b && b <= c && c <= d) {
            return Err(FuzzyError::InvalidShape {
                shape: "trapezoidal",
                reason: "breakpoints must satisfy a <= b <= c <= d",
            });
        }

        Ok(Self::Trapezoidal { a, b, c, d })
    }

    pub fn increasing_linear(a: f64, b: f64) -> Result<Self> {
        if !(a < b) {
            return Err(FuzzyError::InvalidShape {
                shape: "increasing_linear",
                reason: "breakpoints must satisfy a < b",
            });
        }

        Ok(Self::IncreasingLinear { a, b })
    }

    pub fn decreasing_linear(a: f64, b: f64) -> Result<Self> {
        if !(a < b) {
            return Err(FuzzyError::InvalidShape {
                shape: "decreasing_linear",
                reason: "breakpoints must satisfy a < b",
            });
        }

        Ok(Self::DecreasingLinear { a, b })
    }

    /// Degree of membership of `x`, always in `[0, 1]`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => math::triangular(x, a, b, c),
            Self::Trapezoidal { a, b, c, d } => math::trapezoidal(x, a, b, c, d),
            Self::IncreasingLinear { a, b } => math::increasing_linear(x, a, b),
            Self::DecreasingLinear { a, b } => math::decreasing_linear(x, a, b),
        }
    }
}
