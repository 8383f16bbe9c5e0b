use num::Float;

/// Triangular membership: 0 at and beyond `a` and `c`, peak 1 at `b`.
///
/// The outer breakpoints are excluded, so `x == a` and `x == c` both
/// evaluate to exactly 0.
pub(crate) fn triangular<F: Float>(x: F, a: F, b: F, c: F) -> F {
    if x <= a || x >= c {
        return F::zero();
    }

    if x <= b {
        (x - a) / (b - a)
    } else {
        (c - x) / (c - b)
    }
}

/// Trapezoidal membership: 0 outside `[a, d]`, plateau 1 on `[b, c]`,
/// linear ramps on `[a, b]` and `[c, d]`.
pub(crate) fn trapezoidal<F: Float>(x: F, a: F, b: F, c: F, d: F) -> F {
    if x <= a || x >= d {
        return F::zero();
    }

    if x >= b && x <= c {
        return F::one();
    }

    if x < b {
        (x - a) / (b - a)
    } else {
        (d - x) / (d - c)
    }
}

/// Decreasing ramp: 1 for `x <= a`, 0 for `x >= b`, linear between.
pub(crate) fn decreasing_linear<F: Float>(x: F, a: F, b: F) -> F {
    if x <= a {
        return F::one();
    }

    if x >= b {
        return F::zero();
    }

    (b - x) / (b - a)
}

/// Increasing ramp: 0 for `x <= a`, 1 for `x >= b`, linear between.
pub(crate) fn increasing_linear<F: Float>(x: F, a: F, b: F) -> F {
    if x <= a {
        return F::zero();
    }

    if x >= b {
        return F::one();
    }

    (x - a) / (b - a)
}
