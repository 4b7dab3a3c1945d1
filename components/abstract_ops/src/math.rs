//! Mathematical helpers with the preconditions the specification's
//! notation assumes.
//!
//! The specification's `floor`, `abs`, `sign` and `min` operate on
//! mathematical values, never on NaN and (except for `abs` and `min`) never
//! on infinities. Passing one of those is a bug in the caller.

use crate::meta::assert;

/// `sign(x)`: -1 or +1. `x` must be finite and non-zero.
pub fn sign(x: f64) -> f64 {
    assert(x != 0.0, "sign of zero");
    assert(x.is_finite(), "sign of a non-finite value");
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// `floor(x)`. `x` must be finite.
pub fn floor(x: f64) -> f64 {
    assert(x.is_finite(), "floor of a non-finite value");
    x.floor()
}

/// `abs(x)`. `x` must not be NaN.
pub fn abs(x: f64) -> f64 {
    assert(!x.is_nan(), "abs of NaN");
    x.abs()
}

/// `min(x, y, ...)`. No argument may be NaN.
///
/// ```
/// use abstract_ops::math::min;
///
/// assert_eq!(min(&[3.0, -1.0, 2.0]), -1.0);
/// assert_eq!(min(&[]), f64::INFINITY);
/// ```
pub fn min(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |acc, &x| {
        assert(!x.is_nan(), "min of NaN");
        acc.min(x)
    })
}

/// `x modulo y`: the result has the sign of `y`.
pub fn modulo(x: f64, y: f64) -> f64 {
    assert(x.is_finite() && y.is_finite() && y != 0.0, "modulo of non-finite operands");
    let r = x % y;
    if r != 0.0 && (r < 0.0) != (y < 0.0) {
        r + y
    } else {
        r
    }
}
