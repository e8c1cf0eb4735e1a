//! Range reduction helpers used throughout the algorithm.
//!
//! These mirror the reference implementation exactly, including the single
//! (non-iterative) correction steps. Rise/set interpolation near date
//! boundaries depends on this wrap behaviour, so they must not be replaced by
//! a plain `rem_euclid`.

#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Reduces an angle in degrees to `[0, 360)`.
///
/// ```
/// use solar_angles::math::limit_degrees;
/// assert!((limit_degrees(370.0) - 10.0).abs() < 1e-9);
/// assert_eq!(limit_degrees(-90.0), 270.0);
/// ```
pub fn limit_degrees(degrees: f64) -> f64 {
    let degrees = degrees / 360.0;
    let mut limited = 360.0 * (degrees - degrees.floor());
    if limited < 0.0 {
        limited += 360.0;
    }
    limited
}

/// Reduces an angle in degrees to `(-180, 180]`.
pub fn limit_degrees180pm(degrees: f64) -> f64 {
    let degrees = degrees / 360.0;
    let mut limited = 360.0 * (degrees - degrees.floor());
    if limited < -180.0 {
        limited += 360.0;
    } else if limited > 180.0 {
        limited -= 360.0;
    }
    limited
}

/// Reduces an angle in degrees to `[0, 180)`.
pub fn limit_degrees180(degrees: f64) -> f64 {
    let degrees = degrees / 180.0;
    let mut limited = 180.0 * (degrees - degrees.floor());
    if limited < 0.0 {
        limited += 180.0;
    }
    limited
}

/// Fractional part of `value`, in `[0, 1)`.
pub fn limit_zero2one(value: f64) -> f64 {
    let mut limited = value - value.floor();
    if limited < 0.0 {
        limited += 1.0;
    }
    limited
}

/// Folds a minute offset that is off by roughly one day back next to zero.
///
/// Values below -20 gain 1440 minutes, values above 20 lose 1440 minutes.
/// Only one correction is applied.
pub fn limit_minutes(minutes: f64) -> f64 {
    let mut limited = minutes;
    if limited < -20.0 {
        limited += 1440.0;
    } else if limited > 20.0 {
        limited -= 1440.0;
    }
    limited
}

/// `a·x³ + b·x² + c·x + d`, evaluated in Horner form.
pub fn third_order_polynomial(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
    ((a * x + b) * x + c) * x + d
}

/// Evaluates a polynomial whose coefficients are ordered from the constant
/// term upwards: `[a₀, a₁, a₂, ...]`.
pub(crate) fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    let Some((&last, rest)) = coefficients.split_last() else {
        return 0.0;
    };
    rest.iter().rev().fold(last, |acc, &coefficient| coefficient + x * acc)
}
