//! Angle normalization in radians.
//!
//! NaN and infinite inputs propagate as NaN.

use std::f64::consts::{PI, TAU};

/// Map `angle` onto `[0, 2π)`.
///
/// Float `%` keeps the sign of the dividend, hence the second pass.
///
/// ```
/// use std::f64::consts::PI;
/// use grabbag_util::angle::normalize_angle_positive;
///
/// assert!((normalize_angle_positive(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// ```
pub fn normalize_angle_positive(angle: f64) -> f64 {
    ((angle % TAU) + TAU) % TAU
}

/// Map `angle` onto `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = normalize_angle_positive(angle);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`.
///
/// ```
/// use std::f64::consts::PI;
/// use grabbag_util::angle::shortest_angular_distance;
///
/// // A quarter turn backwards beats three quarters forwards
/// assert!((shortest_angular_distance(0.0, 3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// ```
pub fn shortest_angular_distance(from: f64, to: f64) -> f64 {
    let mut delta =
        normalize_angle_positive(normalize_angle_positive(to) - normalize_angle_positive(from));
    if delta > PI {
        delta = -(TAU - delta);
    }
    normalize_angle(delta)
}
