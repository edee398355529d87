//! Screen-space trigonometry.
//!
//! Angles are degrees measured counter-clockwise from the positive x axis as
//! seen on screen. The y axis points down, so every conversion between an
//! angle and a displacement flips the sign of the vertical component.

use nalgebra::{point, Point2, Vector2};

/// Returns the point `length` away from `start` in direction `angle`.
///
/// Negative lengths and angles outside [0, 360) are accepted as-is.
pub fn offset_point(start: Point2<f64>, length: f64, angle: f64) -> Point2<f64> {
    let dx = angle.to_radians().cos() * length;
    let dy = (angle - 180.0).to_radians().sin() * length;
    point![start.x + dx, start.y + dy]
}

/// Screen heading of a displacement, in (-180, 180].
pub fn heading_of(v: Vector2<f64>) -> f64 {
    (-v.y).atan2(v.x).to_degrees()
}

/// Smallest signed difference `a - b`, in [-180, 180).
pub fn angle_difference(a: f64, b: f64) -> f64 {
    (a - b + 180.0).rem_euclid(360.0) - 180.0
}

/// Signed angle from ray `o→a` to ray `o→b`.
///
/// Positive when `b` lies counter-clockwise of `a` on screen. Collinear rays
/// give 0 when they point the same way and 180 when they point apart; a
/// zero-length ray counts as collinear and pointing the same way.
pub fn signed_angle(o: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
    let oa = a - o;
    let ob = b - o;
    let dot = oa.dot(&ob);
    // Perp-dot with y flipped back to the math convention.
    let cross = oa.y * ob.x - oa.x * ob.y;

    if cross == 0.0 {
        return if dot >= 0.0 { 0.0 } else { 180.0 };
    }

    let cos = (dot / (oa.norm() * ob.norm())).clamp(-1.0, 1.0);
    let magnitude = cos.acos().to_degrees();
    if cross > 0.0 {
        magnitude
    } else {
        -magnitude
    }
}
