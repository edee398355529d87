//! Body proportions. Every length is a fixed multiple of `HEAD_RADIUS`.

use nalgebra::{point, Point2};

pub const HEAD_RADIUS: f64 = 50.0;

/// Side of the square the host reserves for drawing, in head radii.
pub const SIZE_MULTIPLE: f64 = 8.38;
pub const BOX_SIZE: f64 = SIZE_MULTIPLE * HEAD_RADIUS;

/// Head center to tail-end big circle center.
pub const BODY_LENGTH: f64 = 3.2 * HEAD_RADIUS;

/// Head center to fin base.
pub const FIN_BASE_DISTANCE: f64 = 0.9 * HEAD_RADIUS;
pub const FIN_LENGTH: f64 = 1.3 * HEAD_RADIUS;

pub const BIG_CIRCLE_RADIUS: f64 = 0.7 * HEAD_RADIUS;
pub const MIDDLE_CIRCLE_RADIUS: f64 = 0.6 * BIG_CIRCLE_RADIUS;
pub const SMALL_CIRCLE_RADIUS: f64 = 0.4 * MIDDLE_CIRCLE_RADIUS;

pub const BIG_MIDDLE_DISTANCE: f64 = BIG_CIRCLE_RADIUS + MIDDLE_CIRCLE_RADIUS;
pub const MIDDLE_SMALL_DISTANCE: f64 = MIDDLE_CIRCLE_RADIUS * (0.4 + 2.7);

/// Tail apex to the midpoint of the opposite edge.
pub const TRIANGLE_LENGTH: f64 = MIDDLE_CIRCLE_RADIUS * 2.7;

/// Distance from the body center to the second trajectory control point.
pub const TURN_CONTROL_DISTANCE: f64 = 1.6 * HEAD_RADIUS;

/// Peak of the fin flap tween.
pub const MAX_FIN_AMPLITUDE: f64 = 2.0 * HEAD_RADIUS;

/// Body center in the local drawing frame.
pub fn local_center() -> Point2<f64> {
    point![BOX_SIZE / 2.0, BOX_SIZE / 2.0]
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_log::test;

    #[test]
    fn test_ratios() {
        let r = HEAD_RADIUS;
        assert_abs_diff_eq!(BODY_LENGTH / r, 3.2, epsilon = 1e-12);
        assert_abs_diff_eq!(MIDDLE_CIRCLE_RADIUS / r, 0.42, epsilon = 1e-12);
        assert_abs_diff_eq!(SMALL_CIRCLE_RADIUS / r, 0.168, epsilon = 1e-12);
        assert_abs_diff_eq!(local_center().x, 209.5, epsilon = 1e-9);
        assert_abs_diff_eq!(local_center().y, 209.5, epsilon = 1e-9);
    }
}
