//! Curved paths from the body center toward a target point.

use crate::bezier::CubicBezier;
use crate::fish::TURN_CONTROL_DISTANCE;
use crate::geometry::{offset_point, signed_angle};
use nalgebra::{vector, Point2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Plan {
    pub trajectory: CubicBezier,
    /// Signed angle from the current heading ray to the target ray, degrees.
    /// Positive turns counter-clockwise on screen.
    pub turn_angle: f64,
}

/// Plans a path from body center `o`, leaving toward head center `a`, that
/// ends at `target`.
///
/// The second control point sits on the bisector of the turn, a fixed
/// distance from `o`.
pub fn plan(o: Point2<f64>, a: Point2<f64>, target: Point2<f64>) -> Plan {
    let turn_angle = signed_angle(o, a, target);
    let heading = signed_angle(o, o + vector![1.0, 0.0], a);
    let control2 = offset_point(o, TURN_CONTROL_DISTANCE, turn_angle / 2.0 + heading);
    log::debug!(
        "plan from {:?} to {:?}: turn {:.1}, heading {:.1}",
        o,
        target,
        turn_angle,
        heading
    );
    Plan {
        trajectory: CubicBezier {
            start: o,
            control1: a,
            control2,
            end: target,
        },
        turn_angle,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{angle_difference, heading_of};
    use approx::assert_abs_diff_eq;
    use nalgebra::{distance, point};
    use test_log::test;

    #[test]
    fn test_straight_ahead() {
        let o = point![0.0, 0.0];
        let a = point![80.0, 0.0];
        let p = plan(o, a, point![300.0, 0.0]);
        assert_eq!(p.turn_angle, 0.0);
        assert_abs_diff_eq!(
            p.trajectory.control2.x,
            TURN_CONTROL_DISTANCE,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(p.trajectory.control2.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_behind() {
        let o = point![0.0, 0.0];
        let a = point![0.0, -80.0];
        let p = plan(o, a, point![0.0, 200.0]);
        assert_eq!(p.turn_angle, 180.0);
        // Heading up, half turn of 90 puts the control point on the left.
        assert_abs_diff_eq!(
            p.trajectory.control2.x,
            -TURN_CONTROL_DISTANCE,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sides_mirror() {
        let o = point![100.0, 100.0];
        let a = point![100.0, 20.0];
        let left = plan(o, a, point![20.0, 50.0]);
        let right = plan(o, a, point![180.0, 50.0]);
        assert!(left.turn_angle > 0.0);
        assert_abs_diff_eq!(left.turn_angle, -right.turn_angle, epsilon = 1e-9);
        assert_abs_diff_eq!(
            left.trajectory.control2.x - o.x,
            o.x - right.trajectory.control2.x,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_control_on_bisector() {
        let o = point![10.0, -5.0];
        let a = point![70.0, 35.0];
        let target = point![-120.0, 90.0];
        let p = plan(o, a, target);
        let c = p.trajectory.control2;
        assert_abs_diff_eq!(distance(&o, &c), TURN_CONTROL_DISTANCE, epsilon = 1e-9);
        let to_a = heading_of(a - o);
        let to_c = heading_of(c - o);
        assert_abs_diff_eq!(
            angle_difference(to_c, to_a),
            p.turn_angle / 2.0,
            epsilon = 1e-7
        );
    }

    #[test]
    fn test_target_at_center() {
        let o = point![209.5, 209.5];
        let a = point![209.5, 129.5];
        let p = plan(o, a, o);
        assert_eq!(p.turn_angle, 0.0);
        assert!(p.trajectory.control2.x.is_finite());
        assert!(p.trajectory.control2.y.is_finite());
    }
}
