//! Per-frame anchor points for every body part.
//!
//! Everything here is a pure function of the pose, the clock phase and the
//! body center. Nothing is cached between frames.

use crate::fish::*;
use crate::geometry::offset_point;
use crate::pose::Pose;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Head sway around the main heading.
const HEAD_SWING: f64 = 10.0;
const FIN_BASE_ANGLE: f64 = 110.0;
const FIN_CONTROL_ANGLE: f64 = 110.0;
const FIN_CONTROL_SCALE: f64 = 1.8;
const FIRST_SEGMENT_SWING: f64 = 15.0;
const SECOND_SEGMENT_SWING: f64 = 25.0;
const TAIL_SWING: f64 = 25.0;
const SWING_SPEED: f64 = 1.5;
const INNER_TRIANGLE_INSET: f64 = 10.0;
const INNER_TRIANGLE_NARROWING: f64 = 20.0;
const BODY_CONTROL_SCALE: f64 = 0.56;
const BODY_CONTROL_ANGLE: f64 = 130.0;

#[derive(Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// +1 for left, -1 for right: left is counter-clockwise of the heading.
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fin {
    pub side: Side,
    pub base: Point2<f64>,
    pub control: Point2<f64>,
    pub tip: Point2<f64>,
}

/// Two circles joined by the quadrilateral spanning their diameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub angle: f64,
    pub big_center: Point2<f64>,
    pub big_radius: f64,
    pub small_center: Point2<f64>,
    pub small_radius: f64,
    pub draws_big_circle: bool,
    /// Upper left, upper right, lower right, lower left. "Upper" is the
    /// diameter nearer the head.
    pub corners: [Point2<f64>; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub angle: f64,
    pub apex: Point2<f64>,
    pub edge_middle: Point2<f64>,
    pub left: Point2<f64>,
    pub right: Point2<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyOutline {
    pub upper_left: Point2<f64>,
    pub upper_right: Point2<f64>,
    pub lower_left: Point2<f64>,
    pub lower_right: Point2<f64>,
    pub control_left: Point2<f64>,
    pub control_right: Point2<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skeleton {
    /// Main heading plus head sway.
    pub heading: f64,
    pub body_center: Point2<f64>,
    pub head: Point2<f64>,
    pub head_radius: f64,
    pub fins: [Fin; 2],
    pub segments: [Segment; 2],
    /// Half length of the outer tail triangle's far edge.
    pub tail_edge: f64,
    pub tail: [Triangle; 2],
    pub body: BodyOutline,
}

impl Skeleton {
    /// Shared apex of the tail triangles: the middle circle's center, which
    /// keeps the tail inside the host's box, rather than the small circle.
    pub fn tail_anchor(&self) -> Point2<f64> {
        self.segments[0].small_center
    }

    pub fn big_circle_center(&self) -> Point2<f64> {
        self.segments[0].big_center
    }
}

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

pub fn head_heading(pose: &Pose, phase: f64) -> f64 {
    pose.main_angle + sin_deg(phase) * HEAD_SWING
}

/// Half a body length ahead of the body center, along the heading.
pub fn head_center(body_center: Point2<f64>, heading: f64) -> Point2<f64> {
    offset_point(body_center, BODY_LENGTH / 2.0, heading)
}

/// Half length of the outer tail edge. Pulses twice per swing and is never
/// negative.
pub fn tail_edge(phase: f64) -> f64 {
    (sin_deg(phase * SWING_SPEED) * BIG_CIRCLE_RADIUS).abs()
}

pub fn build(pose: &Pose, phase: f64, body_center: Point2<f64>) -> Skeleton {
    let heading = head_heading(pose, phase);
    let head = head_center(body_center, heading);

    let fins = [Side::Left, Side::Right].map(|side| {
        let base_angle = heading + side.sign() * FIN_BASE_ANGLE;
        let base = offset_point(head, FIN_BASE_DISTANCE, base_angle);
        fin(base, heading, pose.fin_amplitude, side)
    });

    let swing_phase = phase * pose.swim_frequency * SWING_SPEED;
    let big_center = offset_point(head, BODY_LENGTH, heading - 180.0);
    let first = segment(
        big_center,
        BIG_CIRCLE_RADIUS,
        MIDDLE_CIRCLE_RADIUS,
        BIG_MIDDLE_DISTANCE,
        heading + cos_deg(swing_phase) * FIRST_SEGMENT_SWING,
        true,
    );
    let second = segment(
        first.small_center,
        MIDDLE_CIRCLE_RADIUS,
        SMALL_CIRCLE_RADIUS,
        MIDDLE_SMALL_DISTANCE,
        heading + sin_deg(swing_phase) * SECOND_SEGMENT_SWING,
        false,
    );

    let edge = tail_edge(phase);
    let tail_angle = heading + sin_deg(swing_phase) * TAIL_SWING;
    let apex = first.small_center;
    let tail = [
        triangle(apex, TRIANGLE_LENGTH, edge, tail_angle),
        triangle(
            apex,
            TRIANGLE_LENGTH - INNER_TRIANGLE_INSET,
            edge - INNER_TRIANGLE_NARROWING,
            tail_angle,
        ),
    ];

    let body = body_outline(head, big_center, heading);

    Skeleton {
        heading,
        body_center,
        head,
        head_radius: HEAD_RADIUS,
        fins,
        segments: [first, second],
        tail_edge: edge,
        tail,
        body,
    }
}

fn fin(base: Point2<f64>, heading: f64, amplitude: f64, side: Side) -> Fin {
    let tip = offset_point(base, FIN_LENGTH, heading - 180.0);
    // The control point rides a perpendicular raised from a point behind the
    // base; a larger amplitude pulls it toward the body axis.
    let cross_length = FIN_LENGTH * FIN_CONTROL_SCALE * cos_deg(180.0 - FIN_CONTROL_ANGLE);
    let cross = offset_point(base, cross_length, heading - 180.0);
    let rest = (FIN_CONTROL_ANGLE.to_radians().tan() * cross_length).abs();
    let control = offset_point(cross, rest - amplitude, heading + side.sign() * 90.0);
    Fin {
        side,
        base,
        control,
        tip,
    }
}

fn segment(
    big_center: Point2<f64>,
    big_radius: f64,
    small_radius: f64,
    distance: f64,
    angle: f64,
    draws_big_circle: bool,
) -> Segment {
    let small_center = offset_point(big_center, distance, angle - 180.0);
    let corners = [
        offset_point(big_center, big_radius, angle + 90.0),
        offset_point(big_center, big_radius, angle - 90.0),
        offset_point(small_center, small_radius, angle - 90.0),
        offset_point(small_center, small_radius, angle + 90.0),
    ];
    Segment {
        angle,
        big_center,
        big_radius,
        small_center,
        small_radius,
        draws_big_circle,
        corners,
    }
}

fn triangle(apex: Point2<f64>, length: f64, edge: f64, angle: f64) -> Triangle {
    let edge_middle = offset_point(apex, length, angle - 180.0);
    Triangle {
        angle,
        apex,
        edge_middle,
        left: offset_point(edge_middle, edge, angle + 90.0),
        right: offset_point(edge_middle, edge, angle - 90.0),
    }
}

fn body_outline(head: Point2<f64>, big_center: Point2<f64>, heading: f64) -> BodyOutline {
    BodyOutline {
        upper_left: offset_point(head, HEAD_RADIUS, heading + 90.0),
        upper_right: offset_point(head, HEAD_RADIUS, heading - 90.0),
        lower_left: offset_point(big_center, BIG_CIRCLE_RADIUS, heading + 90.0),
        lower_right: offset_point(big_center, BIG_CIRCLE_RADIUS, heading - 90.0),
        control_left: offset_point(
            head,
            BODY_LENGTH * BODY_CONTROL_SCALE,
            heading + BODY_CONTROL_ANGLE,
        ),
        control_right: offset_point(
            head,
            BODY_LENGTH * BODY_CONTROL_SCALE,
            heading - BODY_CONTROL_ANGLE,
        ),
    }
}
