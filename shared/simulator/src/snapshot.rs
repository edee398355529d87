use crate::bezier::CubicBezier;
use crate::pose::Pose;
use crate::shape::Primitive;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Everything the host needs to draw one frame.
///
/// Primitives are in the local frame: a square of side `box_size` whose
/// top-left corner sits at `origin` in tank coordinates.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Snapshot {
    pub tick: u32,
    pub time: f64,
    pub phase: f64,
    pub pose: Pose,
    /// Body center in tank coordinates.
    pub position: Point2<f64>,
    pub origin: Point2<f64>,
    pub box_size: f64,
    pub motion: Option<MotionSnapshot>,
    pub primitives: Vec<Primitive>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MotionSnapshot {
    pub trajectory: CubicBezier,
    pub turn_angle: f64,
    pub fraction: f64,
    /// Tangent heading; already baked into the primitives.
    pub heading: f64,
}
