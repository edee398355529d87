//! Trajectory playback.
//!
//! Playback is linear in time and maps elapsed fraction to arc length, so
//! the creature covers the curve at constant speed. The heading follows the
//! curve's tangent.

use crate::bezier::PathMeasure;
use crate::geometry::heading_of;
use crate::planner::Plan;
use crate::pose::Pose;
use nalgebra::Point2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub fraction: f64,
    pub position: Point2<f64>,
    pub heading: f64,
}

impl Sample {
    /// Heading is the only pose field a trajectory drives.
    pub fn apply(&self, pose: &mut Pose) {
        pose.main_angle = self.heading;
    }
}

/// Position and tangent heading at `fraction` of the curve's arc length.
pub fn sample(measure: &PathMeasure, fraction: f64) -> Sample {
    let fraction = fraction.clamp(0.0, 1.0);
    let (position, tangent) = measure.pos_tan(measure.length() * fraction);
    Sample {
        fraction,
        position,
        heading: heading_of(tangent),
    }
}

#[derive(Clone, Debug)]
pub struct Motion {
    plan: Plan,
    measure: PathMeasure,
    duration: f64,
    elapsed: f64,
}

impl Motion {
    pub fn new(plan: Plan, duration: f64) -> Motion {
        Motion {
            plan,
            measure: PathMeasure::new(plan.trajectory),
            duration,
            elapsed: 0.0,
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn length(&self) -> f64 {
        self.measure.length()
    }

    pub fn fraction(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.fraction() >= 1.0
    }

    pub fn advance(&mut self, dt: f64) -> Sample {
        self.elapsed += dt;
        self.sample()
    }

    pub fn sample(&self) -> Sample {
        sample(&self.measure, self.fraction())
    }
}
