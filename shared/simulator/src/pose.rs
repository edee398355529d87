use serde::{Deserialize, Serialize};

pub const IDLE_SWIM_FREQUENCY: f64 = 1.0;
pub const MOVING_SWIM_FREQUENCY: f64 = 3.0;

/// Animation parameters read by the skeleton every frame.
///
/// `fin_amplitude` must stay within [0, 2·HEAD_RADIUS]; nothing here clamps it.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Pose {
    /// Heading in degrees, unbounded.
    pub main_angle: f64,
    pub swim_frequency: f64,
    pub fin_amplitude: f64,
}

impl Pose {
    pub fn new(main_angle: f64) -> Pose {
        Pose {
            main_angle,
            swim_frequency: IDLE_SWIM_FREQUENCY,
            fin_amplitude: 0.0,
        }
    }
}

impl Default for Pose {
    fn default() -> Pose {
        Pose::new(90.0)
    }
}

/// A pose scalar that an animation job may drive.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Debug)]
pub enum PoseField {
    MainAngle,
    SwimFrequency,
    FinAmplitude,
}

impl PoseField {
    pub fn get(self, pose: &Pose) -> f64 {
        match self {
            PoseField::MainAngle => pose.main_angle,
            PoseField::SwimFrequency => pose.swim_frequency,
            PoseField::FinAmplitude => pose.fin_amplitude,
        }
    }

    pub fn set(self, pose: &mut Pose, value: f64) {
        match self {
            PoseField::MainAngle => pose.main_angle = value,
            PoseField::SwimFrequency => pose.swim_frequency = value,
            PoseField::FinAmplitude => pose.fin_amplitude = value,
        }
    }
}
