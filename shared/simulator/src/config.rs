use serde::{Deserialize, Serialize};

/// Bounds for the randomized fin flap started with each motion.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct FinFlapConfig {
    /// Seconds for one `0 → peak → 0` sweep before scaling.
    pub base_duration: f64,
    /// The sweep lasts `base_duration` times a whole number in [1, this].
    pub max_duration_multiple: u32,
    /// Extra sweeps after the first, drawn from [0, this].
    pub max_repeats: u32,
}

impl Default for FinFlapConfig {
    fn default() -> Self {
        Self {
            base_duration: 0.5,
            max_duration_multiple: 2,
            max_repeats: 3,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds per step.
    pub tick_length: f64,
    /// Seconds for the clock phase to sweep 0 → 720.
    pub clock_period: f64,
    /// Seconds to swim one trajectory.
    pub motion_duration: f64,
    /// Heading in degrees before the first motion.
    pub initial_heading: f64,
    pub fin_flap: FinFlapConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_length: 1.0 / 60.0,
            clock_period: 2.0,
            motion_duration: 2.0,
            initial_heading: 90.0,
            fin_flap: FinFlapConfig::default(),
        }
    }
}
