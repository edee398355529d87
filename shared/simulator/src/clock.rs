use serde::{Deserialize, Serialize};

/// Length of one phase cycle in degrees. A multiple of 360 so every
/// oscillation driven by the phase wraps seamlessly.
pub const PHASE_SPAN: f64 = 720.0;

/// Linear phase that sweeps 0 → 720 every `period` seconds and restarts.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Clock {
    period: f64,
    elapsed: f64,
}

impl Clock {
    pub fn new(period: f64) -> Clock {
        Clock {
            period,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f64) -> f64 {
        if self.period > 0.0 {
            self.elapsed = (self.elapsed + dt).rem_euclid(self.period);
        }
        self.phase()
    }

    pub fn phase(&self) -> f64 {
        if self.period <= 0.0 {
            return 0.0;
        }
        self.elapsed / self.period * PHASE_SPAN
    }
}
