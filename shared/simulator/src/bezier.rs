//! Cubic Bézier curves and arc-length lookup.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Samples used to flatten a curve for arc-length queries.
pub const MEASURE_SAMPLES: usize = 256;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct CubicBezier {
    pub start: Point2<f64>,
    pub control1: Point2<f64>,
    pub control2: Point2<f64>,
    pub end: Point2<f64>,
}

impl CubicBezier {
    pub fn point(&self, t: f64) -> Point2<f64> {
        let u = 1.0 - t;
        let v = self.start.coords * (u * u * u)
            + self.control1.coords * (3.0 * u * u * t)
            + self.control2.coords * (3.0 * u * t * t)
            + self.end.coords * (t * t * t);
        Point2::from(v)
    }

    pub fn derivative(&self, t: f64) -> Vector2<f64> {
        let u = 1.0 - t;
        (self.control1 - self.start) * (3.0 * u * u)
            + (self.control2 - self.control1) * (6.0 * u * t)
            + (self.end - self.control2) * (3.0 * t * t)
    }
}

/// Arc-length parameterization of a curve, flattened into a polyline.
#[derive(Clone, Debug)]
pub struct PathMeasure {
    curve: CubicBezier,
    // Cumulative length at t = i / MEASURE_SAMPLES.
    lengths: Vec<f64>,
}

impl PathMeasure {
    pub fn new(curve: CubicBezier) -> PathMeasure {
        let mut lengths = Vec::with_capacity(MEASURE_SAMPLES + 1);
        let mut total = 0.0;
        let mut prev = curve.start;
        lengths.push(0.0);
        for i in 1..=MEASURE_SAMPLES {
            let p = curve.point(i as f64 / MEASURE_SAMPLES as f64);
            total += nalgebra::distance(&prev, &p);
            lengths.push(total);
            prev = p;
        }
        PathMeasure { curve, lengths }
    }

    pub fn length(&self) -> f64 {
        self.lengths[MEASURE_SAMPLES]
    }

    /// Curve parameter at `distance` along the curve, clamped to the ends.
    pub fn parameter_at(&self, distance: f64) -> f64 {
        let total = self.length();
        if total <= 0.0 || distance <= 0.0 {
            return 0.0;
        }
        if distance >= total {
            return 1.0;
        }
        let i = self.lengths.partition_point(|&l| l < distance).max(1);
        let (l0, l1) = (self.lengths[i - 1], self.lengths[i]);
        let frac = if l1 > l0 {
            (distance - l0) / (l1 - l0)
        } else {
            0.0
        };
        (i as f64 - 1.0 + frac) / MEASURE_SAMPLES as f64
    }

    /// Position and unit tangent at `distance` along the curve.
    pub fn pos_tan(&self, distance: f64) -> (Point2<f64>, Vector2<f64>) {
        let t = self.parameter_at(distance);
        (self.curve.point(t), self.tangent_at(t))
    }

    fn tangent_at(&self, t: f64) -> Vector2<f64> {
        let d = self.curve.derivative(t);
        if let Some(unit) = d.try_normalize(1e-12) {
            return unit;
        }
        // Coincident control points stall the derivative at an end; use the
        // chord of the neighboring sample instead.
        let step = 1.0 / MEASURE_SAMPLES as f64;
        let (a, b) = if t + step <= 1.0 {
            (self.curve.point(t), self.curve.point(t + step))
        } else {
            (self.curve.point(t - step), self.curve.point(t))
        };
        (b - a).try_normalize(1e-12).unwrap_or_else(Vector2::x)
    }
}
