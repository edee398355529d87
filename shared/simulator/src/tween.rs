//! Typed animation jobs driving pose fields.

use crate::config::FinFlapConfig;
use crate::fish::MAX_FIN_AMPLITUDE;
use crate::pose::{Pose, PoseField};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Easing {
    Linear,
    /// Slow at both ends, fastest in the middle.
    AccelerateDecelerate,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => 0.5 - 0.5 * (PI * t).cos(),
        }
    }
}

/// Interpolates a pose field through evenly spaced keyframes, optionally
/// restarting from the first keyframe `repeats` more times.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    field: PoseField,
    keyframes: Vec<f64>,
    duration: f64,
    repeats: u32,
    easing: Easing,
    elapsed: f64,
}

impl Tween {
    pub fn new(field: PoseField, from: f64, to: f64, duration: f64) -> Tween {
        Tween::keyframes(field, vec![from, to], duration)
    }

    /// An empty keyframe list leaves the field untouched.
    pub fn keyframes(field: PoseField, keyframes: Vec<f64>, duration: f64) -> Tween {
        Tween {
            field,
            keyframes,
            duration,
            repeats: 0,
            easing: Easing::Linear,
            elapsed: 0.0,
        }
    }

    pub fn with_repeats(mut self, repeats: u32) -> Tween {
        self.repeats = repeats;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Tween {
        self.easing = easing;
        self
    }

    pub fn field(&self) -> PoseField {
        self.field
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    pub fn total_duration(&self) -> f64 {
        self.duration * (self.repeats as f64 + 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_duration()
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
    }

    /// Progress through the current repetition, in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.is_finished() || self.duration <= 0.0 {
            return 1.0;
        }
        let local = self.elapsed.rem_euclid(self.duration);
        (local / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> Option<f64> {
        sample(&self.keyframes, self.easing.apply(self.fraction()))
    }

    pub fn apply(&self, pose: &mut Pose) {
        if let Some(value) = self.value() {
            self.field.set(pose, value);
        }
    }
}

fn sample(keyframes: &[f64], t: f64) -> Option<f64> {
    match keyframes {
        [] => None,
        [only] => Some(*only),
        _ => {
            let spans = keyframes.len() - 1;
            let scaled = t * spans as f64;
            let i = (scaled.floor() as usize).min(spans - 1);
            let local = scaled - i as f64;
            let (a, b) = (keyframes[i], keyframes[i + 1]);
            Some(a + (b - a) * local)
        }
    }
}

pub type TweenId = u64;

/// Runs tweens side by side. Each tick only the most recently started
/// running tween for a field writes that field; older ones keep their clocks
/// running until they finish.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    tweens: Vec<(TweenId, Tween)>,
    next_id: TweenId,
}

impl Animator {
    pub fn new() -> Animator {
        Default::default()
    }

    pub fn start(&mut self, tween: Tween) -> TweenId {
        let id = self.next_id;
        self.next_id += 1;
        self.tweens.push((id, tween));
        id
    }

    pub fn is_running(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|(i, _)| *i == id)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// The tween currently allowed to write `field`.
    pub fn driver(&self, field: PoseField) -> Option<TweenId> {
        self.tweens
            .iter()
            .rev()
            .find(|(_, t)| t.field() == field)
            .map(|(id, _)| *id)
    }

    pub fn tick(&mut self, dt: f64, pose: &mut Pose) {
        for (_, tween) in self.tweens.iter_mut() {
            tween.advance(dt);
        }

        let mut written: Vec<PoseField> = Vec::with_capacity(3);
        for (_, tween) in self.tweens.iter().rev() {
            if !written.contains(&tween.field()) {
                tween.apply(pose);
                written.push(tween.field());
            }
        }

        self.tweens.retain(|(id, tween)| {
            if tween.is_finished() {
                log::trace!("tween {} on {:?} finished", id, tween.field());
            }
            !tween.is_finished()
        });
    }
}

/// A fin flap `0 → 2R → 0` whose duration and repeat count are drawn from
/// `rng` within the bounds of `config`.
pub fn fin_flap<R: Rng>(config: &FinFlapConfig, rng: &mut R) -> Tween {
    let multiple = rng.gen_range(1..=config.max_duration_multiple.max(1));
    let repeats = rng.gen_range(0..=config.max_repeats);
    Tween::keyframes(
        PoseField::FinAmplitude,
        vec![0.0, MAX_FIN_AMPLITUDE, 0.0],
        config.base_duration * multiple as f64,
    )
    .with_repeats(repeats)
    .with_easing(Easing::AccelerateDecelerate)
}
