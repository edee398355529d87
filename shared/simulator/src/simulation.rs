use crate::clock::Clock;
use crate::config::SimulationConfig;
use crate::fish::{local_center, BOX_SIZE};
use crate::motion::Motion;
use crate::planner::{self, Plan};
use crate::pose::{Pose, IDLE_SWIM_FREQUENCY, MOVING_SWIM_FREQUENCY};
use crate::rng::{new_rng, SeededRng};
use crate::shape;
use crate::skeleton::{self, Skeleton};
use crate::snapshot::{MotionSnapshot, Snapshot};
use crate::tween::{self, Animator};
use nalgebra::Point2;

/// One fish in a tank, advanced in fixed steps.
///
/// Within a step every pose writer runs before anything reads the pose:
/// trajectory playback sets the heading, the animator sets the fins, and
/// only then does the clock move. Skeletons and snapshots taken between
/// steps therefore always see a complete pose.
pub struct Simulation {
    config: SimulationConfig,
    tick: u32,
    seed: u32,
    clock: Clock,
    pose: Pose,
    position: Point2<f64>,
    motion: Option<Motion>,
    animator: Animator,
    rng: SeededRng,
}

impl Simulation {
    pub fn new(seed: u32) -> Simulation {
        Simulation::with_config(SimulationConfig::default(), seed)
    }

    /// Starts with the body center in the middle of the drawing box placed at
    /// the tank origin, so tank and local coordinates coincide until the
    /// first motion.
    pub fn with_config(config: SimulationConfig, seed: u32) -> Simulation {
        log::info!("seed {seed}");
        Simulation {
            clock: Clock::new(config.clock_period),
            pose: Pose::new(config.initial_heading),
            position: local_center(),
            motion: None,
            animator: Animator::new(),
            rng: new_rng(seed),
            tick: 0,
            seed,
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn time(&self) -> f64 {
        self.tick as f64 * self.config.tick_length
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn phase(&self) -> f64 {
        self.clock.phase()
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Body center in tank coordinates.
    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    /// Top-left corner of the drawing box in tank coordinates.
    pub fn origin(&self) -> Point2<f64> {
        self.position - local_center().coords
    }

    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    pub fn fin_flap_count(&self) -> usize {
        self.animator.len()
    }

    /// Skeleton for the current pose in the local drawing frame.
    pub fn skeleton(&self) -> Skeleton {
        skeleton::build(&self.pose, self.clock.phase(), local_center())
    }

    /// Starts swimming toward `target` (tank coordinates), replacing any
    /// trajectory in progress. Fin flaps already running are left alone.
    pub fn swim_to(&mut self, target: Point2<f64>) -> Plan {
        let current = skeleton::build(&self.pose, self.clock.phase(), self.position);
        let plan = planner::plan(self.position, current.head, target);

        let motion = Motion::new(plan, self.config.motion_duration);
        if let Some(old) = self.motion.replace(motion) {
            log::debug!(
                "tick {}: superseding motion at {:.2} toward {:?}",
                self.tick,
                old.fraction(),
                old.plan().trajectory.end
            );
        }
        log::debug!(
            "tick {}: swimming to {:?}, turn {:.1}",
            self.tick,
            target,
            plan.turn_angle
        );

        self.pose.swim_frequency = MOVING_SWIM_FREQUENCY;
        let flap = tween::fin_flap(&self.config.fin_flap, &mut self.rng);
        log::debug!("fin flap {:.2}s x{}", flap.duration(), flap.repeats() + 1);
        self.animator.start(flap);
        plan
    }

    pub fn step(&mut self) {
        let dt = self.config.tick_length;
        self.tick += 1;

        if let Some(motion) = self.motion.as_mut() {
            let sample = motion.advance(dt);
            sample.apply(&mut self.pose);
            self.position = sample.position;
            if motion.is_finished() {
                log::debug!("tick {}: arrived at {:?}", self.tick, self.position);
                self.motion = None;
                self.pose.swim_frequency = IDLE_SWIM_FREQUENCY;
            }
        }

        self.animator.tick(dt, &mut self.pose);

        let phase = self.clock.advance(dt);
        log::trace!("tick {} phase {:.1} pose {:?}", self.tick, phase, self.pose);
    }

    pub fn snapshot(&self) -> Snapshot {
        let motion = self.motion.as_ref().map(|m| {
            let sample = m.sample();
            MotionSnapshot {
                trajectory: m.plan().trajectory,
                turn_angle: m.plan().turn_angle,
                fraction: sample.fraction,
                heading: sample.heading,
            }
        });
        Snapshot {
            tick: self.tick,
            time: self.time(),
            phase: self.clock.phase(),
            pose: self.pose,
            position: self.position,
            origin: self.origin(),
            box_size: BOX_SIZE,
            motion,
            primitives: shape::emit(&self.skeleton()),
        }
    }
}
