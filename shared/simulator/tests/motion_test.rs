use approx::assert_abs_diff_eq;
use fishbowl_simulator::config::{FinFlapConfig, SimulationConfig};
use fishbowl_simulator::fish::{local_center, MAX_FIN_AMPLITUDE};
use fishbowl_simulator::geometry::angle_difference;
use fishbowl_simulator::pose::{IDLE_SWIM_FREQUENCY, MOVING_SWIM_FREQUENCY};
use fishbowl_simulator::simulation::Simulation;
use nalgebra::point;
use test_log::test;

fn run_until_idle(sim: &mut Simulation) -> u32 {
    let start = sim.tick();
    while sim.is_moving() {
        sim.step();
        assert!(sim.tick() - start < 10_000);
    }
    sim.tick() - start
}

#[test]
fn test_idle() {
    let mut sim = Simulation::new(0);
    for _ in 0..300 {
        sim.step();
    }
    assert_eq!(sim.pose().main_angle, 90.0);
    assert_eq!(sim.pose().swim_frequency, IDLE_SWIM_FREQUENCY);
    assert_eq!(sim.pose().fin_amplitude, 0.0);
    assert_eq!(sim.position(), local_center());
    assert!(sim.snapshot().motion.is_none());
}

#[test]
fn test_swim_to_target() {
    let mut sim = Simulation::new(0);
    let target = point![600.0, 50.0];
    sim.swim_to(target);
    assert!(sim.is_moving());
    assert_eq!(sim.pose().swim_frequency, MOVING_SWIM_FREQUENCY);
    assert_eq!(sim.fin_flap_count(), 1);

    let ticks = run_until_idle(&mut sim);
    assert!((120..=121).contains(&ticks), "{}", ticks);
    assert_eq!(sim.pose().swim_frequency, IDLE_SWIM_FREQUENCY);
    assert_abs_diff_eq!(sim.position().x, target.x, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.position().y, target.y, epsilon = 1e-9);

    let snapshot = sim.snapshot();
    assert_abs_diff_eq!(snapshot.origin.x, target.x - 209.5, epsilon = 1e-9);
    assert_abs_diff_eq!(snapshot.origin.y, target.y - 209.5, epsilon = 1e-9);
}

#[test]
fn test_heading_continuous_at_start() {
    let mut sim = Simulation::new(0);
    for _ in 0..17 {
        sim.step();
    }
    let before = sim.skeleton().heading;
    let plan = sim.swim_to(point![0.0, 400.0]);
    assert!(plan.turn_angle > 0.0);
    let start = sim.motion().unwrap().sample();
    assert_eq!(start.fraction, 0.0);
    assert_abs_diff_eq!(angle_difference(start.heading, before), 0.0, epsilon = 1e-7);
}

#[test]
fn test_target_on_body_center() {
    let mut sim = Simulation::new(0);
    let plan = sim.swim_to(sim.position());
    assert_eq!(plan.turn_angle, 0.0);
    run_until_idle(&mut sim);
    assert!(sim.pose().main_angle.is_finite());
    assert_abs_diff_eq!(sim.position().x, 209.5, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.position().y, 209.5, epsilon = 1e-9);
}

#[test]
fn test_supersede() {
    let mut sim = Simulation::new(3);
    sim.swim_to(point![800.0, 800.0]);
    for _ in 0..10 {
        sim.step();
    }
    let second_target = point![-300.0, 100.0];
    let plan = sim.swim_to(second_target);
    assert_eq!(sim.motion().unwrap().plan().trajectory.end, second_target);
    assert_eq!(plan.trajectory.start, sim.position());

    while sim.is_moving() {
        sim.step();
        if let Some(motion) = sim.motion() {
            assert_eq!(motion.plan().trajectory.end, second_target);
            assert_eq!(sim.pose().main_angle, motion.sample().heading);
        }
    }
    assert_abs_diff_eq!(sim.position().x, second_target.x, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.position().y, second_target.y, epsilon = 1e-9);
    assert_eq!(sim.pose().swim_frequency, IDLE_SWIM_FREQUENCY);
}

#[test]
fn test_superseded_flap_keeps_running() {
    let config = SimulationConfig {
        fin_flap: FinFlapConfig {
            base_duration: 1.0,
            max_duration_multiple: 1,
            max_repeats: 0,
        },
        ..Default::default()
    };
    let mut sim = Simulation::with_config(config, 0);
    sim.swim_to(point![500.0, 500.0]);
    for _ in 0..6 {
        sim.step();
    }
    sim.swim_to(point![0.0, 0.0]);
    assert_eq!(sim.fin_flap_count(), 2);
    for _ in 0..57 {
        sim.step();
    }
    assert_eq!(sim.fin_flap_count(), 1);
    for _ in 0..10 {
        sim.step();
    }
    assert_eq!(sim.fin_flap_count(), 0);
}

#[test]
fn test_fin_amplitude_bounded() {
    let mut sim = Simulation::new(11);
    let mut peak: f64 = 0.0;
    for i in 0..600 {
        if i % 45 == 0 {
            sim.swim_to(point![(i * 7 % 500) as f64, (i * 13 % 400) as f64]);
        }
        sim.step();
        let amplitude = sim.pose().fin_amplitude;
        assert!((0.0..=MAX_FIN_AMPLITUDE).contains(&amplitude));
        peak = peak.max(amplitude);
    }
    assert!(peak > MAX_FIN_AMPLITUDE / 2.0);
}

#[test]
fn test_deterministic() {
    let run = |seed| {
        let mut sim = Simulation::new(seed);
        let mut frames = vec![];
        for i in 0..200 {
            if i % 50 == 0 {
                sim.swim_to(point![i as f64 * 3.0, 400.0 - i as f64]);
            }
            sim.step();
            frames.push(serde_json::to_string(&sim.snapshot()).unwrap());
        }
        frames
    };
    assert_eq!(run(5), run(5));
}
