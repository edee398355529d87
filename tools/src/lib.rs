use std::io::Write;
use std::path::Path;
use std::{fs, io};

use anyhow::{bail, Context};
use fishbowl_simulator::config::SimulationConfig;
use fishbowl_simulator::simulation::Simulation;
use nalgebra::{point, Point2};

/// A swim request issued when the simulation reaches `tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledTarget {
    pub tick: u32,
    pub target: Point2<f64>,
}

/// Parses `TICK:X,Y`.
pub fn parse_target(s: &str) -> anyhow::Result<ScheduledTarget> {
    let Some((tick, coords)) = s.split_once(':') else {
        bail!("Expected TICK:X,Y, got {:?}", s);
    };
    let Some((x, y)) = coords.split_once(',') else {
        bail!("Expected X,Y after the tick in {:?}", s);
    };
    let tick = tick
        .trim()
        .parse()
        .with_context(|| format!("Bad tick in {:?}", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("Bad x in {:?}", s))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("Bad y in {:?}", s))?;
    if !x.is_finite() || !y.is_finite() {
        bail!("Target coordinates must be finite: {:?}", s);
    }
    Ok(ScheduledTarget {
        tick,
        target: point![x, y],
    })
}

pub fn load_config(path: &Path) -> anyhow::Result<SimulationConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    let config: SimulationConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {:?}", path))?;
    if config.tick_length <= 0.0 {
        bail!("tick_length must be positive, got {}", config.tick_length);
    }
    Ok(config)
}

/// Steps `sim` for `ticks` ticks, issuing scheduled targets on time and
/// writing every `every`th snapshot as one JSON line.
pub fn run(
    sim: &mut Simulation,
    schedule: &[ScheduledTarget],
    ticks: u32,
    every: u32,
    out: &mut dyn Write,
) -> anyhow::Result<usize> {
    let mut schedule = schedule.to_vec();
    schedule.sort_by_key(|s| s.tick);
    let mut pending = schedule.into_iter().peekable();
    let every = every.max(1);
    let mut written = 0;

    for _ in 0..ticks {
        while let Some(next) = pending.next_if(|s| s.tick <= sim.tick()) {
            log::info!("tick {}: swim to {:?}", sim.tick(), next.target);
            sim.swim_to(next.target);
        }
        sim.step();
        if sim.tick() % every == 0 {
            serde_json::to_writer(&mut *out, &sim.snapshot())?;
            out.write_all(b"\n")?;
            written += 1;
        }
    }

    if let Some(next) = pending.next() {
        log::warn!(
            "Target {:?} scheduled at tick {} never issued",
            next.target,
            next.tick
        );
    }
    Ok(written)
}

pub fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(io::BufWriter::new(
            fs::File::create(path).with_context(|| format!("Failed to create {:?}", path))?,
        )),
        None => Box::new(io::BufWriter::new(io::stdout())),
    })
}
