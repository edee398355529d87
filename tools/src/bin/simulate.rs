use clap::Parser;
use fishbowl_simulator::config::SimulationConfig;
use fishbowl_simulator::simulation::Simulation;
use std::io::Write;
use std::path::PathBuf;

/// Runs a fish headlessly and prints one JSON snapshot per frame.
#[derive(Parser, Debug)]
#[clap()]
struct Arguments {
    #[clap(short, long, default_value_t = 0)]
    seed: u32,

    #[clap(short, long, default_value_t = 600)]
    ticks: u32,

    /// JSON file with simulation settings; missing keys use defaults.
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Swim target as TICK:X,Y. May be repeated.
    #[clap(long = "target")]
    targets: Vec<String>,

    /// Only print every Nth frame.
    #[clap(long, default_value_t = 1)]
    every: u32,

    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Arguments::parse();
    let config = match &args.config {
        Some(path) => fishbowl_tools::load_config(path)?,
        None => SimulationConfig::default(),
    };
    let schedule = args
        .targets
        .iter()
        .map(|s| fishbowl_tools::parse_target(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut sim = Simulation::with_config(config, args.seed);
    let mut out = fishbowl_tools::open_output(args.output.as_deref())?;
    let written = fishbowl_tools::run(&mut sim, &schedule, args.ticks, args.every, &mut *out)?;
    out.flush()?;
    log::info!("Wrote {} frames over {} ticks", written, sim.tick());
    Ok(())
}
