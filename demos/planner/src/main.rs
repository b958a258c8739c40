//! planner — build and evaluate a railway network for one level.
//!
//! Loads a level file, lets the nearest-unconnected-neighbour strategy
//! propose connections, builds them, evaluates every pair of locations, and
//! prints the header figures a player would see: average travel time, cost
//! and traffic congestion.

mod nearest;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rp_level::{DEFAULT_HEADER_HEIGHT, Tuning, load_level_json, load_tuning_toml};
use rp_network::AStarRouter;
use rp_output::{CsvWriter, SimOutputObserver};
use rp_sim::{NoopObserver, Sim, SimBuilder, SimObserver};

use nearest::NearestNeighbourProposer;

/// Railway network planner
///
/// Builds the connections proposed for a level and reports how well the
/// resulting network serves every pair of locations.
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(version, about, long_about = None)]
struct Args {
    /// Level JSON file
    #[arg(default_value = "levels/paris.json")]
    level: PathBuf,

    /// TOML file overriding unit costs and pacing
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Directory for connections.csv, itineraries.csv and summary.csv
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Honour tick pacing instead of draining the queues immediately
    #[arg(long)]
    paced: bool,

    /// Vertical offset added to every location (header height)
    #[arg(long, default_value_t = DEFAULT_HEADER_HEIGHT)]
    y_offset: f64,
}

fn drive<O: SimObserver>(sim: &mut Sim<AStarRouter>, observer: &mut O, paced: bool) -> Result<()> {
    if paced {
        sim.run(observer)?;
    } else {
        sim.run_to_completion(observer)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,rp_sim=info")))
        .init();

    let args = Args::parse();

    let level = load_level_json(&args.level).with_context(|| format!("loading level {}", args.level.display()))?;
    let tuning = match &args.tuning {
        Some(path) => load_tuning_toml(path).with_context(|| format!("loading tuning {}", path.display()))?,
        None => Tuning::default(),
    };

    println!("=== planner: {} ===", level.name);
    println!("Locations: {}", level.locations.len());

    let mut sim = SimBuilder::new(level.to_locations(args.y_offset), AStarRouter)
        .config(tuning.pacing)
        .costs(tuning.costs)
        .proposer(&mut NearestNeighbourProposer)
        .build()?;
    println!(
        "Proposed connections: {}  |  Itineraries: {}",
        sim.pending_connections(),
        sim.itineraries().total()
    );
    println!();

    let t0 = Instant::now();
    match &args.output {
        Some(dir) => {
            let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            drive(&mut sim, &mut obs, args.paced)?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
        }
        None => drive(&mut sim, &mut NoopObserver, args.paced)?,
    }
    let elapsed = t0.elapsed();

    let stats = sim.stats();
    let average = if stats.num_travels > 0 {
        format!("{}min", stats.average_travel_time_mins().floor())
    } else {
        "0min".to_owned()
    };

    println!("{:<22} {}", "Average Travel Time", average);
    println!("{:<22} {}mi$", "Cost", stats.cost.floor());
    println!("{:<22} {:.2}", "Traffic congestion", stats.traffic_congestion);
    if let Some(warning) = sim.warning() {
        println!();
        println!("! {warning}");
    }
    println!();
    println!(
        "Built {} connections, {} travels in {} ticks ({:.3} s)",
        sim.graph().connection_count(),
        stats.num_travels,
        sim.clock().0,
        elapsed.as_secs_f64()
    );

    Ok(())
}
