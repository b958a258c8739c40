//! generate_level — author a random level file.
//!
//! Usage: `generate_level OUT.json [--seed N]`
//!
//! Prompts for a level name, then for location names one per line.  An
//! empty line or `stop` ends the list.  Each location is placed at random
//! on the board with a random color.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rp_core::SimRng;
use rp_level::{Board, generate_level, write_level_json};

#[derive(Parser, Debug)]
#[command(name = "generate_level")]
#[command(version, about = "Write a level with randomly placed locations", long_about = None)]
struct Args {
    /// Output JSON path
    out: PathBuf,

    /// Seed for reproducible placement. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,
}

fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    prompt(&mut stdout, "Level name: ")?;
    let name = lines.next().transpose()?.unwrap_or_default();

    let mut names = Vec::new();
    loop {
        prompt(&mut stdout, &format!("Location {}: ", names.len() + 1))?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim().to_owned();
        if line.is_empty() || line == "stop" {
            break;
        }
        names.push(line);
    }

    let mut rng = match args.seed {
        Some(seed) => SimRng::new(seed),
        None => SimRng::from_entropy(),
    };
    let level = generate_level(name.trim(), names, Board::default(), &mut rng);
    write_level_json(&args.out, &level)?;

    println!("Wrote {} locations to {}", level.locations.len(), args.out.display());
    Ok(())
}
