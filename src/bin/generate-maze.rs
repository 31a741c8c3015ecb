//! CLI for maze generation

use std::time::{SystemTime, UNIX_EPOCH};

use amazing_maze::{Grid, MazeGenerator};
use anyhow::Context;
use clap::Parser;
use log::info;

/// Print a randomly generated perfect maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Dimension of the maze, used for both height and width
    #[arg(short, long, default_value_t = 20, allow_negative_numbers = true)]
    dimension: i32,

    /// Maze height, overrides dimension
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i32>,

    /// Maze width, overrides dimension
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i32>,

    /// Random seed, derived from the current time if not given
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log generation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Seed from the current time, in nanoseconds
fn time_seed() -> anyhow::Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the Unix epoch")?;
    // Lower 64 bits are the fast-changing ones
    Ok(elapsed.as_nanos() as u64)
}

/// Generate maze, print it on stdout
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    let height = args.height.unwrap_or(args.dimension);
    let width = args.width.unwrap_or(args.dimension);
    let mut grid = Grid::new(height, width).context("Cannot create maze")?;

    let seed = match args.seed {
        Some(seed) => seed,
        None => time_seed()?,
    };
    info!("Generating {height}x{width} maze with seed {seed}");

    let mut gen = MazeGenerator::new(Some(seed));
    gen.generate(&mut grid);
    println!("{grid}");
    Ok(())
}
