//! Elements - headless falling-sand runner

use std::path::PathBuf;

use clap::Parser;
use elements::{ElementsConfig, HeadlessRunner, InputScript};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON config file (default: elements.ron if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Number of frames to simulate
    #[arg(long)]
    frames: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// RON input script with emitters (default: sand and water sprays)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Output path for the final frame
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip writing the final frame
    #[arg(long, conflicts_with = "output")]
    no_image: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = ElementsConfig::load(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.grid.width = width;
    }
    if let Some(height) = args.height {
        config.grid.height = height;
    }
    if let Some(frames) = args.frames {
        config.simulation.frames = frames;
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }
    if let Some(output) = args.output {
        config.output.image_path = Some(output);
    }
    if args.no_image {
        config.output.image_path = None;
    }

    let script = match &args.script {
        Some(path) => InputScript::load(path)?,
        None => InputScript::default_for(config.grid.width, config.grid.height),
    };

    log::info!("Starting Elements");

    let runner = HeadlessRunner::new(&config, script)?;
    let report = runner.run(config.output.image_path.as_deref())?;

    println!(
        "{} frames (seed {}): {} sand, {} water, {} moves, {} swaps",
        report.frames,
        report.seed,
        report.sand,
        report.water,
        report.totals.moved,
        report.totals.swapped
    );
    if let Some(path) = &report.image_path {
        println!("Final frame: {}", path.display());
    }

    Ok(())
}
