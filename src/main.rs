//! Overcooker - headless training run
//!
//! Loads a run configuration, trains the per-cell policies for a number of
//! ticks, and reports what the chefs achieved.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use overcooker::core::config::{DecisionMode, SimulationConfig};
use overcooker::core::error::Result;
use overcooker::simulation::{RunSummary, Trainer};

/// Train chefs in a grid kitchen
#[derive(Parser, Debug)]
#[command(name = "overcooker")]
#[command(about = "Run the cooperative cooking grid-world and learn per-cell policies")]
struct Args {
    /// TOML run configuration (defaults are used when omitted)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Number of ticks to run (overrides run.max_steps)
    #[arg(long)]
    steps: Option<u64>,

    /// Random seed for deterministic runs (overrides run.seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Act on the most probable action instead of sampling
    #[arg(long)]
    greedy: bool,

    /// Print the grid every N ticks (overrides run.render_every)
    #[arg(long)]
    render_every: Option<u64>,

    /// Write the JSON run summary to this file
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Print the greedy action of every cell after the run
    #[arg(long)]
    show_policy: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("overcooker=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(steps) = args.steps {
        config.run.max_steps = steps;
    }
    if args.seed.is_some() {
        config.run.seed = args.seed;
    }
    if args.greedy {
        config.run.decision = DecisionMode::Greedy;
    }
    if let Some(every) = args.render_every {
        config.run.render_every = every;
    }

    let mut trainer = Trainer::from_config(&config)?;
    tracing::info!(
        scenario = %trainer.kitchen.name,
        width = trainer.kitchen.width(),
        height = trainer.kitchen.height(),
        agents = trainer.kitchen.agents.len(),
        seed = trainer.seed(),
        steps = config.run.max_steps,
        "Overcooker starting"
    );

    let render_every = config.run.render_every;
    let start = Instant::now();
    trainer.run(config.run.max_steps, |trainer, report| {
        if render_every > 0 && report.tick % render_every == 0 {
            println!("\nStep {}:", report.tick);
            println!("Rewards: {:?}", report.rewards);
            print!("{}", trainer.kitchen.render_text());
        }
    })?;
    let elapsed = start.elapsed();

    let summary = RunSummary::new(&trainer, elapsed);
    println!("{}", summary.summary());

    if args.show_policy {
        println!("\nGreedy action per cell:");
        print!("{}", trainer.policies.render_best());
    }

    if let Some(path) = &args.output {
        std::fs::write(path, summary.to_json()?)?;
        println!("Full summary written to {}", path.display());
    }

    Ok(())
}
