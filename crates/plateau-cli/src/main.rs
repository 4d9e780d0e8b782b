//! plateau CLI
//!
//! Prints the minimum number of generations needed to level a layer.
//!
//! Usage:
//!   plateau                      Level the demo layer 3 3 3 6 (prints 4)
//!   plateau 0 4 1 7              Level the given layer
//!   plateau --policy gap-threshold 1 2 5
//!   plateau --trace 3 3 3 6      Print every generation
//!   plateau --json 3 3 3 6       Print the full trace as JSON
//!
//! Environment:
//!   PLATEAU_POLICY  Default policy (reach-or-gap | gap-threshold)
//!   RUST_LOG        Log filter (default: plateau_core=warn)

use std::path::PathBuf;

use clap::Parser;
use plateau_core::{GenerationSimulator, Policy, SimulatorConfig, Trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "plateau")]
#[command(about = "Minimum generations to level an integer layer")]
#[command(version)]
struct Cli {
    /// Layer values
    #[arg(allow_negative_numbers = true, default_values_t = [3, 3, 3, 6])]
    layer: Vec<i64>,

    /// Policy preset (reach-or-gap, gap-threshold); overrides --config
    #[arg(long)]
    policy: Option<Policy>,

    /// JSON simulator config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print each generation before the result
    #[arg(long)]
    trace: bool,

    /// Print the full trace as JSON instead of the result
    #[arg(long, conflicts_with = "trace")]
    json: bool,
}

impl Cli {
    /// File config, else environment, with `--policy` taking precedence.
    fn simulator_config(&self) -> Result<SimulatorConfig, Box<dyn std::error::Error>> {
        if let Some(policy) = self.policy {
            return Ok(SimulatorConfig::for_policy(policy));
        }
        match &self.config {
            Some(path) => Ok(SimulatorConfig::from_json(&std::fs::read_to_string(path)?)?),
            None => Ok(SimulatorConfig::from_env()?),
        }
    }
}

fn render_trace(trace: &Trace) -> Vec<String> {
    let mut lines = vec![format!("generation 0: {:?}", trace.initial)];
    for record in &trace.steps {
        let outcome = &record.outcome;
        let action = match outcome.selected {
            Some(index) => format!("+{} at {}", outcome.step.increment(), index),
            None => "idle".to_string(),
        };
        lines.push(format!(
            "generation {}: {} -> {:?}",
            outcome.generation, action, record.layer
        ));
    }
    lines
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plateau_core=warn,plateau=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.simulator_config()?;
    tracing::debug!(?config, layer = ?cli.layer, "leveling");

    let sim = GenerationSimulator::new(config);

    if cli.json {
        let trace = sim.trace(&cli.layer)?;
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    if cli.trace {
        let trace = sim.trace(&cli.layer)?;
        for line in render_trace(&trace) {
            println!("{line}");
        }
        println!("{}", trace.generations);
        return Ok(());
    }

    println!("{}", sim.run(&cli.layer)?);
    Ok(())
}
