//! Run every scenario in a CSV file and write one summary row per scenario
//!
//! Usage: cargo run --release --bin run_batch -- --input scenarios.csv

use anyhow::{anyhow, Context, Result};
use cashiq::inputs::load_scenarios;
use cashiq::report::write_batch_csv;
use cashiq::{CalculatorConfig, ScenarioRunner};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch", about = "Run calculator scenarios from a CSV file")]
struct BatchArgs {
    /// Scenario CSV (ScenarioID, Calculator, Amount, Rate, Years, ...)
    #[arg(long)]
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "batch_output.csv")]
    output: PathBuf,

    /// JSON file with calculator defaults and input ranges
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clamp inputs to the configured ranges before calculating
    #[arg(long)]
    clamp: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = BatchArgs::parse();
    let config = match &args.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .map_err(|e| anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => CalculatorConfig::default(),
    };

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());
    let scenarios = load_scenarios(&args.input)
        .map_err(|e| anyhow!("Failed to load scenarios from {}: {}", args.input.display(), e))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_config(config).with_clamping(args.clamp);

    let run_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Calculations complete in {:?}", run_start.elapsed());

    let failed = results.iter().filter(|r| r.outcome.is_err()).count();
    if failed > 0 {
        println!("{} of {} scenarios failed; see the Error column", failed, results.len());
    }

    let file = File::create(&args.output).with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_batch_csv(&results, file).with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Results written to: {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
