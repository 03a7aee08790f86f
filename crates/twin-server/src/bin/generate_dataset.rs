//! generate-dataset — write the ground-truth training CSV.
//!
//! The series is produced by the same plot physics the online engine
//! runs, labeled by the fixed threshold rule.  Feed the output to
//! `train-model`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use twin_dataset::{generate, write_dataset, GeneratorConfig};

#[derive(Parser)]
#[command(about = "Generate the irrigation training dataset")]
struct Args {
    /// Days of simulated history (24 rows each).
    #[arg(long, default_value_t = 1825)]
    days: u32,

    /// Output CSV path.
    #[arg(long, default_value = "irrigation_data.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = GeneratorConfig {
        num_days: args.days,
        ..GeneratorConfig::default()
    };
    let rows = generate(&config);
    write_dataset(&args.output, &rows)?;

    info!(
        rows = rows.len(),
        path = %args.output.display(),
        "training data written"
    );
    Ok(())
}
