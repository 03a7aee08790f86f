//! train-model — fit the irrigation predictor and persist its artifact.
//!
//! Reads the CSV written by `generate-dataset`, fits a balanced logistic
//! regression on a seeded 80/20 split, reports held-out metrics, and
//! saves the JSON artifact `twin-server` loads at startup.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use twin_model::{fit, load_examples, TrainOptions};

#[derive(Parser)]
#[command(about = "Train the irrigation predictor")]
struct Args {
    /// Training dataset CSV.
    #[arg(long, default_value = "irrigation_data.csv")]
    data: PathBuf,

    /// Output artifact path.
    #[arg(long, default_value = "irrigation_model.json")]
    output: PathBuf,

    /// Full-batch gradient-descent passes.
    #[arg(long, default_value_t = 500)]
    epochs: usize,

    /// Gradient-descent step size.
    #[arg(long, default_value_t = 0.5)]
    learning_rate: f64,

    /// Seed for the train/test shuffle split.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let examples = load_examples(&args.data)?;
    info!(examples = examples.len(), path = %args.data.display(), "dataset loaded");

    let opts = TrainOptions {
        learning_rate: args.learning_rate,
        epochs: args.epochs,
        seed: args.seed,
        ..TrainOptions::default()
    };
    let (model, eval) = fit(&examples, &opts)?;

    info!(
        train_size = eval.train_size,
        test_size = eval.test_size,
        accuracy = format_args!("{:.4}", eval.accuracy),
        precision = format_args!("{:.4}", eval.precision),
        recall = format_args!("{:.4}", eval.recall),
        "held-out evaluation"
    );

    model.save(&args.output)?;
    info!(path = %args.output.display(), "artifact saved");
    Ok(())
}
