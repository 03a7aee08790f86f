//! twin-server — serve the soil-moisture digital twin over HTTP.
//!
//! Loads the trained predictor artifact once at startup.  A missing or
//! unreadable artifact is logged and the process starts degraded: every
//! step request then returns `503` until the artifact is re-provisioned
//! (run `generate-dataset` and `train-model`) and the server restarted.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use twin_engine::SimulationEngine;
use twin_model::LinearModel;
use twin_server::{build_router, AppState};

#[derive(Parser)]
#[command(about = "HTTP API for the soil-moisture digital twin")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// TCP port to listen on.
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Path to the trained predictor artifact.
    #[arg(long, default_value = "irrigation_model.json")]
    model: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let engine = match LinearModel::load(&args.model) {
        Ok(model) => {
            info!(path = %args.model.display(), "predictor artifact loaded");
            SimulationEngine::new(Box::new(model))
        }
        Err(e) => {
            warn!(
                path = %args.model.display(),
                error = %e,
                "predictor artifact unavailable; starting degraded — \
                 run `generate-dataset` and `train-model` to provision it"
            );
            SimulationEngine::without_predictor()
        }
    };

    let state = Arc::new(AppState::new(engine));
    let router = build_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid bind address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind failed on {addr}"))?;

    info!(%addr, "twin-server listening");
    axum::serve(listener, router).await.context("serve error")?;

    Ok(())
}
