//! AceNodes site host.
//!
//! Serves the built UI bundle (`dx build --release` output) with SPA route
//! fallback and a `/health` endpoint for load balancers.

use std::path::PathBuf;

use acenodes_server::{create_router, AppState};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "acenodes-server", about = "AceNodes information site host")]
struct Cli {
    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Directory holding the compiled UI (must contain index.html).
    #[arg(long, default_value = "ui/dist")]
    dist: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let state = AppState::load(&cli.dist).context("loading UI bundle")?;
    tracing::info!("serving UI bundle from {}", state.dist_dir().display());

    let app = create_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
