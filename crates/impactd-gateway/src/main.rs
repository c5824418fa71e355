//! impactd-gateway binary entry point.
//!
//! Reads configuration from the process environment (CLI flags win over
//! environment variables), builds the router over a shared reqwest
//! fetcher, and serves until ctrl-c or SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use impactd_core::config::GatewayConfig;
use impactd_gateway::router;
use impactd_gateway::state::AppState;
use impactd_gateway::upstream::HttpFetcher;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Impact simulation gateway.
#[derive(Parser, Debug)]
#[command(name = "impactd-gateway")]
#[command(version, about, long_about = None)]
struct Args {
    /// Bind host (overrides the HOST environment variable).
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides the PORT environment variable).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = GatewayConfig::from_env().context("invalid gateway configuration")?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let fetcher = HttpFetcher::new(config.upstream_timeout)
        .context("failed to build upstream HTTP client")?;
    let addr = config.bind_addr();
    let state = AppState::new(config, Arc::new(fetcher));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "impact gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

/// Resolve when the process is asked to stop.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
