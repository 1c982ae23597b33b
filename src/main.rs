//! Authenticated TCP reachability probe service.
//!
//! # Request Flow
//!
//! ```text
//! GET /ping?ip=<host>&port=<port>
//!     → auth middleware (shared secret, 403 on failure)
//!     → query validation (400 on missing/duplicated params)
//!     → bounded TCP dial from the configured egress address
//!     → {"reachable": <bool>, "ping": <millis>}
//! ```
//!
//! The credential and egress address are loaded once at startup and never
//! change for the lifetime of the process.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use egress_probe::config::loader::load_config;
use egress_probe::http::HttpServer;
use egress_probe::lifecycle::Shutdown;
use egress_probe::observability::logging;

#[derive(Parser, Debug)]
#[command(version, about = "Authenticated TCP reachability probe service")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args.config)?;

    logging::init(&config.observability.log_level);

    tracing::info!("egress-probe v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        egress_address = %config.probe.egress_address,
        dial_timeout_secs = config.probe.dial_timeout_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
