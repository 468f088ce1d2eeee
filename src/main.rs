//! Doghouse — dog breed image API
//!
//! Serves a catalog of dog breeds and breed images over HTTP, backed by an
//! object-storage bucket whose keys are laid out as
//! `breeds/<breed>[-<subbreed>]/<file>`.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌───────────────────────────────────────────────┐
//!                   │                   DOGHOUSE                    │
//!                   │                                               │
//!   Client Request  │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!   ────────────────┼─▶│  http   │──▶│ routing  │──▶│  catalog   │  │
//!                   │  │ server  │   │  table   │   │ + sampler  │  │
//!                   │  └─────────┘   └──────────┘   └─────┬──────┘  │
//!                   │                                     │         │
//!                   │                                     ▼         │
//!   Client Response │  ┌─────────┐                  ┌───────────┐   │     S3 /
//!   ◀───────────────┼──│response │◀─────────────────│  storage  │◀──┼──── memory
//!                   │  │envelope │                  │  listing  │   │     bucket
//!                   │  └─────────┘                  └───────────┘   │
//!                   │                                               │
//!                   │  ┌─────────────────────────────────────────┐  │
//!                   │  │        Cross-Cutting Concerns           │  │
//!                   │  │  ┌────────┐ ┌─────────────────────────┐ │  │
//!                   │  │  │ config │ │ observability (tracing, │ │  │
//!                   │  │  │        │ │ metrics, request IDs)   │ │  │
//!                   │  │  └────────┘ └─────────────────────────┘ │  │
//!                   │  └─────────────────────────────────────────┘  │
//!                   └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod catalog;
pub mod config;
pub mod http;
pub mod routing;
pub mod storage;

// Cross-cutting concerns
pub mod observability;

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use crate::config::{load_config, AppConfig};
use crate::http::HttpServer;
use crate::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "doghouse")]
#[command(about = "Dog breed image API served from an object-storage bucket", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_tracing(&config.observability.log_filter);

    tracing::info!("doghouse v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = ?config.storage.backend,
        bucket = %config.storage.bucket,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
