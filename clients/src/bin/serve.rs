//! `greencert-serve`: serves the GreenCert website over HTTP.
//!
//! **Routes:** `/`, `/certifications`, `/certification/<slug>`, `/industries`,
//! `/contact`. Anything else is a 404 page.
//!
//! **Usage:**
//! ```
//! greencert-serve [--host <addr>] [--port <port>]
//! ```
//!
//! `HOST` and `PORT` are read from the environment when the flags are absent.
//! Log verbosity follows `RUST_LOG` (default `info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::net::IpAddr;

use anyhow::{Context, Result};
use clap::Parser;
use greencert_website::config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use greencert_website::server;
use tracing_subscriber::EnvFilter;

/// Serve the GreenCert website.
#[derive(Parser)]
#[command(name = "greencert-serve", about = "Serve the GreenCert website")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "HOST", default_value_t = DEFAULT_HOST)]
    host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(server::serve(ServerConfig::new(args.host, args.port)))
}
