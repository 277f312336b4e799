//! # Spooled File Tool
//!
//! Command line tool for working with spooled file print streams downloaded
//! from an IBM i output queue.
//!
//! ## Overview
//!
//! This tool provides commands for:
//! - Reformatting (replay carriage control into page-accurate text)
//! - Searching rendered print streams
//! - Listing a spooled file catalog as local file names
//!
//! ## Architecture
//!
//! This is Layer 3 - the binary that ties together:
//! - splf-core: Core types and configuration
//! - splf-printer: Carriage-control interpreter and overlay merger
//! - splf-catalog: Naming, filtering and search

use anyhow::Context;
use clap::Parser;
use splf::Cli;
use splf_core::ToolConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ToolConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ToolConfig::default(),
    };

    // Initialize logging; stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("splf v{} starting", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    splf::run(cli, &config, &mut stdout).await.map_err(|e| {
        tracing::error!("{:#}", e);
        e
    })
}
