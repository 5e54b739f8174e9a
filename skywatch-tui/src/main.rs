//! Binary crate for the `skywatch` weather widget.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive terminal widget
//! - Human-friendly one-shot output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; the widget's alternate screen never shows
    // them, so operators redirect stderr to a file when they want a trail.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
