//! Gridlock - terminal tic-tac-toe.
//!
//! Keys: arrows move the cursor, Enter or 1-9 place a mark, `m` switches
//! between two-player and CPU mode, `r` resets, `s` toggles sound, `q` quits.

#![warn(missing_docs)]

mod app;
mod audio;
mod cli;
mod confetti;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output doesn't interfere with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("starting gridlock");

    let mut terminal = ratatui::init();
    let result = app::run(&mut terminal, cli).await;
    ratatui::restore();

    result
}
