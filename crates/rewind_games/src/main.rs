//! Rewind - tic-tac-toe with time travel.
//!
//! Play in the terminal, or replay a move list headlessly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, MoveList};
use config::AppConfig;
use rewind_tictactoe::{GameSession, Timeline};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, moves } => run_play(&config, moves),
        Command::Replay { moves, json } => run_replay(moves, json),
    }
}

/// Run the interactive terminal UI.
fn run_play(config_path: &Path, moves: Option<MoveList>) -> Result<()> {
    let config = AppConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let theme = config.theme()?;

    // Log to a file so output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let session = GameSession::from_timeline(starting_timeline(moves)?);
    tui::run_tui(session, theme)
}

/// Replay moves and print the result to stdout.
fn run_replay(moves: MoveList, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    replay::run_replay(&moves.0, json, &mut stdout)
}

#[instrument(skip_all)]
fn starting_timeline(moves: Option<MoveList>) -> Result<Timeline> {
    match moves {
        Some(MoveList(moves)) => {
            info!(moves = moves.len(), "Replaying opening moves");
            Timeline::replay(&moves).context("Opening moves are not a legal game")
        }
        None => Ok(Timeline::new()),
    }
}
