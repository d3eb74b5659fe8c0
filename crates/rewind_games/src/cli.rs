//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use derive_more::{Display, Error};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file (optional)
        #[arg(short, long, default_value = "rewind.toml")]
        config: PathBuf,

        /// Moves to replay before the game opens, e.g. "4,0,top-right"
        #[arg(long)]
        moves: Option<MoveList>,
    },

    /// Replay moves without a UI and print every step
    Replay {
        /// Comma-separated moves (indices 0-8 or labels)
        #[arg(long)]
        moves: MoveList,

        /// Print the timeline as JSON instead of boards
        #[arg(long)]
        json: bool,
    },
}

/// A comma-separated list of moves given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveList(pub Vec<Position>);

impl std::str::FromStr for MoveList {
    type Err = ParseMovesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_moves(s).map(MoveList)
    }
}

/// A move list entry that names no position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Move {number} ({token:?}) is not a board position")]
pub struct ParseMovesError {
    /// One-based number of the offending entry.
    pub number: usize,
    /// The offending entry.
    pub token: String,
}

/// Parses a comma-separated move list.
///
/// Blank entries are skipped, so `"0, 4,"` is two moves.
pub fn parse_moves(s: &str) -> Result<Vec<Position>, ParseMovesError> {
    s.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse::<Position>().map_err(|_| ParseMovesError {
                number: index + 1,
                token: token.to_string(),
            })
        })
        .collect()
}
