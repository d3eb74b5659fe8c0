//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a single board. Rules never look at
//! history or whose turn it is; the timeline decides what to do with
//! their answer.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner, winning_line};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty cell.
    Undecided,
    /// A player has three in a row.
    Won(Player),
    /// The board is full with no three in a row.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Undecided | Outcome::Draw => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Won(player) => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Draw: No Winner"),
        }
    }
}

/// Evaluates a board.
///
/// Winning lines are checked first, in [`WINNING_LINES`] order; a full board
/// without a winner is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}
