//! First-class action types for tic-tac-toe.
//!
//! User input is turned into an [`Action`] message before it reaches the
//! timeline. The timeline consumes the message and returns the next state;
//! nothing is mutated in place.

use crate::position::Position;
use crate::rules::Outcome;
use serde::{Deserialize, Serialize};

/// A user-triggered transition of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Mark a cell for the player whose turn it is.
    Place(Position),
    /// Show the board at an earlier (or later) step.
    Jump(usize),
    /// Start over from the empty board.
    Reset,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(pos) => write!(f, "place {}", pos.label()),
            Action::Jump(0) => write!(f, "jump to game start"),
            Action::Jump(step) => write!(f, "jump to move #{}", step),
            Action::Reset => write!(f, "reset"),
        }
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
