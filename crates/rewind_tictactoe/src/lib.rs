//! Tic-tac-toe with move history and time travel.
//!
//! The game is modelled as a [`Timeline`]: an immutable history of board
//! snapshots plus a cursor selecting the displayed one. Every user action is
//! a pure transition from one timeline to the next.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] maps a board to an [`Outcome`]
//! - **History**: [`History`] stores snapshots and truncates on branching
//! - **Timeline**: [`Timeline`] derives the turn and applies [`Action`]s
//! - **Session**: [`GameSession`] is the state holder a UI talks to
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Position, Status, Player, Timeline};
//!
//! let timeline = Timeline::new()
//!     .place(Position::Center)
//!     .place(Position::TopLeft);
//! assert_eq!(timeline.status(), Status::NextPlayer(Player::X));
//!
//! // Go back one move and play somewhere else instead.
//! let branched = timeline.jump(1).unwrap().place(Position::BottomRight);
//! assert_eq!(branched.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod timeline;
mod types;

pub use action::{Action, MoveError};
pub use history::{History, HistoryError};
pub use position::{ParsePositionError, Position};
pub use rules::{Outcome, WINNING_LINES, check_winner, evaluate, is_full, winning_line};
pub use session::{GameSession, step_label};
pub use timeline::{Status, Timeline};
pub use types::{Board, Cell, Player, Snapshot};
