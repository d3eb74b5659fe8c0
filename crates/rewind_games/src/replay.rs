//! Headless replay: plays a move list and prints every step.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameSession, Position, Timeline, step_label};
use std::io::Write;
use tracing::{info, instrument};

/// Replays `moves` from the empty board and writes the result to `out`.
///
/// Boards are printed one per step, followed by the final status. With
/// `json` the whole timeline is written as a JSON document instead.
#[instrument(skip(moves, out), fields(moves = moves.len()))]
pub fn run_replay(moves: &[Position], json: bool, out: &mut impl Write) -> Result<()> {
    let timeline = Timeline::replay(moves).context("Replay failed")?;
    info!(steps = timeline.history().len(), "Replay finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &timeline).context("Failed to encode timeline")?;
        writeln!(out)?;
        return Ok(());
    }

    let session = GameSession::from_timeline(timeline);
    for (step, snapshot) in session.timeline().history().iter().enumerate() {
        let title = match step.checked_sub(1).and_then(|i| moves.get(i)) {
            Some(pos) => format!("{} ({})", step_label(step), pos.label()),
            None => step_label(step),
        };
        writeln!(out, "{}\n{}\n", title, snapshot.display())?;
    }
    writeln!(out, "{}", session.status())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_prints_steps_and_status() {
        let mut out = Vec::new();
        let moves = [Position::TopLeft, Position::Center, Position::TopCenter];
        run_replay(&moves, false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Go to game start\n0|1|2"));
        assert!(text.contains("Go to move #2 (Center)\nX|1|2\n-+-+-\n3|O|5"));
        assert!(text.trim_end().ends_with("Next player: O"));
    }

    #[test]
    fn test_replay_reports_winner() {
        let mut out = Vec::new();
        let moves = [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ];
        run_replay(&moves, false, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().trim_end().ends_with("Winner: X"));
    }

    #[test]
    fn test_replay_json() {
        let mut out = Vec::new();
        run_replay(&[Position::Center], true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["cursor"], 1);
    }

    #[test]
    fn test_replay_rejects_illegal_move() {
        let mut out = Vec::new();
        let err = run_replay(&[Position::Center, Position::Center], false, &mut out).unwrap_err();
        assert!(format!("{:#}", err).contains("already occupied"));
    }
}
