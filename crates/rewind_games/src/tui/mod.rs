//! Terminal UI for the game.
//!
//! The loop is synchronous: read one key, apply it, redraw.

mod app;
mod input;
mod ui;

use crate::config::Theme;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::GameSession;
use std::io;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
#[instrument(skip_all, fields(history_len = session.history_len()))]
pub fn run_tui(session: GameSession, theme: Theme) -> Result<()> {
    info!("Starting Rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, App::new(session), &theme);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app, theme))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            info!(
                history_len = app.session().history_len(),
                status = %app.session().status(),
                "Quitting"
            );
            return Ok(());
        }
    }
}
