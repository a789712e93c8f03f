//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

/// Runs a restore action when dropped, so every exit path undoes terminal setup.
struct TerminalGuard<F>
where
    F: FnMut() -> io::Result<()>,
{
    restore: Option<F>,
}

impl<F> TerminalGuard<F>
where
    F: FnMut() -> io::Result<()>,
{
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F> Drop for TerminalGuard<F>
where
    F: FnMut() -> io::Result<()>,
{
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            debug!("Restoring terminal");
            if let Err(e) = restore() {
                warn!(error = %e, "Failed to restore terminal");
            }
        }
    }
}

/// Leaves raw mode and the alternate screen, and shows the cursor again.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Run the interactive terminal game.
#[instrument(skip(config))]
pub fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, App::new(config));
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Blocking event loop: draw, wait for a key, apply it.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code)?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
