//! acefit - Terminal Workout Tracker
//!
//! Log workouts under Warm-up, Workout and Cool-down, view a summary of
//! everything recorded this session, and see minutes per category as charts.
//! Nothing is persisted: the log is gone when the application exits.

use std::io;

use acefit::application::{App, AppMode};
use acefit::config::Cli;
use acefit::infrastructure::init_logging;
use acefit::presentation::{render_ui, InputHandler};
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

/// Entry point for the acefit terminal workout tracker.
///
/// Parses the command line, sets up logging and the terminal, then runs the
/// event loop until the user quits.
///
/// # Errors
///
/// Returns an error if logging or terminal setup fails, or if the terminal
/// interface fails during runtime.
fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path, &cli.log_level)?;
    }
    tracing::info!(tab = cli.tab.title(), "starting acefit");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_tab(cli.tab);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(workouts = app.store.len(), "exiting acefit");
    res.context("Terminal interface failed")
}

/// Main application event loop.
///
/// Draws the UI and dispatches key presses until 'q' is pressed in normal mode.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
