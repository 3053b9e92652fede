//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Flow, Focus};
pub use input::{Action, action_for};
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::Settings;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
///
/// Logs go to the settings' log file so they never draw over the screen.
pub fn run(settings: &Settings) -> Result<()> {
    crate::init_file_tracing(settings.log_file())?;
    info!(?settings, "Starting rewind TUI");

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("failed to enter alternate screen");
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("failed to create terminal");
        }
    };

    let app = App::new(*settings.draw_policy());
    let res = run_app(&mut terminal, app, settings);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        error!(error = ?err, "Event loop error");
    }
    info!("Rewind TUI stopped");
    res
}

/// Draw, wait for a key, apply it; one event at a time.
#[instrument(skip_all)]
fn run_app(terminal: &mut Term, mut app: App, settings: &Settings) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if !event::poll(settings.tick_rate())? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key)
            && app.handle(action) == Flow::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
