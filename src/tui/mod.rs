//! Terminal front end: renders regions with ratatui and feeds key presses
//! back as UI events.

mod app;
mod offline;
mod render;

pub use app::{KeyAction, TerminalApp};
pub use offline::{LocalSession, SharedState};
pub use render::{draw_region, element_lines, focusable_ids};

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::manager::ScreenManager;
use crate::region::{MemoryRegions, ScreenRegions};
use crate::session::SessionState;
use crate::ClientConfig;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs the interactive app against the offline session.
#[instrument(skip(config))]
pub fn run_interactive(config: &ClientConfig) -> Result<()> {
    info!("Starting interactive client");
    let mut app = TerminalApp::new(config);
    let mut terminal = setup_terminal()?;
    let res = app.run(&mut terminal);
    restore_terminal(&mut terminal)?;
    if let Err(err) = &res {
        error!(error = ?err, "App loop error");
    }
    res
}

/// Renders a single snapshot and waits for a key press.
#[instrument(skip(config, snapshot), fields(screen = %snapshot.screen()))]
pub fn run_preview(config: &ClientConfig, snapshot: &SessionState) -> Result<()> {
    let session = LocalSession::new(*config.auth_enabled());
    let mut manager = ScreenManager::new(
        MemoryRegions::standard(),
        Box::new(session),
        config.default_party().clone(),
    );
    manager.update(snapshot);

    let mut terminal = setup_terminal()?;
    let res = (|| -> Result<()> {
        terminal.draw(|f| {
            draw_region(
                f,
                manager.regions().region(manager.active()),
                manager.regions().indicator(),
                None,
                "Press any key to exit",
            )
        })?;
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind != KeyEventKind::Release
            {
                return Ok(());
            }
        }
    })();
    restore_terminal(&mut terminal)?;
    res
}
