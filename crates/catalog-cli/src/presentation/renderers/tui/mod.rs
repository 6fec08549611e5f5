mod app;
mod components;
mod ui;

use anyhow::Result;
use catalog_runtime::StoreSnapshot;
use catalog_types::FeatureFlags;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::watch;

use app::AppState;

/// Raw mode, alternate screen and mouse capture for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }

    fn restore() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Self::restore();
    }
}

/// Interactive product surface fed by a store's snapshot channel.
pub struct TuiCatalogView;

impl TuiCatalogView {
    pub fn run(updates: watch::Receiver<StoreSnapshot>, flags: FeatureFlags) -> Result<()> {
        let guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            TerminalGuard::restore();
            std::process::exit(0);
        })?;

        let mut app_state = AppState::new(updates, flags);
        let tick_rate = Duration::from_millis(100);

        while !app_state.should_quit {
            terminal.draw(|f| {
                ui::draw(f, &mut app_state);
            })?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app_state.handle_key(key);
                    }
                    Event::Mouse(mouse) => app_state.handle_mouse(mouse),
                    // The next draw re-measures the grid area
                    Event::Resize(..) => {}
                    _ => {}
                }
            }

            app_state.sync_store();
        }

        terminal.show_cursor()?;
        drop(guard);

        Ok(())
    }
}
