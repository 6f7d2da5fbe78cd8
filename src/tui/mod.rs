pub mod action;
pub mod app;
pub mod error;
pub mod keys;
pub mod reducer;
pub mod state;
pub mod widgets;

#[cfg(test)]
mod integration_tests;

pub use action::Action;
pub use error::{TuiError, TuiResult};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, warn};

use crate::background::{Clock, RefreshTicker};
use crate::config::DisplayConfig;

/// How long to wait for a key before checking the ticker again
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

type RosterTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Main entry point for TUI mode
///
/// The refresh ticker lives exactly as long as this call.
pub async fn run(
    state: AppState,
    display: DisplayConfig,
    clock: Arc<dyn Clock>,
    refresh_interval: Duration,
) -> TuiResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut ticker = None;
    let ticks = RefreshTicker::replace(&mut ticker, clock, refresh_interval);

    let result = event_loop(&mut terminal, state, &display, ticks);
    drop(ticker);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut RosterTerminal,
    mut state: AppState,
    display: &DisplayConfig,
    mut ticks: mpsc::Receiver<DateTime<Utc>>,
) -> TuiResult<()> {
    loop {
        // Apply ticks that arrived since the last frame
        loop {
            match ticks.try_recv() {
                Ok(now) => state = reduce(state, &Action::Tick(now)),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("TICKER: channel closed while the view is mounted");
                    return Err(TuiError::TickerStopped);
                }
            }
        }

        terminal.draw(|f| {
            let area = f.area();
            app::render_app(&state, area, f.buffer_mut(), display);
        })?;

        if !event::poll(INPUT_POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(action) = key_to_action(key, &state) else {
                continue;
            };
            if action == Action::Quit {
                debug!("ACTION: Quitting application");
                return Ok(());
            }
            state = reduce(state, &action);
        }
    }
}
