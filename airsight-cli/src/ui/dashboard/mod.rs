//! Main TUI dashboard for AirSight.
//!
//! Displays the drawn marker set, per-source reading summaries, fetch
//! activity, and the most recent fetch error.
//!
//! # Module Structure
//!
//! - `state` - Event and configuration types (no rendering dependencies)
//! - `render` - Layout orchestration
//! - `utils` - Formatting and non-TUI output

mod render;
pub mod state;
pub mod utils;

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use airsight::engine::SceneSnapshot;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

// Re-export public types from state module
pub use state::{DashboardConfig, DashboardEvent, QUIT_CONFIRM_TIMEOUT, SPINNER_FRAMES};

// Re-export utility functions
pub use utils::print_status;

/// The main dashboard UI.
///
/// Owns the terminal for its lifetime: raw mode and the alternate screen
/// are entered on creation and restored on drop, so a panic or early
/// return still leaves the terminal usable.
pub struct Dashboard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    config: DashboardConfig,
    shutdown: Arc<AtomicBool>,
    start_time: Instant,
    /// Spinner frame index for the fetch-activity animation.
    spinner_frame: usize,
    /// Quit confirmation state - Some(timestamp) when awaiting confirmation.
    quit_confirmation: Option<Instant>,
}

impl Dashboard {
    /// Create a new dashboard, taking over the terminal.
    pub fn new(config: DashboardConfig, shutdown: Arc<AtomicBool>) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            config,
            shutdown,
            start_time: Instant::now(),
            spinner_frame: 0,
            quit_confirmation: None,
        })
    }

    /// Restore terminal to normal state.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the dashboard from the given scene snapshot.
    pub fn draw(&mut self, snapshot: &SceneSnapshot) -> io::Result<()> {
        let uptime = self.start_time.elapsed();
        let confirmation_remaining = self.confirmation_remaining();

        // Advance the spinner only while fetches are in flight
        let spinner = if snapshot.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            Some(SPINNER_FRAMES[self.spinner_frame])
        } else {
            None
        };

        // Clone for use in the draw closure
        let config = self.config.clone();

        self.terminal.draw(|frame| {
            render::render_ui(
                frame,
                snapshot,
                &config,
                uptime,
                spinner,
                confirmation_remaining,
            );
        })?;

        Ok(())
    }

    /// Check for events (non-blocking).
    ///
    /// Implements a confirmation flow for quit to prevent accidental
    /// termination:
    /// - First 'q' or Esc press: enters confirmation mode (5 second timeout)
    /// - Second 'q' or 'y'/'Y': confirms quit
    /// - 'n'/'N' or Esc: cancels confirmation
    /// - Timeout: auto-cancels after 5 seconds
    pub fn poll_event(&mut self) -> io::Result<Option<DashboardEvent>> {
        // Check shutdown flag first (e.g., Ctrl+C signal)
        if self.shutdown.load(Ordering::SeqCst) {
            return Ok(Some(DashboardEvent::Quit));
        }

        // Check for confirmation timeout (auto-cancel)
        if let Some(confirm_time) = self.quit_confirmation {
            if confirm_time.elapsed() > QUIT_CONFIRM_TIMEOUT {
                self.quit_confirmation = None;
            }
        }

        // Poll for keyboard events
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if self.quit_confirmation.is_some() {
                        // Currently awaiting confirmation
                        match key.code {
                            // Confirm quit
                            KeyCode::Char('q')
                            | KeyCode::Char('Q')
                            | KeyCode::Char('y')
                            | KeyCode::Char('Y') => {
                                return Ok(Some(DashboardEvent::Quit));
                            }
                            // Cancel confirmation
                            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                                self.quit_confirmation = None;
                            }
                            _ => {}
                        }
                    } else {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                // Enter confirmation mode instead of quitting immediately
                                self.quit_confirmation = Some(Instant::now());
                            }
                            KeyCode::Char('r') | KeyCode::Char('R') => {
                                return Ok(Some(DashboardEvent::Refresh));
                            }
                            KeyCode::Char('l') | KeyCode::Char('L') => {
                                return Ok(Some(DashboardEvent::CycleLayer));
                            }
                            KeyCode::Char('s') | KeyCode::Char('S') => {
                                return Ok(Some(DashboardEvent::ToggleStations));
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    /// Returns the remaining time for confirmation timeout, if confirming.
    fn confirmation_remaining(&self) -> Option<Duration> {
        self.quit_confirmation
            .map(|t| QUIT_CONFIRM_TIMEOUT.saturating_sub(t.elapsed()))
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
