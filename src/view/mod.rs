//! TUI rendering and terminal management (impure shell)

mod compose;
pub mod constants;
mod feed;
mod layout;
pub mod post_card;

pub use compose::shift_rect;
pub use layout::{render_layout, status_hint};

use crate::config::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::services::PREVIEW_POST;
use crate::state::{
    handle_modal_key, handle_preview_mouse, handle_timeline_action, handle_timeline_mouse,
    AppState, PreviewHitAreas,
};
use crate::view::constants::{IDLE_POLL_INTERVAL, SETTLE_POLL_INTERVAL};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use tracing::debug;

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    /// Preview regions from the last frame (for press classification)
    last_preview: Option<PreviewHitAreas>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(mut app_state: AppState) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        if let Ok(size) = terminal.size() {
            app_state.set_viewport_rows(size.height);
        }

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            last_preview: None,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Polls quickly only while a
    /// swipe completion is waiting on its delay.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            if !self.app_state.poll_settles(Instant::now()).is_empty() {
                self.draw()?;
            }

            let timeout = if self.app_state.settle_pending() {
                SETTLE_POLL_INTERVAL
            } else {
                IDLE_POLL_INTERVAL
            };

            if !event::poll(timeout)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(_, height) => self.handle_resize(height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a keyboard event. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if handle_modal_key(&mut self.app_state, key) {
            return false;
        }

        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(action) => {
                handle_timeline_action(&mut self.app_state, action);
                false
            }
            None => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.modals.is_active(PREVIEW_POST) {
            let areas = self.last_preview.unwrap_or_default();
            if let Some(settle) =
                handle_preview_mouse(&mut self.app_state, mouse, &areas, Instant::now())
            {
                debug!(outcome = ?settle.outcome, delay_ms = settle.delay.as_millis() as u64, "preview released");
            }
        } else if !self.app_state.modals.container_active() {
            handle_timeline_mouse(&mut self.app_state, mouse);
        }
    }

    fn handle_resize(&mut self, height: u16) {
        self.app_state.set_viewport_rows(height);
    }

    fn draw(&mut self) -> Result<(), AppError> {
        let state = &self.app_state;
        let mut preview = None;
        self.terminal.draw(|frame| {
            preview = render_layout(frame, state);
        })?;
        self.last_preview = preview;
        Ok(())
    }
}

// ===== Test Helpers =====
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, mut app_state: AppState) -> Self {
        if let Ok(size) = terminal.size() {
            app_state.set_viewport_rows(size.height);
        }
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            last_preview: None,
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    pub(crate) fn last_preview(&self) -> Option<PreviewHitAreas> {
        self.last_preview
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), AppError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI over `app_state`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. Logging must be initialized by the caller.
pub fn run_with_state(app_state: AppState) -> Result<(), AppError> {
    let mut app = TuiApp::new(app_state)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
