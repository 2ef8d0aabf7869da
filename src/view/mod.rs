//! TUI rendering and terminal management (impure shell)

pub mod contact_row;
pub mod infinite_list;
pub mod status_bar;
mod styles;

pub use contact_row::{contact_text, RowContext};
pub use infinite_list::InfiniteList;
pub use status_bar::render_status_bar;
pub use styles::{ColorConfig, ListStyles};

use crate::config::KeyBindings;
use crate::model::Contact;
use crate::source::ContactSource;
use crate::state::BrowserState;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Lines moved per mouse wheel notch.
const WHEEL_LINES: isize = 3;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::error::InputError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, S>
where
    B: Backend,
{
    terminal: Terminal<B>,
    browser: BrowserState<S>,
    key_bindings: KeyBindings,
    styles: ListStyles,
}

impl<S: ContactSource> TuiApp<CrosstermBackend<Stdout>, S> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        browser: BrowserState<S>,
        key_bindings: KeyBindings,
        styles: ListStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            browser,
            key_bindings,
            styles,
        })
    }
}

impl<B, S> TuiApp<B, S>
where
    B: Backend,
    S: ContactSource,
{
    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). A requested page is delivered
    /// on the tick after the render that requested it, so the loading footer
    /// is visible in between.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK_INTERVAL: Duration = Duration::from_millis(50);

        self.render()?;

        loop {
            let mut dirty = false;
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => dirty = self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.tick(Instant::now())? || dirty {
                self.render()?;
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        match self.key_bindings.get(key) {
            Some(action) => {
                debug!(?action, "Key action");
                self.browser.apply(action)
            }
            None => false,
        }
    }

    /// Wheel scrolling. Returns whether anything moved.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        self.handle_mouse_at(mouse, Instant::now())
    }

    /// One notch is one scroll step, so its velocity is sampled once.
    fn handle_mouse_at(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        let delta = match mouse.kind {
            MouseEventKind::ScrollDown => WHEEL_LINES,
            MouseEventKind::ScrollUp => -WHEEL_LINES,
            _ => return false,
        };
        self.browser.scroll_lines(delta, now);
        true
    }

    /// Deliver a pending page and decay scroll-seek.
    ///
    /// Returns whether the screen needs repainting.
    fn tick(&mut self, now: Instant) -> Result<bool, TuiError> {
        let was_seeking = self.browser.list_state().is_seeking();
        self.browser.tick(now);
        let delivered = self.browser.deliver_pending()?;
        Ok(delivered || was_seeking)
    }

    /// Draw, and draw again if the list asked for more data so the loading
    /// footer shows up right away.
    fn render(&mut self) -> Result<(), TuiError> {
        if self.draw()? {
            self.draw()?;
        }
        Ok(())
    }

    /// Render the current frame
    ///
    /// Returns whether a new page was requested.
    fn draw(&mut self) -> Result<bool, TuiError> {
        let styles = self.styles;
        let status = self.browser.status();
        let (collection, list, translator) = self.browser.render_parts();
        let mut end_reached = false;

        self.terminal.draw(|frame| {
            let [list_area, status_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
            let context = RowContext {
                translator,
                styles,
                width: list_area.width,
            };
            let widget = InfiniteList::<Contact, RowContext>::new(collection, |_, contact, context| {
                contact_text(contact, context)
            })
            .context(&context)
            .loading(status.loading)
            .empty_placeholder(translator.t("list.empty"))
            .styles(styles)
            .on_end_reached(|| end_reached = true);
            frame.render_stateful_widget(widget, list_area, list);
            render_status_bar(frame, status_area, &status, translator, &styles);
        })?;

        Ok(end_reached && self.browser.request_more())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B, S> TuiApp<B, S>
where
    B: Backend,
    S: ContactSource,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, browser: BrowserState<S>) -> Self {
        Self {
            terminal,
            browser,
            key_bindings: KeyBindings::default(),
            styles: ListStyles::with_color_config(ColorConfig::new(false)),
        }
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) -> bool {
        self.handle_mouse(mouse)
    }

    pub(crate) fn handle_mouse_at_test(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        self.handle_mouse_at(mouse, now)
    }

    pub(crate) fn tick_test(&mut self, now: Instant) -> Result<bool, TuiError> {
        self.tick(now)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.render()
    }

    pub(crate) fn browser(&self) -> &BrowserState<S> {
        &self.browser
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source<S: ContactSource>(
    browser: BrowserState<S>,
    key_bindings: KeyBindings,
    styles: ListStyles,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(browser, key_bindings, styles)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
