//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard and paste events and ratatui for rendering.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use jukebox_app::{App, AppEvent, Driver, KeyInput};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// Interval between tick events while the user is idle.
const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Puts the terminal in raw mode on an alternate screen with bracketed paste
/// enabled. Everything is restored on drop, or by [`TerminalDriver::new`]
/// itself when setup fails partway.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
}

impl TerminalDriver {
    /// Take over the terminal.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;

        setup_or_restore(
            || {
                stdout().execute(EnterAlternateScreen)?;
                stdout().execute(EnableBracketedPaste)?;

                let backend = CrosstermBackend::new(stdout());
                let terminal = Terminal::new(backend)?;
                let event_stream = EventStream::new();

                Ok(Self { terminal, event_stream })
            },
            restore_terminal,
        )
    }

    /// Convert a crossterm key press to a [`KeyInput`].
    ///
    /// Ctrl chords map to editing commands; unbound chords are dropped rather
    /// than inserted as text.
    pub fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(KeyInput::Interrupt),
                KeyCode::Char('a') => Some(KeyInput::Home),
                KeyCode::Char('e') => Some(KeyInput::End),
                KeyCode::Char('u') => Some(KeyInput::KillToStart),
                KeyCode::Char('k') => Some(KeyInput::KillToEnd),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }

    /// Convert a terminal event to an [`AppEvent`].
    pub fn convert_event(event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::convert_key(key).map(AppEvent::Key)
            },
            Event::Paste(text) => Some(AppEvent::Key(KeyInput::Paste(text))),
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        tokio::select! {
            biased;

            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => Ok(Self::convert_event(event)),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    // Input closed; treat like Ctrl-C.
                    None => Ok(Some(AppEvent::Key(KeyInput::Interrupt))),
                }
            }

            () = tokio::time::sleep(TICK_INTERVAL) => Ok(Some(AppEvent::Tick)),
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Run `setup` once raw mode is on; call `restore` if it fails, since no
/// driver exists yet whose `Drop` would.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T, TerminalError>,
    restore: impl FnOnce(),
) -> Result<T, TerminalError> {
    setup().inspect_err(|_| restore())
}

/// Best effort; every step runs even if an earlier one fails.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(DisableBracketedPaste);
    let _ = stdout().execute(LeaveAlternateScreen);
}
