//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive session completely decoupled from I/O and the player.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the single [`LineEditor`] of the session.
//! - Holds the output of the most recent command.
//! - Tracks whether a dispatch is outstanding and whether the session is
//!   ending.

use crate::{AppAction, AppEvent, EditOutcome, KeyInput, LineEditor, Outcome};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Command line being edited.
    editor: LineEditor,
    /// Result of the last dispatched command. `None` before the first one.
    output: Option<Outcome>,
    /// A submitted line has not been reported back yet.
    busy: bool,
    /// Session is ending. Never reset once set.
    quitting: bool,
    /// Number of dispatches reported back so far.
    completed: usize,
    /// Player address, for display.
    server_addr: String,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App for the given player address.
    pub fn new(server_addr: String) -> Self {
        Self {
            editor: LineEditor::new(),
            output: None,
            busy: false,
            quitting: false,
            completed: 0,
            server_addr,
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        if self.quitting {
            return vec![];
        }

        match event {
            AppEvent::Key(key) => {
                // Keys are dropped while a dispatch is outstanding so the
                // buffer never changes under an in-flight command.
                if self.busy && key != KeyInput::Interrupt {
                    tracing::debug!(?key, "key ignored while dispatch is outstanding");
                    return vec![];
                }

                let (editor, outcome) = std::mem::take(&mut self.editor).apply(key);
                self.editor = editor;

                match outcome {
                    EditOutcome::Editing => vec![AppAction::Render],
                    EditOutcome::Submitted(line) => {
                        self.busy = true;
                        vec![AppAction::Render, AppAction::Execute { line }]
                    },
                    EditOutcome::Interrupted => {
                        self.quitting = true;
                        vec![AppAction::Quit]
                    },
                }
            },
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Dispatched(dispatch) => {
                self.busy = false;
                self.completed += 1;
                self.output = Some(dispatch.outcome);
                if dispatch.quit {
                    self.quitting = true;
                    vec![AppAction::Render, AppAction::Quit]
                } else {
                    vec![AppAction::Render]
                }
            },
        }
    }

    /// Command line being edited.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Result of the last dispatched command. `None` before the first one.
    pub fn output(&self) -> Option<&Outcome> {
        self.output.as_ref()
    }

    /// Whether a submitted line is still being dispatched.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Number of dispatches reported back so far.
    pub fn completed_commands(&self) -> usize {
        self.completed
    }

    /// Whether the session is ending.
    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Player address (base URL).
    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandError, Dispatch, Reply};

    fn type_line(app: &mut App, text: &str) -> Vec<AppAction> {
        for c in text.chars() {
            app.handle(AppEvent::Key(KeyInput::Char(c)));
        }
        app.handle(AppEvent::Key(KeyInput::Enter))
    }

    #[test]
    fn submit_requests_execution() {
        let mut app = App::new("http://localhost:3678".into());

        let actions = type_line(&mut app, "vol 50");

        assert_eq!(actions, vec![AppAction::Render, AppAction::Execute {
            line: "vol 50".into()
        }]);
        assert!(app.is_busy());
        assert!(app.editor().is_empty());
    }

    #[test]
    fn blank_submit_does_nothing() {
        let mut app = App::new("http://localhost:3678".into());

        let actions = type_line(&mut app, "  ");

        assert_eq!(actions, vec![AppAction::Render]);
        assert!(!app.is_busy());
        assert_eq!(app.editor().text(), "  ");
    }

    #[test]
    fn keys_ignored_while_busy() {
        let mut app = App::new("http://localhost:3678".into());
        type_line(&mut app, "next");

        let actions = app.handle(AppEvent::Key(KeyInput::Char('x')));

        assert!(actions.is_empty());
        assert!(app.editor().is_empty());
    }

    #[test]
    fn interrupt_honored_while_busy() {
        let mut app = App::new("http://localhost:3678".into());
        type_line(&mut app, "status");

        let actions = app.handle(AppEvent::Key(KeyInput::Interrupt));

        assert_eq!(actions, vec![AppAction::Quit]);
        assert!(app.is_quitting());
    }

    #[test]
    fn dispatched_stores_output() {
        let mut app = App::new("http://localhost:3678".into());
        type_line(&mut app, "next");

        let actions = app.handle(AppEvent::Dispatched(Dispatch {
            outcome: Ok(Reply::NextTrack),
            quit: false,
        }));

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.output(), Some(&Ok(Reply::NextTrack)));
        assert!(!app.is_busy());
        assert!(!app.is_quitting());
    }

    #[test]
    fn errors_do_not_quit() {
        let mut app = App::new("http://localhost:3678".into());
        type_line(&mut app, "xyz");

        let actions = app.handle(AppEvent::Dispatched(Dispatch {
            outcome: Err(CommandError::Unknown { name: "xyz".into() }),
            quit: false,
        }));

        assert_eq!(actions, vec![AppAction::Render]);
        assert!(!app.is_quitting());
    }

    #[test]
    fn quit_dispatch_ends_session() {
        let mut app = App::new("http://localhost:3678".into());
        type_line(&mut app, "quit");

        let actions = app.handle(AppEvent::Dispatched(Dispatch { outcome: Ok(Reply::Bye), quit: true }));

        assert_eq!(actions, vec![AppAction::Render, AppAction::Quit]);
        assert!(app.is_quitting());
    }

    #[test]
    fn interrupt_quits_with_pending_text() {
        let mut app = App::new("http://localhost:3678".into());
        app.handle(AppEvent::Key(KeyInput::Char('v')));

        let actions = app.handle(AppEvent::Key(KeyInput::Interrupt));

        assert_eq!(actions, vec![AppAction::Quit]);
        assert!(app.is_quitting());
    }

    #[test]
    fn resize_records_dimensions() {
        let mut app = App::new("http://localhost:3678".into());

        let actions = app.handle(AppEvent::Resize(120, 40));

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.terminal_size(), (120, 40));
    }
}
