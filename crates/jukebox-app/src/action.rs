//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Dispatch a completed line and report back with
    /// [`crate::AppEvent::Dispatched`].
    Execute {
        /// Submitted line, untrimmed.
        line: String,
    },
}
