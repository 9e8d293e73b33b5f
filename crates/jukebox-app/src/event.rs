//! Application input events.
//!
//! This module defines [`AppEvent`], the complete set of inputs that drive
//! the [`crate::App`] state machine.
//!
//! Events originate from two sources:
//! - User interactions (keys, resize) and system ticks.
//! - Results of commands the runtime dispatched on the App's behalf.

use crate::{Dispatch, KeyInput};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// A previously requested [`crate::AppAction::Execute`] finished.
    Dispatched(Dispatch),
}
