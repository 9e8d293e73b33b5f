//! Application layer for the jukebox console.
//!
//! Pure state machines and a generic runtime for interactive playback
//! control, enabling deterministic simulation testing with the same code that
//! runs in production.
//!
//! # Components
//!
//! - [`LineEditor`]: Text buffer and cursor driven by [`KeyInput`]
//! - [`Dispatcher`]: Parses completed lines and runs them against a
//!   [`jukebox_client::PlayerControl`]
//! - [`App`]: Session state machine (editor, last output, quit flag)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod command;
mod dispatch;
mod driver;
mod editor;
mod event;
mod format;
mod input;
mod reply;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use command::Command;
pub use dispatch::{Dispatch, Dispatcher};
pub use driver::Driver;
pub use editor::{EditOutcome, LineEditor};
pub use event::AppEvent;
pub use format::{HELP_TEXT, NOTHING_PLAYING, NowPlaying, PlayState, format_status, format_time};
pub use input::KeyInput;
pub use reply::{CommandError, ErrorKind, Outcome, Reply};
pub use runtime::Runtime;
