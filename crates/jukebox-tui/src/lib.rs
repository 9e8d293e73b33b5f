//! Terminal UI for the jukebox console.
//!
//! A thin shell over [`jukebox_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`jukebox_app::Runtime`].
//!
//! This crate only handles terminal input, styling and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod logging;
pub mod one_shot;
pub mod present;
pub mod terminal;
pub mod ui;

pub use jukebox_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
