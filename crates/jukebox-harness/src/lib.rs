//! Deterministic simulation harness for the jukebox console.
//!
//! In-memory implementations of the [`jukebox_client::PlayerControl`] and
//! [`jukebox_app::Driver`] traits so the production runtime can be driven by
//! scripted keystrokes against a player that records every call.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral checks over the history of
//! session states observed at each render. Use
//! [`InvariantRegistry::standard()`] for the common session invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_driver;
pub mod sim_player;

pub use invariants::{
    BusyBufferEmpty, CursorInBounds, Invariant, InvariantRegistry, InvariantResult,
    QuittingIsTerminal, SessionSnapshot, Violation,
};
pub use sim_driver::{SimDriver, SimDriverError};
pub use sim_player::{Call, SimPlayer};
