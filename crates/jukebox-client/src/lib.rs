//! Remote control client for the playback daemon.
//!
//! A thin layer over the daemon's HTTP API. Every operation issues exactly
//! one request and reports the outcome; nothing is cached or retried.
//!
//! # Components
//!
//! - [`PlayerControl`]: Trait seam consumed by the command dispatcher
//! - [`HttpClient`]: reqwest implementation of [`PlayerControl`]
//! - [`Snapshot`]: Decoded playback state returned by `GET /status`

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod control;
mod error;
mod http;
mod snapshot;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use control::PlayerControl;
pub use error::ClientError;
pub use http::HttpClient;
pub use snapshot::{Snapshot, Track};
