//! Client errors.

use thiserror::Error;

/// Errors returned by [`crate::PlayerControl`] operations.
///
/// Messages are stored as strings so results can be cloned into UI events
/// and compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The daemon could not be reached (connect, timeout, body read).
    #[error("cannot connect to player at {addr}: {message}")]
    Transport {
        /// Base URL that was targeted.
        addr: String,
        /// Underlying failure.
        message: String,
    },

    /// The daemon answered with a non-success status.
    #[error("API error {status}: {body}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// The status response could not be decoded.
    #[error("invalid status response: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl ClientError {
    /// Whether the failure happened before the daemon produced an answer.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Remote { .. })
    }
}
