//! Dispatch results.
//!
//! [`Reply`] and [`CommandError`] are semantic values. Their `Display` output
//! is plain text; styling is applied by the presentation layer.

use std::fmt;

use jukebox_client::{ClientError, Snapshot};
use thiserror::Error;

use crate::{HELP_TEXT, format_status, format_time};

/// Result of dispatching one line.
pub type Outcome = Result<Reply, CommandError>;

/// Successful command result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Blank line; nothing to show.
    Nothing,
    /// Fresh playback snapshot.
    Status(Box<Snapshot>),
    /// Playback of a URI started.
    Playing,
    /// Play/pause toggled.
    Toggled,
    /// Skipped forward.
    NextTrack,
    /// Skipped back.
    PreviousTrack,
    /// Volume set to the given percent.
    Volume(u8),
    /// Seeked to the given position.
    Seeked {
        /// New position in milliseconds.
        position_ms: u64,
    },
    /// Shuffle set to the given (new) state.
    Shuffle(bool),
    /// Track appended to the queue.
    Queued,
    /// Command reference.
    Help,
    /// Session is ending.
    Bye,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => Ok(()),
            Self::Status(snapshot) => f.write_str(&format_status(snapshot)),
            Self::Playing => f.write_str("Playing"),
            Self::Toggled => f.write_str("Toggled play/pause"),
            Self::NextTrack => f.write_str("Next track"),
            Self::PreviousTrack => f.write_str("Previous track"),
            Self::Volume(percent) => write!(f, "Volume: {percent}%"),
            Self::Seeked { position_ms } => write!(f, "Seeked to {}", format_time(*position_ms)),
            Self::Shuffle(true) => f.write_str("Shuffle on"),
            Self::Shuffle(false) => f.write_str("Shuffle off"),
            Self::Queued => f.write_str("Added to queue"),
            Self::Help => f.write_str(HELP_TEXT),
            Self::Bye => f.write_str("Bye!"),
        }
    }
}

/// Error categories. Every category ends only the current command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing arguments. The player was not contacted.
    Usage,
    /// The player could not be reached.
    Transport,
    /// The player rejected the request.
    Remote,
    /// Unrecognized command token.
    UnknownCommand,
}

/// Failed command result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A required argument is absent.
    #[error("{usage}")]
    MissingArgument {
        /// Usage line naming the expected argument shape.
        usage: &'static str,
    },

    /// An argument failed validation.
    #[error("{reason}")]
    InvalidArgument {
        /// What the argument must look like.
        reason: &'static str,
    },

    /// The command name is not in the table.
    #[error("Unknown command: {name} (type 'help' for commands)")]
    Unknown {
        /// Lower-cased command token.
        name: String,
    },

    /// The player call failed.
    #[error("Error: {0}")]
    Client(#[from] ClientError),
}

impl CommandError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } | Self::InvalidArgument { .. } => ErrorKind::Usage,
            Self::Unknown { .. } => ErrorKind::UnknownCommand,
            Self::Client(err) if err.is_transport() => ErrorKind::Transport,
            Self::Client(_) => ErrorKind::Remote,
        }
    }
}
