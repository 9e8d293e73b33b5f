//! Command parsing.
//!
//! Lines split on runs of whitespace. The first token, lower-cased, names the
//! command; the rest are positional arguments. There is no quoting, escaping
//! or flag syntax, and surplus arguments are ignored.

use crate::CommandError;

/// A validated command, ready to run against the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `status`, `s`: show the current track.
    Status,
    /// `play <uri>`: start playback of a URI.
    Play {
        /// Track or context URI.
        uri: String,
    },
    /// `pause`, `pp`: toggle play/pause.
    PlayPause,
    /// `next`, `n`: skip to the next track.
    Next,
    /// `prev`, `p`: go to the previous track.
    Prev,
    /// `vol <0-100>`: set the volume.
    Volume {
        /// Volume in percent.
        percent: u8,
    },
    /// `seek <seconds>`: seek to an absolute position.
    Seek {
        /// Target position in milliseconds.
        position_ms: u64,
    },
    /// `shuffle`: flip context shuffle.
    Shuffle,
    /// `queue <uri>`: append a track to the queue.
    Queue {
        /// Track URI.
        uri: String,
    },
    /// `help`, `h`: show the command reference.
    Help,
    /// `quit`, `q`: end the session.
    Quit,
}

impl Command {
    /// Parse a completed line.
    ///
    /// Returns `Ok(None)` when the line holds no tokens at all.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let name = name.to_lowercase();
        let arg = tokens.next();

        let command = match name.as_str() {
            "status" | "s" => Self::Status,
            "play" => Self::Play { uri: required(arg, "Usage: play <spotify-uri>")? },
            "pause" | "pp" => Self::PlayPause,
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "vol" => {
                let raw = required(arg, "Usage: vol <0-100>")?;
                let percent = raw
                    .parse::<i64>()
                    .ok()
                    .and_then(|v| u8::try_from(v).ok())
                    .filter(|v| *v <= 100)
                    .ok_or(CommandError::InvalidArgument { reason: "Volume must be 0-100" })?;
                Self::Volume { percent }
            },
            "seek" => {
                let raw = required(arg, "Usage: seek <seconds>")?;
                let position_ms = raw
                    .parse::<i64>()
                    .ok()
                    .and_then(|secs| u64::try_from(secs).ok())
                    .and_then(|secs| secs.checked_mul(1000))
                    .ok_or(CommandError::InvalidArgument {
                        reason: "Seek position must be zero or a positive number of seconds",
                    })?;
                Self::Seek { position_ms }
            },
            "shuffle" => Self::Shuffle,
            "queue" => Self::Queue { uri: required(arg, "Usage: queue <spotify-uri>")? },
            "help" | "h" => Self::Help,
            "quit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown { name }),
        };

        Ok(Some(command))
    }
}

fn required(arg: Option<&str>, usage: &'static str) -> Result<String, CommandError> {
    arg.map(str::to_string).ok_or(CommandError::MissingArgument { usage })
}
