//! Plain-text rendering of playback state.
//!
//! Pure functions, no I/O. The terminal UI styles the same pieces through
//! [`NowPlaying`] instead of re-parsing these strings.

use jukebox_client::Snapshot;

/// Shown when the player is stopped or has no current track.
pub const NOTHING_PLAYING: &str = "♫ Ready (nothing playing)";

/// Command reference shown by `help`.
pub const HELP_TEXT: &str = "jukebox commands
  status, s        Show current track
  play <uri>       Play a Spotify URI
  pause, pp        Toggle play/pause
  next, n          Next track
  prev, p          Previous track
  vol <0-100>      Set volume
  seek <seconds>   Seek to position
  shuffle          Toggle shuffle
  queue <uri>      Add track to queue
  help, h          Show this help
  quit, q          Exit";

/// Format milliseconds as `M:SS`, truncating partial seconds.
pub fn format_time(ms: u64) -> String {
    let total = ms / 1000;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Whether the current track is advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// Track is playing.
    Playing,
    /// Track is paused.
    Paused,
}

impl PlayState {
    /// Marker shown after the progress.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Playing => "▶ playing",
            Self::Paused => "⏸ paused",
        }
    }
}

/// Display fields for the current track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    /// Artist names joined with ", ".
    pub artists: String,
    /// Track name.
    pub title: String,
    /// Album name.
    pub album: String,
    /// Elapsed position as `M:SS`.
    pub position: String,
    /// Track length as `M:SS`.
    pub duration: String,
    /// Play/pause state.
    pub state: PlayState,
}

impl NowPlaying {
    /// Extract display fields. `None` if nothing is playing.
    pub fn from_snapshot(snapshot: &Snapshot) -> Option<Self> {
        let track = snapshot.now_playing()?;
        Some(Self {
            artists: track.artist_names.join(", "),
            title: track.name.clone(),
            album: track.album_name.clone(),
            position: format_time(track.position),
            duration: format_time(track.duration),
            state: if snapshot.paused { PlayState::Paused } else { PlayState::Playing },
        })
    }

    /// Headline: `♫ artists — title`.
    pub fn headline(&self) -> String {
        format!("♫ {} — {}", self.artists, self.title)
    }

    /// Progress: `pos / dur`.
    pub fn progress(&self) -> String {
        format!("{} / {}", self.position, self.duration)
    }
}

/// Render a snapshot as three lines of text, or [`NOTHING_PLAYING`].
pub fn format_status(snapshot: &Snapshot) -> String {
    NowPlaying::from_snapshot(snapshot).map_or_else(
        || NOTHING_PLAYING.to_string(),
        |np| format!("{}\n  {}\n  {}  {}", np.headline(), np.album, np.progress(), np.state.marker()),
    )
}
