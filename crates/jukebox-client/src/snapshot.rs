//! Playback state as reported by `GET /status`.

use serde::{Deserialize, Serialize};

/// Immutable view of the daemon's playback state.
///
/// Always fetched fresh; never cached across commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Nothing is loaded.
    pub stopped: bool,
    /// Playback is paused.
    pub paused: bool,
    /// The daemon is buffering.
    pub buffering: bool,
    /// Volume in percent.
    pub volume: u32,
    /// Number of discrete volume steps supported by the device.
    pub volume_steps: u32,
    /// Context shuffle is enabled.
    #[serde(rename = "shuffle_context")]
    pub shuffle: bool,
    /// Current track. `None` if nothing is loaded.
    pub track: Option<Track>,
}

impl Snapshot {
    /// Current track if something is actually playing or paused.
    pub fn now_playing(&self) -> Option<&Track> {
        if self.stopped { None } else { self.track.as_ref() }
    }
}

/// Track metadata with playback progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    /// Track URI.
    pub uri: String,
    /// Display name.
    pub name: String,
    /// Artist display names, in credit order.
    pub artist_names: Vec<String>,
    /// Album display name.
    pub album_name: String,
    /// Cover art reference. `None` if the daemon has none.
    pub album_cover_url: Option<String>,
    /// Elapsed position in milliseconds.
    pub position: u64,
    /// Track length in milliseconds.
    pub duration: u64,
}
