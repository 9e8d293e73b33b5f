//! Remote control trait seam.

use std::future::Future;

use crate::{ClientError, Snapshot};

/// Playback-control operations offered by the remote daemon.
///
/// Each call maps to exactly one request. Implementations must not retry.
///
/// # Implementations
///
/// - **Production**: [`crate::HttpClient`] talks HTTP to the daemon
/// - **Simulation**: an in-memory player that records calls
pub trait PlayerControl: Send + Sync {
    /// Fetch a fresh playback snapshot.
    fn status(&self) -> impl Future<Output = Result<Snapshot, ClientError>> + Send;

    /// Start playback of a track or context URI.
    fn play(&self, uri: &str) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Toggle between playing and paused.
    fn play_pause(&self) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Skip to the next track.
    fn next(&self) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Go back to the previous track.
    fn prev(&self) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Set the volume in percent (0-100).
    fn set_volume(&self, percent: u8) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Seek to an absolute position in milliseconds.
    fn seek(&self, position_ms: u64) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Enable or disable context shuffle.
    fn set_shuffle(&self, enabled: bool) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Append a track to the play queue.
    fn enqueue(&self, uri: &str) -> impl Future<Output = Result<(), ClientError>> + Send;
}
