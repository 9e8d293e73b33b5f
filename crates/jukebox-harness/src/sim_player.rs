//! In-memory player implementing [`PlayerControl`].
//!
//! [`SimPlayer`] keeps a mutable [`Snapshot`], applies each operation to it
//! the way the daemon would, and records every call in order. Failures can be
//! injected to exercise transport and remote error paths.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jukebox_client::{ClientError, PlayerControl, Snapshot, Track};

/// One recorded player operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `GET /status`.
    Status,
    /// Start playback of a URI.
    Play(String),
    /// Toggle play/pause.
    PlayPause,
    /// Skip forward.
    Next,
    /// Skip back.
    Prev,
    /// Set volume in percent.
    SetVolume(u8),
    /// Seek to milliseconds.
    Seek(u64),
    /// Set shuffle.
    SetShuffle(bool),
    /// Append to queue.
    Enqueue(String),
}

#[derive(Debug, Default)]
struct PlayerState {
    snapshot: Snapshot,
    calls: Vec<Call>,
    failure: Option<ClientError>,
}

/// Simulated player.
///
/// Clones share state, so a test can keep a handle while the runtime owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct SimPlayer {
    state: Arc<Mutex<PlayerState>>,
}

impl SimPlayer {
    /// Create a stopped player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player reporting the given snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let player = Self::new();
        player.lock().snapshot = snapshot;
        player
    }

    /// Make every following call fail with `error`.
    pub fn fail_with(&self, error: ClientError) {
        self.lock().failure = Some(error);
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Current simulated state.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot.clone()
    }

    /// Change the state behind the dispatcher's back.
    pub fn update(&self, f: impl FnOnce(&mut Snapshot)) {
        f(&mut self.lock().snapshot);
    }

    fn lock(&self) -> MutexGuard<'_, PlayerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `call`, then either fail or apply `effect`.
    fn apply(&self, call: Call, effect: impl FnOnce(&mut Snapshot)) -> Result<(), ClientError> {
        let mut state = self.lock();
        tracing::trace!(?call, "sim player call");
        state.calls.push(call);
        if let Some(err) = state.failure.clone() {
            return Err(err);
        }
        effect(&mut state.snapshot);
        Ok(())
    }
}

impl PlayerControl for SimPlayer {
    async fn status(&self) -> Result<Snapshot, ClientError> {
        self.apply(Call::Status, |_| {})?;
        Ok(self.snapshot())
    }

    async fn play(&self, uri: &str) -> Result<(), ClientError> {
        self.apply(Call::Play(uri.to_string()), |s| {
            s.stopped = false;
            s.paused = false;
            s.track = Some(Track { uri: uri.to_string(), ..Track::default() });
        })
    }

    async fn play_pause(&self) -> Result<(), ClientError> {
        self.apply(Call::PlayPause, |s| s.paused = !s.paused)
    }

    async fn next(&self) -> Result<(), ClientError> {
        self.apply(Call::Next, |_| {})
    }

    async fn prev(&self) -> Result<(), ClientError> {
        self.apply(Call::Prev, |_| {})
    }

    async fn set_volume(&self, percent: u8) -> Result<(), ClientError> {
        self.apply(Call::SetVolume(percent), |s| s.volume = u32::from(percent))
    }

    async fn seek(&self, position_ms: u64) -> Result<(), ClientError> {
        self.apply(Call::Seek(position_ms), |s| {
            if let Some(track) = s.track.as_mut() {
                track.position = position_ms;
            }
        })
    }

    async fn set_shuffle(&self, enabled: bool) -> Result<(), ClientError> {
        self.apply(Call::SetShuffle(enabled), |s| s.shuffle = enabled)
    }

    async fn enqueue(&self, uri: &str) -> Result<(), ClientError> {
        self.apply(Call::Enqueue(uri.to_string()), |_| {})
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let player = SimPlayer::new();

        player.set_volume(30).await.unwrap();
        player.next().await.unwrap();

        assert_eq!(player.calls(), vec![Call::SetVolume(30), Call::Next]);
        assert_eq!(player.snapshot().volume, 30);
    }

    #[tokio::test]
    async fn injected_failure_is_returned_and_recorded() {
        let player = SimPlayer::new();
        player.fail_with(ClientError::Remote { status: 502, body: "bad gateway".into() });

        let err = player.play_pause().await.unwrap_err();

        assert_eq!(err, ClientError::Remote { status: 502, body: "bad gateway".into() });
        assert_eq!(player.calls(), vec![Call::PlayPause]);
        assert!(!player.snapshot().paused);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let player = SimPlayer::new();
        let handle = player.clone();

        player.set_shuffle(true).await.unwrap();

        assert!(handle.snapshot().shuffle);
    }
}
