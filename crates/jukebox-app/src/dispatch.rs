//! Command dispatcher.
//!
//! The [`Dispatcher`] turns a completed line into exactly one [`Outcome`],
//! calling the wrapped [`PlayerControl`] at most as often as the command
//! requires (twice for `shuffle`, once otherwise). Validation failures never
//! reach the player.

use jukebox_client::PlayerControl;

use crate::{Command, Outcome, Reply};

/// Result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Reply or error to show.
    pub outcome: Outcome,
    /// The command asked to end the session.
    pub quit: bool,
}

impl Dispatch {
    fn new(outcome: Outcome) -> Self {
        Self { outcome, quit: false }
    }
}

/// Routes parsed commands to the player.
#[derive(Debug, Clone)]
pub struct Dispatcher<C> {
    client: C,
}

impl<C: PlayerControl> Dispatcher<C> {
    /// Create a dispatcher over the given player client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Parse and run one line.
    pub async fn dispatch(&self, line: &str) -> Dispatch {
        match Command::parse(line) {
            Ok(None) => Dispatch::new(Ok(Reply::Nothing)),
            Ok(Some(Command::Quit)) => Dispatch { outcome: Ok(Reply::Bye), quit: true },
            Ok(Some(command)) => Dispatch::new(self.run(command).await),
            Err(err) => {
                tracing::debug!(%err, "rejected command line");
                Dispatch::new(Err(err))
            },
        }
    }

    /// Run an already parsed command.
    ///
    /// `Quit` only produces [`Reply::Bye`] here; ending the session is the
    /// caller's concern (see [`Dispatch::quit`]).
    pub async fn run(&self, command: Command) -> Outcome {
        tracing::debug!(?command, "dispatching");

        let reply = match command {
            Command::Status => Reply::Status(Box::new(self.client.status().await?)),
            Command::Play { uri } => {
                self.client.play(&uri).await?;
                Reply::Playing
            },
            Command::PlayPause => {
                self.client.play_pause().await?;
                Reply::Toggled
            },
            Command::Next => {
                self.client.next().await?;
                Reply::NextTrack
            },
            Command::Prev => {
                self.client.prev().await?;
                Reply::PreviousTrack
            },
            Command::Volume { percent } => {
                self.client.set_volume(percent).await?;
                Reply::Volume(percent)
            },
            Command::Seek { position_ms } => {
                self.client.seek(position_ms).await?;
                Reply::Seeked { position_ms }
            },
            Command::Shuffle => {
                // Read-then-write: a change made elsewhere between the two
                // calls is overwritten.
                let current = self.client.status().await?;
                let enabled = !current.shuffle;
                self.client.set_shuffle(enabled).await?;
                Reply::Shuffle(enabled)
            },
            Command::Queue { uri } => {
                self.client.enqueue(&uri).await?;
                Reply::Queued
            },
            Command::Help => Reply::Help,
            Command::Quit => Reply::Bye,
        };

        Ok(reply)
    }
}

