//! Generic runtime for session orchestration.
//!
//! The Runtime drives the session loop, coordinating between:
//! - [`App`]: Session state machine
//! - [`Dispatcher`]: Command execution against the player
//! - [`Driver`]: Platform-specific I/O
//!
//! Exactly one event is handled at a time. A dispatch requested by that
//! event is awaited to completion before the next event is polled, so
//! commands never overlap.

use jukebox_client::PlayerControl;

use crate::{App, AppAction, AppEvent, Dispatcher, Driver};

/// Generic runtime that orchestrates App, Dispatcher, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `C`: Player client used by the dispatcher
pub struct Runtime<D, C> {
    driver: D,
    app: App,
    dispatcher: Dispatcher<C>,
}

impl<D, C> Runtime<D, C>
where
    D: Driver,
    C: PlayerControl,
{
    /// Create a new runtime.
    pub fn new(driver: D, client: C, server_addr: String) -> Self {
        Self { driver, app: App::new(server_addr), dispatcher: Dispatcher::new(client) }
    }

    /// Run the session loop until the App asks to quit.
    ///
    /// Returns the final App state.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App, D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                break;
            }
        }

        self.driver.stop();
        Ok(self.app)
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let Some(event) = self.driver.poll_event().await? else {
            return Ok(false);
        };

        let actions = self.app.handle(event);
        self.process_actions(actions).await
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),
                    AppAction::Execute { line } => {
                        let dispatch = self.dispatcher.dispatch(&line).await;
                        if let Err(err) = &dispatch.outcome {
                            tracing::info!(%line, %err, "command failed");
                        }
                        pending_actions.extend(self.app.handle(AppEvent::Dispatched(dispatch)));
                    },
                }
            }
        }
        Ok(false)
    }
}
