//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal driver but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`jukebox_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! When the scripted events run out the driver delivers
//! [`KeyInput::Interrupt`], so every scripted session terminates.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use jukebox_app::{App, AppEvent, Driver, KeyInput};
use thiserror::Error;

use crate::invariants::{InvariantRegistry, SessionSnapshot};

/// Error type for simulation driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SimDriverError: {0}")]
pub struct SimDriverError(pub String);

/// Shared state for event injection and render capture.
#[derive(Debug, Default)]
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    history: Vec<SessionSnapshot>,
    outputs: Vec<String>,
    completed_seen: usize,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Clones share state, so a test can keep a handle for inspection after
/// handing the driver to a [`jukebox_app::Runtime`].
#[derive(Debug, Clone, Default)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<Arc<InvariantRegistry>>,
}

impl SimDriver {
    /// Create a new simulation driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(Arc::new(registry));
        self
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.lock().pending_events.push_back(event);
    }

    /// Inject one key.
    pub fn inject_key(&self, key: KeyInput) {
        self.inject_event(AppEvent::Key(key));
    }

    /// Type `line` one char at a time, then press Enter.
    pub fn type_line(&self, line: &str) {
        let mut state = self.lock();
        state.pending_events.extend(line.chars().map(|c| AppEvent::Key(KeyInput::Char(c))));
        state.pending_events.push_back(AppEvent::Key(KeyInput::Enter));
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.lock().pending_events.is_empty()
    }

    /// Session states captured at each render, oldest first.
    pub fn history(&self) -> Vec<SessionSnapshot> {
        self.lock().history.clone()
    }

    /// Output of every completed dispatch, in order.
    pub fn outputs(&self) -> Vec<String> {
        self.lock().outputs.clone()
    }

    /// Whether the runtime released the driver.
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        let event = self.lock().pending_events.pop_front();
        Ok(Some(event.unwrap_or(AppEvent::Key(KeyInput::Interrupt))))
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let mut state = self.lock();
        state.history.push(SessionSnapshot::from_app(app));

        if app.completed_commands() > state.completed_seen
            && let Some(outcome) = app.output()
        {
            state.completed_seen = app.completed_commands();
            let text = match outcome {
                Ok(reply) => reply.to_string(),
                Err(err) => err.to_string(),
            };
            state.outputs.push(text);
        }

        if let Some(registry) = &self.invariants
            && let Err(violations) = registry.check_all(&state.history)
        {
            return Err(SimDriverError(format!("{violations:?}")));
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}
