//! One-shot `-c` mode.
//!
//! Dispatches a single line and reports the plain presentation text plus the
//! process exit status. Printing is left to the binary.

use std::process::ExitCode;

use jukebox_app::Dispatcher;
use jukebox_client::PlayerControl;

use crate::present;

/// Result of a one-shot run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot {
    /// Unstyled output. Empty for a blank line, in which case nothing is
    /// printed.
    pub text: String,
    /// The command did not fail.
    pub success: bool,
}

impl OneShot {
    /// Process exit status: failure (1) on any command error.
    pub fn exit_code(&self) -> ExitCode {
        if self.success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    }
}

/// Dispatch `line` once against `client`.
pub async fn run<C: PlayerControl>(client: C, line: &str) -> OneShot {
    let dispatch = Dispatcher::new(client).dispatch(line).await;
    if let Err(err) = &dispatch.outcome {
        tracing::info!(%line, %err, "command failed");
    }

    OneShot { text: present::plain(&dispatch.outcome), success: dispatch.outcome.is_ok() }
}
