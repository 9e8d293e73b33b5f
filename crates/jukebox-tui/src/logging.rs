//! Tracing subscriber setup.
//!
//! The screen belongs to the UI in interactive mode, so logs only reach the
//! terminal in one-shot mode. `RUST_LOG` overrides the configured level.

use std::{fs::File, io, path::PathBuf, sync::Mutex};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Standard error, used by one-shot mode.
    Stderr,
    /// A file truncated at startup, used interactively.
    File(PathBuf),
    /// Logging disabled.
    Off,
}

impl LogSink {
    /// Pick the sink for a run mode.
    pub fn for_mode(one_shot: bool, log_file: Option<PathBuf>) -> Self {
        match (one_shot, log_file) {
            (true, _) => Self::Stderr,
            (false, Some(path)) => Self::File(path),
            (false, None) => Self::Off,
        }
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(level: &str, sink: LogSink) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match sink {
        LogSink::Off => {},
        LogSink::Stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
        },
        LogSink::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_without_file_is_silent() {
        assert_eq!(LogSink::for_mode(false, None), LogSink::Off);
    }

    #[test]
    fn interactive_logs_to_file_when_given() {
        let path = PathBuf::from("jukebox.log");
        assert_eq!(LogSink::for_mode(false, Some(path.clone())), LogSink::File(path));
    }

    #[test]
    fn one_shot_always_logs_to_stderr() {
        assert_eq!(LogSink::for_mode(true, None), LogSink::Stderr);
        assert_eq!(LogSink::for_mode(true, Some("jukebox.log".into())), LogSink::Stderr);
    }
}
