//! Jukebox console entry point.
//!
//! # Usage
//!
//! ```bash
//! # Interactive prompt against the local daemon
//! jukebox
//!
//! # One command, then exit
//! jukebox -c vol 40
//!
//! # Remote daemon with debug logs written to a file
//! jukebox --server http://10.0.0.5:3678 --log-level debug --log-file jukebox.log
//! ```

use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use jukebox_app::Runtime;
use jukebox_client::{ClientConfig, DEFAULT_BASE_URL, HttpClient};
use jukebox_tui::{
    TerminalDriver,
    logging::{self, LogSink},
    one_shot,
};

/// Jukebox playback console
#[derive(Parser, Debug)]
#[command(name = "jukebox")]
#[command(about = "Interactive remote control for a playback daemon")]
#[command(version)]
struct Args {
    /// Base URL of the playback daemon
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    server: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "5")]
    timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run a single command and exit
    #[arg(short = 'c', num_args = 1.., allow_hyphen_values = true, value_name = "COMMAND")]
    command: Option<Vec<String>>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let one_shot = args.command.as_ref().map(|words| words.join(" "));

    logging::init(&args.log_level, LogSink::for_mode(one_shot.is_some(), args.log_file))?;

    let config =
        ClientConfig::new(args.server).with_timeout(Duration::from_secs(args.timeout));
    let client = HttpClient::new(&config)?;

    match one_shot {
        Some(line) => Ok(run_once(client, &line).await),
        None => {
            tracing::info!("Starting console against {}", config.base_url);
            let driver = TerminalDriver::new()?;
            let app = Runtime::new(driver, client, config.base_url).run().await?;
            tracing::info!("Session ended after {} commands", app.completed_commands());
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Dispatch one line and print its result.
#[allow(clippy::print_stdout)]
async fn run_once(client: HttpClient, line: &str) -> ExitCode {
    let result = one_shot::run(client, line).await;
    if !result.text.is_empty() {
        println!("{}", result.text);
    }

    result.exit_code()
}
