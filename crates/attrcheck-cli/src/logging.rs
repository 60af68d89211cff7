use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("logging error: {0}")]
    Init(String),
}

/// Install the global subscriber.
///
/// Without a log file, compact events go to stderr filtered by `RUST_LOG`
/// (default `warn`). With one, JSON events are appended to it (default `info`).
/// Standard output is left to the report.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), LoggingError> {
    match log_file {
        Some(path) => init_file_logging(path),
        None => {
            let layer = tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr);
            tracing_subscriber::registry()
                .with(env_filter("warn"))
                .with(layer)
                .try_init()
                .map_err(|err| LoggingError::Init(err.to_string()))
        }
    }
}

fn init_file_logging(path: &Path) -> Result<(), LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.display().to_string(),
            source,
        })?;

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(layer)
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
