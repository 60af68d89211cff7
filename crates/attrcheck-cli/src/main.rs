mod logging;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use attrcheck_core::report::render_header;
use attrcheck_core::{Error as CoreError, POST_ATTRIBUTION, redact_connection_string};
use attrcheck_inspect::{PostgresSource, run_check};
use clap::Parser;
use logging::{LoggingError, init_logging};
use thiserror::Error;
use uuid::Uuid;

const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Check(#[from] CoreError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "attrcheck",
    version,
    about = "Check the post_attribution table against what the learning loops expect"
)]
struct Cli {
    /// Database connection string.
    #[arg(
        long,
        env = "DATABASE_URL",
        value_name = "CONNECTION_STRING",
        hide_env_values = true
    )]
    database_url: Option<String>,
    /// Append JSON log events to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(event = "check_failed", error = %err);
            println!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.log_file.as_deref())?;

    let database_url = cli
        .database_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| CoreError::MissingConfig(DATABASE_URL_VAR.to_string()))?;

    let contract = POST_ATTRIBUTION;
    let mut stdout = io::stdout();
    for line in render_header(&contract) {
        writeln!(stdout, "{line}")?;
    }

    let run_id = Uuid::new_v4();
    let connection = redact_connection_string(&database_url);
    tracing::info!(
        event = "check_started",
        run_id = %run_id,
        table = contract.table,
        connection = %connection.redacted,
        host = ?connection.host,
        database = ?connection.database
    );

    let timer = Instant::now();

    let mut source = PostgresSource::connect(&database_url).await?;
    tracing::info!(event = "connected", run_id = %run_id);

    let outcome = run_check(&mut source, &contract, &mut stdout).await;
    if let Err(err) = source.close().await {
        tracing::warn!(event = "close_failed", run_id = %run_id, error = %err);
    }
    let outcome = outcome?;

    tracing::info!(
        event = "check_finished",
        run_id = %run_id,
        status = "success",
        missing_columns = outcome.missing_columns.len(),
        rows = outcome.row_count,
        duration_ms = elapsed_ms(timer.elapsed())
    );

    Ok(())
}

/// Milliseconds, saturating at `u64::MAX`.
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_ms_saturates_instead_of_truncating() {
        assert_eq!(elapsed_ms(Duration::from_millis(1_500)), 1_500);
        assert_eq!(elapsed_ms(Duration::MAX), u64::MAX);
    }
}
