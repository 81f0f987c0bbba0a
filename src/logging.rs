//! Diagnostic logging using tracing.
//!
//! Off by default. When enabled, events are appended to a file through a
//! non-blocking writer; the terminal is never written to, since it belongs
//! to the TUI. Filter override via the `IDGEN_LOG` environment variable:
//!
//! ```bash
//! DEBUG=1 IDGEN_LOG=trace idgen
//! ```

use std::fs::{File, OpenOptions};
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::DebugLog;
use crate::error::{Error, Result};

/// Environment variable for overriding the log filter.
pub const FILTER_ENV: &str = "IDGEN_LOG";

/// Initialize the logging subsystem.
///
/// Returns the writer guard when logging is enabled; it must be held until
/// exit so buffered events are flushed.
///
/// # Errors
///
/// Returns [`Error::LogFile`] if the log file cannot be opened.
pub fn init(debug: &DebugLog) -> Result<Option<WorkerGuard>> {
    let path = match debug {
        DebugLog::Disabled => return Ok(None),
        DebugLog::File(path) => path,
    };

    let (writer, guard) = file_writer(path)?;

    let env_filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("idgen=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("idgen starting, logging to {}", path.display());

    Ok(Some(guard))
}

/// Open `path` for appending and wrap it in a non-blocking writer.
fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let file = open_log_file(path)?;
    Ok(tracing_appender::non_blocking(file))
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_installs_nothing() {
        let guard = init(&DebugLog::Disabled).expect("disabled never fails");
        assert!(guard.is_none());
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("debug.log");
        let Err(err) = file_writer(&path) else {
            panic!("expected LogFile error");
        };
        assert!(matches!(err, Error::LogFile { .. }));
    }

    #[test]
    fn log_file_is_created_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        let _writer = file_writer(&path).expect("open log file");
        assert!(path.exists());
    }
}
