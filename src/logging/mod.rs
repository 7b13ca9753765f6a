//! Tracing subscriber setup.
//!
//! The terminal is owned by the TUI, so diagnostics go to a plain log file
//! that can be followed with `tail -f` from another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log directory could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Log path has no usable file name or parent directory.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A global subscriber was installed earlier in this process.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Directory and file name a rolling appender writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget<'a> {
    /// Directory holding the log file.
    pub directory: &'a Path,
    /// Log file name.
    pub file_name: &'a str,
}

/// Split a log file path into its appender parts.
///
/// A bare file name logs into the current directory.
///
/// ```
/// use std::path::Path;
/// use feedswipe::logging::log_target;
///
/// let target = log_target(Path::new("/var/log/feedswipe/app.log")).unwrap();
/// assert_eq!(target.directory, Path::new("/var/log/feedswipe"));
/// assert_eq!(target.file_name, "app.log");
/// ```
pub fn log_target(log_path: &Path) -> Result<LogTarget<'_>, LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok(LogTarget {
        directory,
        file_name,
    })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber, writing to `log_path`.
///
/// Respects `RUST_LOG` and defaults to `info`. The log directory is created
/// when missing, even if the subscriber turns out to be already set.
///
/// # Errors
///
/// Fails when the path is unusable, the directory cannot be created, or a
/// subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let target = log_target(log_path)?;

    std::fs::create_dir_all(target.directory).map_err(|source| {
        LoggingError::DirectoryCreation {
            path: target.directory.to_path_buf(),
            source,
        }
    })?;

    let appender = tracing_appender::rolling::never(target.directory, target.file_name);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
