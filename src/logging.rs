use crate::error::CleanerError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "CNPJ_CLEANER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// The TUI owns the terminal, so without a file nothing is written.
    Disabled,
}

impl LogTarget {
    /// Log records land on the same stream as user-facing error messages.
    pub fn writes_to_stderr(&self) -> bool {
        matches!(self, LogTarget::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
pub fn init(target: &LogTarget) -> Result<(), CleanerError> {
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| CleanerError::Logging(e.to_string())),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| CleanerError::Logging(e.to_string()))
        }
    }
}
