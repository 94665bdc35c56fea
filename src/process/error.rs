use std::path::PathBuf;

/// Errors returned by [`pid_of`](super::pid_of) and [`pkill`](super::pkill).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("name should not be empty")]
    EmptyName,
    #[error("invalid process name pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("unable to fetch pids for process name `{pattern}`")]
    NoMatch { pattern: String },
    #[error("{message}")]
    Signal { message: String },
    #[error("[ {} ]", .messages.join(", "))]
    Signals { messages: Vec<String> },
}

/// Errors that abort a whole scan of the process root.
///
/// Failures reading a single process's `cmdline` never surface here; that
/// process is skipped instead.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to open process root `{path}`: {source}")]
    OpenRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read entries of process root `{path}`: {source}")]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
