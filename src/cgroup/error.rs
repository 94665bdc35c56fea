use std::path::PathBuf;

/// Errors that may occur while resolving a process's container name.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cgroup file `{path}` does not exist")]
    NotFound { path: PathBuf },
    #[error("failed to read cgroup file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not find devices cgroup location")]
    MissingDevicesEntry,
}

impl Error {
    /// Returns `true` if the cgroup file was absent, which usually means the
    /// process has already exited.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
