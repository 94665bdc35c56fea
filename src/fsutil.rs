use std::io;
use std::path::{Path, PathBuf};

/// Error that occurs when reading a whole file into memory fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to read file `{path}`: {source}")]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FileReadError {
    /// Returns `true` if the file did not exist.
    pub fn is_not_found(&self) -> bool {
        self.source.kind() == io::ErrorKind::NotFound
    }
}

/// Reads the entire file at `path` as raw bytes.
///
/// Files under `/proc` report a size of zero, so this reads until EOF rather
/// than trusting the metadata length.
///
/// # Errors
///
/// Returns a [`FileReadError`] carrying the path if the read fails.
///
/// # Example
/// ```no_run
/// # use procscan::fsutil;
/// let cmdline = fsutil::read_file("/proc/1/cmdline")?;
/// # Ok::<(), fsutil::FileReadError>(())
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, FileReadError> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| FileReadError {
        path: path.to_path_buf(),
        source,
    })
}
