use std::ffi::OsString;
use std::path::{Path, PathBuf};

use nix::sys::signal::Signal;
use regex::Regex;

use crate::cgroup;
use crate::process::{self, ProcessRecord, ScanError};
use crate::signal::{KillSender, SignalSender};

/// Default location of the process information filesystem.
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Environment variable naming the host root mount when running inside a
/// container; `/proc` is then looked up beneath it.
pub const ROOTFS_ENV: &str = "ROOTFS_MOUNT_PATH";

/// Container name lookup, split out so callers can substitute their own.
pub trait ProcInterface {
    /// Returns the name of the container the process `pid` belongs to.
    fn full_container_name(&self, pid: i32) -> cgroup::Result<String>;
}

/// A handle on a `/proc`-style filesystem.
///
/// Holds no state besides the root path; every call reads the filesystem
/// afresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFs {
    root: PathBuf,
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl ProcFs {
    /// Creates a handle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a handle rooted at `$ROOTFS_MOUNT_PATH/proc` if the variable is
    /// set, or at `/proc` otherwise.
    pub fn from_env() -> Self {
        let procfs = Self::from_rootfs(std::env::var_os(ROOTFS_ENV));
        log::debug!("Using process root `{}`", procfs.root.display());
        procfs
    }

    /// Creates a handle rooted at `<rootfs>/proc`, or at `/proc` if `rootfs`
    /// is `None`.
    pub fn from_rootfs(rootfs: Option<OsString>) -> Self {
        rootfs
            .map(|rootfs| Self::new(PathBuf::from(rootfs).join("proc")))
            .unwrap_or_default()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `file` in the directory of process `pid`, e.g.
    /// `/proc/42/cgroup`.
    pub fn pid_path(&self, pid: i32, file: &str) -> PathBuf {
        self.root.join(pid.to_string()).join(file)
    }

    /// Returns the `devices` cgroup path of process `pid`, e.g.
    /// `docker/nginx`.
    ///
    /// # Errors
    ///
    /// See [`cgroup::full_container_name`]. [`cgroup::Error::NotFound`]
    /// usually means the process does not exist.
    pub fn full_container_name(&self, pid: i32) -> cgroup::Result<String> {
        cgroup::full_container_name(self.pid_path(pid, "cgroup"))
    }

    /// Finds processes by name. See [`process::pid_of`].
    pub fn pid_of(&self, name: &str) -> process::Result<Vec<i32>> {
        process::pid_of(&self.root, name)
    }

    /// Sends `signal` to processes matching `pattern` with `kill(2)`. See
    /// [`process::pkill`].
    pub fn pkill(&self, pattern: &str, signal: Signal) -> process::Result<()> {
        self.pkill_with(pattern, signal, &KillSender)
    }

    /// Like [`ProcFs::pkill`], delivering through `sender`.
    pub fn pkill_with(
        &self,
        pattern: &str,
        signal: Signal,
        sender: &impl SignalSender,
    ) -> process::Result<()> {
        process::pkill(&self.root, pattern, signal, sender)
    }

    /// Scans for processes matching `pattern`. See [`process::scan`].
    pub fn scan(&self, pattern: &Regex) -> Result<Vec<i32>, ScanError> {
        process::scan(&self.root, pattern)
    }

    /// Scans for processes matching `pattern`. See [`process::scan_records`].
    pub fn scan_records(&self, pattern: &Regex) -> Result<Vec<ProcessRecord>, ScanError> {
        process::scan_records(&self.root, pattern)
    }
}

impl ProcInterface for ProcFs {
    fn full_container_name(&self, pid: i32) -> cgroup::Result<String> {
        ProcFs::full_container_name(self, pid)
    }
}
