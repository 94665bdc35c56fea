//! Procscan: process discovery on Linux through the `/proc` filesystem.
//!
//! This library finds the container a process belongs to by reading its cgroup
//! membership, and finds processes by executable name, either returning their
//! pids or signalling them. Every call performs one synchronous pass over
//! `/proc` and caches nothing.
use nix::sys::signal::Signal;

pub mod cgroup;
pub mod error;
pub mod fsutil;
pub mod process;
pub mod procfs;
pub mod signal;

pub use procfs::{ProcFs, ProcInterface};

// /proc/<pid>/cgroup
//  file format: <hierarchy-id>:<controller-list>:<cgroup-path>
//      <hierarchy-id>:
//          v1: arbitrary number
//          v2: always '0'
//      <controller-list>:
//          v1: comma-separated list of controllers, e.g., cpu,memory
//          v2: always empty, i.e., ''
//      <cgroup-path>:
//          v1: path of the controllers in the controller-list relative to the cgroup root
//          v2: unified path of all controllers relative to the cgroup root
//
// Only the v1 `devices` entry names a container here.
//
// /proc/<pid>/cmdline
//  NUL-terminated arguments; empty for kernel threads and zombies.

/// Returns the container name of process `pid`, read from `/proc`.
///
/// # Errors
///
/// See [`ProcFs::full_container_name`].
///
/// # Example
///
/// ```no_run
/// let name = procscan::full_container_name(1).unwrap();
/// println!("pid 1 runs in {name}");
/// ```
pub fn full_container_name(pid: i32) -> cgroup::Result<String> {
    ProcFs::default().full_container_name(pid)
}

/// Returns the pids of processes named `name`, read from `/proc`.
///
/// # Errors
///
/// See [`process::pid_of`].
///
/// # Example
///
/// ```no_run
/// let pids = procscan::pid_of("sshd").unwrap();
/// println!("sshd pids: {pids:?}");
/// ```
pub fn pid_of(name: &str) -> process::Result<Vec<i32>> {
    ProcFs::default().pid_of(name)
}

/// Sends `signal` to every process whose name matches `pattern`.
///
/// # Errors
///
/// See [`process::pkill`].
pub fn pkill(pattern: &str, signal: Signal) -> process::Result<()> {
    ProcFs::default().pkill(pattern, signal)
}
