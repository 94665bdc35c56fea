//! Container name lookup through a process's cgroup membership.
//!
//! Reads `/proc/<pid>/cgroup` and reports the path of the `devices`
//! controller, which container runtimes using cgroup v1 set to the
//! container's cgroup (e.g. `docker/<id>`).
mod error;
mod parser;
mod resolve;

pub use error::{Error, Result};
pub use parser::{CgroupEntry, DEVICES_CONTROLLER, parse_cgroup_line};
pub use resolve::{container_name_from_proc_cgroup, full_container_name};
