use crate::fsutil;

use super::parser::devices_container_name;
use super::{Error, Result};
use std::path::Path;

/// Resolves the container name from the `cgroup` file at `path`.
///
/// E.g. if the devices cgroup of the process is stored in
/// `/sys/fs/cgroup/devices/docker/nginx`, this returns `docker/nginx`.
/// Assumes the process is part of exactly one cgroup hierarchy.
///
/// cgroup paths may contain arbitrary bytes; invalid UTF-8 is replaced
/// rather than rejected.
///
/// # Errors
///
/// - [`Error::NotFound`] if the file does not exist.
/// - [`Error::Read`] if the file exists but cannot be read.
/// - [`Error::MissingDevicesEntry`] if no line names the `devices` controller.
///
/// # Example
///
/// ```no_run
/// use procscan::cgroup::full_container_name;
///
/// let name = full_container_name("/proc/1/cgroup").unwrap();
/// println!("container: {name}");
/// ```
pub fn full_container_name(path: impl AsRef<Path>) -> Result<String> {
    let content = fsutil::read_file(path).map_err(|err| {
        if err.is_not_found() {
            Error::NotFound { path: err.path }
        } else {
            Error::Read {
                path: err.path,
                source: err.source,
            }
        }
    })?;

    let name = container_name_from_proc_cgroup(&String::from_utf8_lossy(&content))?;
    log::debug!("Found `devices` cgroup: {name}");
    Ok(name)
}

/// Resolves the container name from the contents of a `cgroup` file.
///
/// The first line whose controller list is exactly `devices` wins.
///
/// # Errors
///
/// Returns [`Error::MissingDevicesEntry`] if no such line exists.
pub fn container_name_from_proc_cgroup(content: &str) -> Result<String> {
    content
        .lines()
        .find_map(devices_container_name)
        .map(str::to_owned)
        .ok_or(Error::MissingDevicesEntry)
}
