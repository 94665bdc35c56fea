//! Parser for `/proc/[pid]/cgroup` records.
//!
//! Each line has the form `hierarchy-id:controller-list:cgroup-path`. See
//! [`cgroups(7)`](https://man7.org/linux/man-pages/man7/cgroups.7.html).

/// The controller whose path names the container.
pub const DEVICES_CONTROLLER: &str = "devices";

/// Represents a parsed line of a `/proc/[pid]/cgroup` file.
#[derive(Debug, PartialEq, Eq)]
pub struct CgroupEntry<'a> {
    /// Hierarchy ID (`0` for the unified v2 hierarchy).
    pub hierarchy_id: &'a str,
    /// Comma-separated controller list, empty for v2.
    pub controllers: &'a str,
    /// Path of the cgroup relative to the hierarchy root.
    pub path: &'a str,
}

/// Parses a single cgroup line, returning `None` if it has fewer than three
/// colon-separated fields.
///
/// The path keeps any colons it contains, since only the first two act as
/// separators.
pub fn parse_cgroup_line(line: &str) -> Option<CgroupEntry<'_>> {
    let mut fields = line.splitn(3, ':');
    Some(CgroupEntry {
        hierarchy_id: fields.next()?,
        controllers: fields.next()?,
        path: fields.next()?,
    })
}

/// Converts the path of a `devices` entry into a container name.
///
/// Whitespace (including the line terminator) is trimmed, as is the leading
/// `/`, so `/docker/nginx` becomes `docker/nginx`.
pub fn container_name_from_path(path: &str) -> &str {
    let path = path.trim();
    path.strip_prefix('/').unwrap_or(path)
}

/// Returns the container name if `line` is the `devices` entry.
///
/// The controller list must be exactly `devices`; co-mounted lists such as
/// `cpu,devices` do not match.
pub fn devices_container_name(line: &str) -> Option<&str> {
    parse_cgroup_line(line)
        .filter(|entry| entry.controllers == DEVICES_CONTROLLER)
        .map(|entry| container_name_from_path(entry.path))
}
