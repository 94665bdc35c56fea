use std::fs::DirEntry;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

use crate::error::ResultOkLogExt;
use crate::fsutil;

use super::ScanError;
use super::cmdline::executable_token;

/// Number of directory entries buffered per batch while scanning.
///
/// Keeps allocations small on hosts with many processes.
pub const READ_DIR_BATCH_SIZE: usize = 10;

/// A process whose executable name matched during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    /// Process ID, taken from the directory name.
    pub pid: i32,
    /// First token of the process's first argument.
    pub executable: String,
}

/// Scans `root` for processes whose executable name matches `pattern`.
///
/// Pids are returned in directory order.
///
/// # Errors
///
/// See [`scan_records`].
pub fn scan(root: &Path, pattern: &Regex) -> Result<Vec<i32>, ScanError> {
    Ok(scan_records(root, pattern)?
        .into_iter()
        .map(|record| record.pid)
        .collect())
}

/// Scans `root` for processes whose executable name matches `pattern`,
/// returning each match together with the name that matched.
///
/// Every numeric subdirectory of `root` is treated as a process. Its
/// `cmdline` is read, the executable name extracted with
/// [`executable_token`], and tested against `pattern`. Processes whose
/// `cmdline` cannot be read (typically because they exited mid-scan) are
/// skipped and logged at `debug` level.
///
/// # Errors
///
/// - [`ScanError::OpenRoot`] if `root` cannot be opened.
/// - [`ScanError::ReadEntry`] if reading the directory entries fails.
///
/// No partial results are returned on error.
pub fn scan_records(root: &Path, pattern: &Regex) -> Result<Vec<ProcessRecord>, ScanError> {
    let mut entries = std::fs::read_dir(root).map_err(|source| ScanError::OpenRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    let mut batch = Vec::with_capacity(READ_DIR_BATCH_SIZE);
    loop {
        batch.clear();
        for entry in entries.by_ref().take(READ_DIR_BATCH_SIZE) {
            batch.push(entry.map_err(|source| ScanError::ReadEntry {
                path: root.to_path_buf(),
                source,
            })?);
        }
        if batch.is_empty() {
            break;
        }

        records.extend(batch.iter().filter_map(|entry| match_entry(entry, pattern)));
    }

    Ok(records)
}

fn match_entry(entry: &DirEntry, pattern: &Regex) -> Option<ProcessRecord> {
    if !entry.file_type().ok_log_at(log::Level::Debug)?.is_dir() {
        return None;
    }

    // Anything that is not a pid, e.g. `self` or `sys`.
    let pid = entry.file_name().to_str()?.parse::<i32>().ok()?;

    let cmdline = fsutil::read_file(entry.path().join("cmdline")).ok_log_at(log::Level::Debug)?;
    let executable = executable_token(&cmdline)?;
    if !pattern.is_match(&executable) {
        return None;
    }

    log::trace!("pid {pid} matched `{pattern}` with executable `{executable}`");
    Some(ProcessRecord { pid, executable })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testutil::{add_process, pids_sorted};

    #[test]
    fn test_scan_matches_first_token() {
        let root = tempfile::tempdir().unwrap();
        add_process(root.path(), 10, b"/usr/sbin/nginx\0-g\0daemon off;\0");
        add_process(root.path(), 11, b"bash\0-c\0nginx\0");
        add_process(root.path(), 12, b"nginx: worker process\0");

        let re = Regex::new("nginx$").unwrap();
        let pids = scan(root.path(), &re).unwrap();
        assert_eq!(pids_sorted(pids), vec![10, 12]);
    }

    #[test]
    fn test_scan_records_carry_executable() {
        let root = tempfile::tempdir().unwrap();
        add_process(root.path(), 7, b"/usr/bin/containerd\0");

        let re = Regex::new("containerd").unwrap();
        let records = scan_records(root.path(), &re).unwrap();
        assert_eq!(
            records,
            vec![ProcessRecord {
                pid: 7,
                executable: "/usr/bin/containerd".to_owned(),
            }]
        );
    }

    #[test]
    fn test_process_record_serializes() {
        let record = ProcessRecord {
            pid: 7,
            executable: "/usr/bin/containerd".to_owned(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"pid":7,"executable":"/usr/bin/containerd"}"#
        );
    }

    #[test]
    fn test_scan_skips_non_pid_entries() {
        let root = tempfile::tempdir().unwrap();
        add_process(root.path(), 1, b"init\0");
        // Numeric name but a regular file.
        std::fs::write(root.path().join("2"), b"init\0").unwrap();
        // Directories that are not pids.
        for name in ["self", "sys", "1a"] {
            let dir = root.path().join(name);
            std::fs::create_dir(&dir).unwrap();
            std::fs::write(dir.join("cmdline"), b"init\0").unwrap();
        }

        let re = Regex::new("init").unwrap();
        assert_eq!(scan(root.path(), &re).unwrap(), vec![1]);
    }

    #[test]
    fn test_scan_skips_kernel_threads() {
        let root = tempfile::tempdir().unwrap();
        add_process(root.path(), 2, b"");
        add_process(root.path(), 3, b"sleep\0");

        let re = Regex::new("").unwrap();
        assert_eq!(scan(root.path(), &re).unwrap(), vec![3]);
    }

    #[test]
    fn test_scan_tolerates_unreadable_cmdline() {
        let root = tempfile::tempdir().unwrap();
        add_process(root.path(), 100, b"nginx\0");
        add_process(root.path(), 101, b"nginx\0");
        // Process exited between listing and reading.
        std::fs::create_dir(root.path().join("102")).unwrap();
        // `cmdline` that cannot be read as a file.
        std::fs::create_dir_all(root.path().join("103").join("cmdline")).unwrap();
        add_process(root.path(), 104, b"/usr/sbin/nginx\0");

        let re = Regex::new("nginx").unwrap();
        let pids = scan(root.path(), &re).unwrap();
        assert_eq!(pids_sorted(pids), vec![100, 101, 104]);
    }

    #[test]
    fn test_scan_spans_multiple_batches() {
        let root = tempfile::tempdir().unwrap();
        let count = READ_DIR_BATCH_SIZE as i32 * 3 + 5;
        for pid in 1..=count {
            let cmdline = if pid % 2 == 0 { "worker\0" } else { "idle\0" };
            add_process(root.path(), pid, cmdline.as_bytes());
        }

        let re = Regex::new("^worker$").unwrap();
        let pids = scan(root.path(), &re).unwrap();
        let expected: Vec<i32> = (1..=count).filter(|pid| pid % 2 == 0).collect();
        assert_eq!(pids_sorted(pids), expected);
    }

    #[test]
    fn test_scan_is_repeatable() {
        let root = tempfile::tempdir().unwrap();
        for pid in 300..340 {
            add_process(root.path(), pid, b"/bin/sh\0");
        }

        let re = Regex::new("sh$").unwrap();
        let first = scan(root.path(), &re).unwrap();
        let second = scan(root.path(), &re).unwrap();
        assert_eq!(first.len(), 40);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scan_empty_root() {
        let root = tempfile::tempdir().unwrap();
        let re = Regex::new(".*").unwrap();
        assert!(scan(root.path(), &re).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("proc");

        let re = Regex::new(".*").unwrap();
        let err = scan(&missing, &re).unwrap_err();
        match err {
            ScanError::OpenRoot { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
