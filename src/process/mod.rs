//! Process lookup by executable name.
//!
//! Walks the pid directories of a `/proc`-style root, reads each process's
//! `cmdline`, and matches the executable name against a regular expression.
//! Results are a snapshot: processes may exit or pids be reused before the
//! caller acts on them.
//!
//! - [`pid_of`] matches a name anchored to the end of the executable path.
//! - [`pkill`] matches an unanchored pattern and signals every match.
//! - [`scan`] and [`scan_records`] expose the underlying walk, including
//!   failures to read the root.
mod cmdline;
mod error;
mod lookup;
mod scanner;

pub use cmdline::{executable_token, first_argument};
pub use error::{Error, Result, ScanError};
pub use lookup::{anchored_pattern, pid_of, pkill, raw_pattern};
pub use scanner::{ProcessRecord, READ_DIR_BATCH_SIZE, scan, scan_records};
