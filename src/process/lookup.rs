use std::path::Path;

use nix::sys::signal::Signal;
use regex::Regex;

use crate::error::ResultOkLogExt;
use crate::signal::SignalSender;

use super::scanner::scan;
use super::{Error, Result};

/// Builds the pattern used by [`pid_of`]: `name` must match the whole
/// executable name or the part after its last `/`.
///
/// # Errors
///
/// - [`Error::EmptyName`] if `name` is empty.
/// - [`Error::Pattern`] if the resulting expression does not compile.
pub fn anchored_pattern(name: &str) -> Result<Regex> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(Regex::new(&format!("(^|/){name}$"))?)
}

/// Builds the pattern used by [`pkill`]: `pattern` is compiled unchanged, so
/// it matches anywhere in the executable name.
///
/// # Errors
///
/// - [`Error::EmptyName`] if `pattern` is empty.
/// - [`Error::Pattern`] if `pattern` does not compile.
pub fn raw_pattern(pattern: &str) -> Result<Regex> {
    if pattern.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(Regex::new(pattern)?)
}

/// Finds the pids of processes named `name` under the process root `root`.
///
/// `name` is a regular expression matched against the end of the executable
/// name, so `nginx` finds both `nginx` and `/usr/sbin/nginx`, but not
/// `nginx-helper`.
///
/// Returns an empty list if nothing matches. A scan that cannot read `root`
/// also yields an empty list; use [`scan`] to tell the two apart.
///
/// # Errors
///
/// - [`Error::EmptyName`] if `name` is empty. Nothing is read in that case.
/// - [`Error::Pattern`] if `name` is not a valid expression.
pub fn pid_of(root: &Path, name: &str) -> Result<Vec<i32>> {
    let re = anchored_pattern(name)?;
    Ok(scan(root, &re)
        .ok_log_at(log::Level::Debug)
        .unwrap_or_default())
}

/// Sends `signal` to every process under `root` whose executable name
/// contains a match for `pattern`.
///
/// Unlike [`pid_of`], the pattern is not anchored: `ngin` matches
/// `nginx-helper`.
///
/// Every matching process is signalled even if earlier deliveries fail.
/// Failures with identical messages are reported once.
///
/// # Errors
///
/// - [`Error::EmptyName`] if `pattern` is empty.
/// - [`Error::Pattern`] if `pattern` is not a valid expression.
/// - [`Error::NoMatch`] if no process matched.
/// - [`Error::Signal`] if deliveries failed with a single distinct message.
/// - [`Error::Signals`] if deliveries failed with several distinct messages.
pub fn pkill(
    root: &Path,
    pattern: &str,
    signal: Signal,
    sender: &impl SignalSender,
) -> Result<()> {
    let re = raw_pattern(pattern)?;
    let pids = scan(root, &re)
        .ok_log_at(log::Level::Debug)
        .unwrap_or_default();
    if pids.is_empty() {
        return Err(Error::NoMatch {
            pattern: pattern.to_owned(),
        });
    }

    let mut messages: Vec<String> = Vec::new();
    for pid in pids {
        if let Err(errno) = sender.send(pid, signal) {
            log::debug!("failed to send {} to pid {pid}: {errno}", signal.as_str());
            let message = errno.to_string();
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }

    if messages.len() > 1 {
        return Err(Error::Signals { messages });
    }
    match messages.pop() {
        Some(message) => Err(Error::Signal { message }),
        None => Ok(()),
    }
}
