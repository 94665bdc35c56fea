//! Signal delivery.
//!
//! The scanner only decides *which* pids to signal; delivering the signal is
//! left to a [`SignalSender`], so callers and tests can substitute their own.

use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;

/// Delivers a signal to a single process.
pub trait SignalSender {
    /// Sends `signal` to `pid`.
    ///
    /// # Errors
    ///
    /// Returns the [`Errno`] reported by the operating system, e.g.
    /// [`Errno::ESRCH`] if the process is gone or [`Errno::EPERM`] if the
    /// caller lacks permission.
    fn send(&self, pid: i32, signal: Signal) -> Result<(), Errno>;
}

/// Sends signals with `kill(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KillSender;

impl SignalSender for KillSender {
    fn send(&self, pid: i32, signal: Signal) -> Result<(), Errno> {
        signal::kill(Pid::from_raw(pid), signal)
    }
}

impl<S: SignalSender + ?Sized> SignalSender for &S {
    fn send(&self, pid: i32, signal: Signal) -> Result<(), Errno> {
        (**self).send(pid, signal)
    }
}

/// Parses a signal given by name (`TERM`, `SIGTERM`, case-insensitive) or
/// by number (`15`).
///
/// Returns `None` if the input names no known signal.
pub fn parse_signal(input: &str) -> Option<Signal> {
    let input = input.trim();
    if let Ok(number) = input.parse::<i32>() {
        return Signal::try_from(number).ok();
    }

    let upper = input.to_ascii_uppercase();
    let name = if upper.starts_with("SIG") {
        upper
    } else {
        format!("SIG{upper}")
    };
    name.parse::<Signal>().ok()
}
