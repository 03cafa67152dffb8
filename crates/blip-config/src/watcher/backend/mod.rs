//! Platform watch backends.
//!
//! Every backend tracks at most one path and reports what happened to it
//! during one bounded wait. The watch loop only talks to [`WatchBackend`].

#[cfg(target_os = "linux")]
mod inotify;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
mod kqueue;

mod portable;

use std::io;
use std::path::Path;
use std::time::Duration;

use super::options::BackendKind;

/// Outcome of one [`WatchBackend::wait`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// Nothing happened before the timeout.
    Timeout,
    /// The file content changed. The backend stays armed.
    Modified,
    /// The path now names a different file (renamed, replaced or removed).
    /// The backend has disarmed itself.
    Replaced,
    /// The OS dropped the watch. The backend has disarmed itself.
    Invalidated,
}

/// Capability interface over one OS change notification primitive.
///
/// `UNARMED -> arm() -> ARMED`; `wait()` may move it back to `UNARMED`;
/// `release()` always ends `UNARMED` and is safe to call repeatedly.
pub trait WatchBackend: Send {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Register interest in `path`, replacing any previous registration.
    /// Fails when the path cannot be opened or watched right now.
    fn arm(&mut self, path: &Path) -> io::Result<()>;

    fn is_armed(&self) -> bool;

    /// Block for at most `timeout` waiting for a change to the armed path.
    fn wait(&mut self, timeout: Duration) -> io::Result<WatchEvent>;

    /// Drop the registration on the current path.
    fn release(&mut self);

    /// How long to wait before retrying a failed `arm`.
    fn retry_delay(&self) -> Duration;
}

/// Create the base primitive for `kind` (inotify instance, kqueue, or a
/// `notify` watcher). Failure here disables the watch loop.
pub fn open_backend(kind: BackendKind) -> io::Result<Box<dyn WatchBackend>> {
    match kind {
        BackendKind::Native => open_native(),
        BackendKind::Portable => Ok(Box::new(portable::PortableBackend::new()?)),
    }
}

#[cfg(target_os = "linux")]
fn open_native() -> io::Result<Box<dyn WatchBackend>> {
    Ok(Box::new(inotify::InotifyBackend::new()?))
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
fn open_native() -> io::Result<Box<dyn WatchBackend>> {
    Ok(Box::new(kqueue::KqueueBackend::new()?))
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
)))]
fn open_native() -> io::Result<Box<dyn WatchBackend>> {
    tracing::debug!("no native watch backend on this platform, using notify");
    Ok(Box::new(portable::PortableBackend::new()?))
}
