//! Portable backend built on the `notify` crate.
//!
//! Watches the parent directory non-recursively and filters events by file
//! name, so atomic saves show up as ordinary create/modify events and the
//! watch never goes stale.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use tracing::trace;

use super::{WatchBackend, WatchEvent};

const RETRY_DELAY: Duration = Duration::from_millis(500);

struct WatchedFile {
    dir: PathBuf,
    file_name: OsString,
}

pub(super) struct PortableBackend {
    watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    watched: Option<WatchedFile>,
}

impl PortableBackend {
    pub(super) fn new() -> io::Result<Self> {
        let (tx, events) = mpsc::channel();
        let watcher = RecommendedWatcher::new(tx, notify::Config::default()).map_err(io::Error::other)?;
        Ok(Self {
            watcher,
            events,
            watched: None,
        })
    }

    fn classify(&self, event: &Event) -> Option<WatchEvent> {
        let watched = self.watched.as_ref()?;
        let ours = event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(watched.file_name.as_os_str()));
        if !ours {
            return None;
        }

        trace!(kind = ?event.kind, "notify event");
        match event.kind {
            EventKind::Create(_) | EventKind::Modify(_) => Some(WatchEvent::Modified),
            // A removal is followed by a create when the file comes back.
            _ => None,
        }
    }
}

impl WatchBackend for PortableBackend {
    fn name(&self) -> &'static str {
        "notify"
    }

    fn arm(&mut self, path: &Path) -> io::Result<()> {
        self.release();
        std::fs::metadata(path)?;

        let file_name = path
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?
            .to_os_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        while self.events.try_recv().is_ok() {}
        self.watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(io::Error::other)?;
        self.watched = Some(WatchedFile { dir, file_name });
        Ok(())
    }

    fn is_armed(&self) -> bool {
        self.watched.is_some()
    }

    fn wait(&mut self, timeout: Duration) -> io::Result<WatchEvent> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(remaining) {
                Ok(Ok(event)) => {
                    if let Some(outcome) = self.classify(&event) {
                        return Ok(outcome);
                    }
                }
                Ok(Err(e)) => {
                    self.release();
                    return Err(io::Error::other(e));
                }
                Err(RecvTimeoutError::Timeout) => return Ok(WatchEvent::Timeout),
                Err(RecvTimeoutError::Disconnected) => {
                    self.watched = None;
                    return Ok(WatchEvent::Invalidated);
                }
            }
        }
    }

    fn release(&mut self) {
        if let Some(watched) = self.watched.take() {
            let _ = self.watcher.unwatch(&watched.dir);
        }
    }

    fn retry_delay(&self) -> Duration {
        RETRY_DELAY
    }
}
