//! Linux backend: one inotify instance, one watch descriptor on the path.
//!
//! The kernel tracks the inode, not the name. When an editor saves by
//! renaming a temp file over the path, the old inode goes away and the
//! kernel reports `IN_ATTRIB` for the link count drop, then `IN_DELETE_SELF`
//! and `IN_IGNORED`; the watch loop then re-arms on the new file.

use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use nix::sys::inotify::{AddWatchFlags, InitFlags, Inotify, InotifyEvent, WatchDescriptor};
use std::io;
use std::os::fd::AsFd;
use std::path::Path;
use std::time::Duration;
use tracing::trace;

use super::{WatchBackend, WatchEvent};

/// Re-arming while the file is missing waits one idle poll period.
const RETRY_DELAY: Duration = Duration::from_millis(500);

fn watch_mask() -> AddWatchFlags {
    AddWatchFlags::IN_MODIFY
        | AddWatchFlags::IN_CLOSE_WRITE
        | AddWatchFlags::IN_ATTRIB
        | AddWatchFlags::IN_MOVE_SELF
        | AddWatchFlags::IN_DELETE_SELF
}

pub(super) struct InotifyBackend {
    inotify: Inotify,
    watch: Option<WatchDescriptor>,
}

impl InotifyBackend {
    pub(super) fn new() -> io::Result<Self> {
        let inotify = Inotify::init(InitFlags::IN_NONBLOCK | InitFlags::IN_CLOEXEC)?;
        Ok(Self {
            inotify,
            watch: None,
        })
    }

    fn classify(&mut self, events: &[InotifyEvent]) -> WatchEvent {
        let mut modified = false;
        let mut replaced = false;
        let mut ignored = false;

        for event in events {
            trace!(mask = ?event.mask, "inotify event");
            if event.mask.contains(AddWatchFlags::IN_Q_OVERFLOW) {
                modified = true;
                continue;
            }
            // Events for a descriptor we already dropped.
            if Some(event.wd) != self.watch {
                continue;
            }
            // A rename over the path reaches the old inode as IN_ATTRIB (link
            // count drop). chmod and touch look the same and cost one reload.
            if event.mask.intersects(
                AddWatchFlags::IN_MOVE_SELF | AddWatchFlags::IN_DELETE_SELF | AddWatchFlags::IN_ATTRIB,
            ) {
                replaced = true;
            }
            if event.mask.contains(AddWatchFlags::IN_IGNORED) {
                ignored = true;
            }
            if event.mask.intersects(AddWatchFlags::IN_MODIFY | AddWatchFlags::IN_CLOSE_WRITE) {
                modified = true;
            }
        }

        if replaced {
            self.release();
            WatchEvent::Replaced
        } else if ignored {
            // The kernel already removed the descriptor.
            self.watch = None;
            WatchEvent::Invalidated
        } else if modified {
            WatchEvent::Modified
        } else {
            WatchEvent::Timeout
        }
    }
}

impl WatchBackend for InotifyBackend {
    fn name(&self) -> &'static str {
        "inotify"
    }

    fn arm(&mut self, path: &Path) -> io::Result<()> {
        self.release();
        let wd = self.inotify.add_watch(path, watch_mask())?;
        self.watch = Some(wd);
        Ok(())
    }

    fn is_armed(&self) -> bool {
        self.watch.is_some()
    }

    fn wait(&mut self, timeout: Duration) -> io::Result<WatchEvent> {
        let millis = u16::try_from(timeout.as_millis()).unwrap_or(u16::MAX);
        let readable = {
            let mut fds = [PollFd::new(self.inotify.as_fd(), PollFlags::POLLIN)];
            match poll(&mut fds, PollTimeout::from(millis)) {
                Ok(0) | Err(Errno::EINTR) => return Ok(WatchEvent::Timeout),
                Ok(_) => fds[0]
                    .revents()
                    .is_some_and(|revents| revents.contains(PollFlags::POLLIN)),
                Err(e) => return Err(e.into()),
            }
        };
        if !readable {
            return Ok(WatchEvent::Timeout);
        }

        match self.inotify.read_events() {
            Ok(events) => Ok(self.classify(&events)),
            Err(Errno::EAGAIN) | Err(Errno::EINTR) => Ok(WatchEvent::Timeout),
            Err(e) => Err(e.into()),
        }
    }

    fn release(&mut self) {
        if let Some(wd) = self.watch.take() {
            // EINVAL here means the kernel dropped it first.
            let _ = self.inotify.rm_watch(wd);
        }
    }

    fn retry_delay(&self) -> Duration {
        RETRY_DELAY
    }
}
