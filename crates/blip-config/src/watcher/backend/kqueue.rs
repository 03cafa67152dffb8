//! kqueue backend for macOS and the BSDs.
//!
//! `EVFILT_VNODE` is keyed on an open descriptor, which keeps pointing at
//! the old file after an editor replaces it. The descriptor is therefore
//! closed on rename or delete and the path is reopened on the next arm.
//! Writes and timeouts keep the registration, which `EV_CLEAR` re-arms.

use nix::errno::Errno;
use nix::libc;
use nix::sys::event::{EventFilter, EventFlag, FilterFlag, KEvent, Kqueue};
use std::fs::File;
use std::io;
use std::os::fd::AsRawFd;
use std::path::Path;
use std::time::Duration;
use tracing::trace;

use super::{WatchBackend, WatchEvent};

const RETRY_DELAY: Duration = Duration::from_secs(1);

fn watch_flags() -> FilterFlag {
    FilterFlag::NOTE_WRITE | FilterFlag::NOTE_RENAME | FilterFlag::NOTE_DELETE
}

pub(super) struct KqueueBackend {
    queue: Kqueue,
    file: Option<File>,
}

impl KqueueBackend {
    pub(super) fn new() -> io::Result<Self> {
        Ok(Self {
            queue: Kqueue::new()?,
            file: None,
        })
    }
}

impl WatchBackend for KqueueBackend {
    fn name(&self) -> &'static str {
        "kqueue"
    }

    fn arm(&mut self, path: &Path) -> io::Result<()> {
        self.release();
        let file = File::open(path)?;
        let change = KEvent::new(
            file.as_raw_fd() as usize,
            EventFilter::EVFILT_VNODE,
            EventFlag::EV_ADD | EventFlag::EV_ENABLE | EventFlag::EV_CLEAR,
            watch_flags(),
            0,
            0,
        );
        self.queue.kevent(&[change], &mut [], None)?;
        self.file = Some(file);
        Ok(())
    }

    fn is_armed(&self) -> bool {
        self.file.is_some()
    }

    fn wait(&mut self, timeout: Duration) -> io::Result<WatchEvent> {
        let mut events = [KEvent::new(
            0,
            EventFilter::EVFILT_VNODE,
            EventFlag::empty(),
            FilterFlag::empty(),
            0,
            0,
        )];
        let deadline = libc::timespec {
            tv_sec: timeout.as_secs() as libc::time_t,
            tv_nsec: timeout.subsec_nanos() as libc::c_long,
        };
        let woke = match self.queue.kevent(&[], &mut events, Some(deadline)) {
            Ok(0) | Err(Errno::EINTR) => return Ok(WatchEvent::Timeout),
            Ok(_) => events[0].fflags(),
            Err(e) => return Err(e.into()),
        };

        trace!(flags = ?woke, "kqueue event");
        if woke.intersects(FilterFlag::NOTE_RENAME | FilterFlag::NOTE_DELETE) {
            // The descriptor now names the old file.
            self.release();
            Ok(WatchEvent::Replaced)
        } else if woke.contains(FilterFlag::NOTE_WRITE) {
            Ok(WatchEvent::Modified)
        } else {
            Ok(WatchEvent::Timeout)
        }
    }

    fn release(&mut self) {
        self.file = None;
    }

    fn retry_delay(&self) -> Duration {
        RETRY_DELAY
    }
}
