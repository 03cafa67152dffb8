//! Background watch loop and the consumer-facing handle around it.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use super::backend::{open_backend, WatchBackend, WatchEvent};
use super::options::{BackendKind, WatchOptions};

/// Builds the backend inside the watch thread.
pub type BackendFactory =
    Arc<dyn Fn(BackendKind) -> io::Result<Box<dyn WatchBackend>> + Send + Sync>;

/// Granularity of interruptible sleeps in the watch loop.
const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Watches one config file on a background thread.
///
/// Changes only raise a flag. The callback runs on whichever thread calls
/// [`check`](Self::check), so it may freely touch single-threaded state
/// and is not required to be `Send`.
pub struct ConfigWatcher {
    options: WatchOptions,
    factory: BackendFactory,
    path: Option<PathBuf>,
    callback: Option<Box<dyn FnMut()>>,
    running: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl ConfigWatcher {
    pub fn new() -> Self {
        Self::with_options(WatchOptions::default())
    }

    pub fn with_options(options: WatchOptions) -> Self {
        Self::with_backend_factory(options, Arc::new(open_backend))
    }

    /// Use a custom backend constructor instead of [`open_backend`].
    pub fn with_backend_factory(options: WatchOptions, factory: BackendFactory) -> Self {
        Self {
            options,
            factory,
            path: None,
            callback: None,
            running: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    /// Begin watching `path`. Any previous watch is stopped first and its
    /// callback dropped.
    ///
    /// Never fails: if the file is missing the loop keeps retrying, and if
    /// the OS primitive cannot be created the failure is logged and hot
    /// reload stays off.
    pub fn start<F>(&mut self, path: impl Into<PathBuf>, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();

        let path = path.into();
        self.callback = Some(Box::new(callback));
        self.path = Some(path.clone());
        self.dirty.store(false, Ordering::Release);
        self.running.store(true, Ordering::Release);

        let ctx = LoopContext {
            path: path.clone(),
            options: self.options,
            factory: Arc::clone(&self.factory),
            running: Arc::clone(&self.running),
            dirty: Arc::clone(&self.dirty),
        };

        match thread::Builder::new()
            .name("blip-config-watch".into())
            .spawn(move || ctx.run())
        {
            Ok(handle) => self.worker = Some(handle),
            Err(e) => {
                error!("failed to spawn config watch thread for {}: {e}", path.display());
                self.running.store(false, Ordering::Release);
            }
        }
    }

    /// Stop the loop and wait for it to exit. Idempotent.
    ///
    /// Returns within roughly one poll timeout. No callback runs after this
    /// returns, even if a change was already pending.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("config watch thread panicked");
            }
        }
        self.dirty.store(false, Ordering::Release);
    }

    /// Run the callback if a change was observed since the last call.
    ///
    /// Any number of changes between two calls collapse into one
    /// invocation. Returns whether the callback ran.
    pub fn check(&mut self) -> bool {
        if !self.dirty.swap(false, Ordering::AcqRel) {
            return false;
        }
        match self.callback.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Whether a change is waiting for the next [`check`](Self::check).
    pub fn has_pending_change(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Whether the background loop is alive.
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// The path given to the most recent [`start`](Self::start).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for ConfigWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Everything the watch thread owns.
struct LoopContext {
    path: PathBuf,
    options: WatchOptions,
    factory: BackendFactory,
    running: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
}

impl LoopContext {
    fn run(self) {
        let mut backend = match (self.factory)(self.options.backend) {
            Ok(backend) => backend,
            Err(e) => {
                error!(
                    "failed to create {} watch backend: {e}; hot reload disabled for {}",
                    self.options.backend,
                    self.path.display()
                );
                return;
            }
        };

        let retry_delay = self
            .options
            .retry_delay()
            .unwrap_or_else(|| backend.retry_delay());
        let poll_timeout = self.options.poll_timeout();
        info!(backend = backend.name(), "watching {}", self.path.display());

        // Set whenever the file may have changed while nothing watched it.
        // The next successful arm turns it into a pending reload.
        let mut stale = false;
        let mut reported_unarmed = false;

        while self.running.load(Ordering::Acquire) {
            if !backend.is_armed() {
                match backend.arm(&self.path) {
                    Ok(()) => {
                        reported_unarmed = false;
                        if stale {
                            debug!("re-armed watch on {}", self.path.display());
                            self.dirty.store(true, Ordering::Release);
                            stale = false;
                        }
                    }
                    Err(e) => {
                        if !reported_unarmed {
                            debug!("cannot watch {} yet: {e}", self.path.display());
                            reported_unarmed = true;
                        }
                        stale = true;
                        self.sleep(retry_delay);
                        continue;
                    }
                }
            }

            match backend.wait(poll_timeout) {
                Ok(WatchEvent::Timeout) => {}
                Ok(WatchEvent::Modified) => {
                    debug!("config file modified: {}", self.path.display());
                    self.dirty.store(true, Ordering::Release);
                }
                Ok(WatchEvent::Replaced) => {
                    debug!("config file replaced: {}", self.path.display());
                    stale = true;
                }
                Ok(WatchEvent::Invalidated) => {
                    debug!("watch on {} invalidated", self.path.display());
                    stale = true;
                }
                Err(e) => {
                    warn!("watch on {} failed: {e}", self.path.display());
                    backend.release();
                    stale = true;
                    self.sleep(retry_delay);
                }
            }
        }

        backend.release();
        debug!("config watch loop for {} exited", self.path.display());
    }

    /// Sleep for `total`, waking early once the loop is told to stop.
    fn sleep(&self, total: Duration) {
        let deadline = Instant::now() + total;
        while self.running.load(Ordering::Acquire) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            thread::sleep(remaining.min(SLEEP_SLICE));
        }
    }
}
