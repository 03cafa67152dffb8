//! Core reload manager implementation.

use crate::ini_loader::{self, LoadReport};
use crate::schema::EditorConfig;
use crate::watcher::{ConfigWatcher, WatchOptions};
use blip_common::ConfigError;
use std::cell::{Cell, Ref, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{info, warn};

/// Owns the live config snapshot and the watcher that keeps it current.
pub struct ReloadManager {
    path: PathBuf,
    config: Rc<RefCell<EditorConfig>>,
    generation: Rc<Cell<u64>>,
    watcher: ConfigWatcher,
}

impl ReloadManager {
    /// Load the initial config from `path` and start watching it.
    ///
    /// A missing or unreadable file yields defaults. Watching only starts
    /// when `plugins.hot_reload` is enabled in that initial snapshot.
    pub fn start(path: impl Into<PathBuf>) -> Self {
        Self::start_with_options(path, WatchOptions::default())
    }

    pub fn start_with_options(path: impl Into<PathBuf>, options: WatchOptions) -> Self {
        let path = path.into();
        let initial = match ini_loader::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                EditorConfig::default()
            }
        };
        let hot_reload = initial.plugins.hot_reload;

        let mut manager = Self {
            path,
            config: Rc::new(RefCell::new(initial)),
            generation: Rc::new(Cell::new(0)),
            watcher: ConfigWatcher::with_options(options),
        };

        if hot_reload {
            let callback = reload_callback(
                manager.path.clone(),
                Rc::clone(&manager.config),
                Rc::clone(&manager.generation),
            );
            manager.watcher.start(manager.path.clone(), callback);
        } else {
            info!("hot reload disabled, not watching {}", manager.path.display());
        }

        manager
    }

    /// Apply a pending change, if any. Returns whether the snapshot was
    /// reloaded.
    pub fn tick(&mut self) -> bool {
        let before = self.generation.get();
        self.watcher.check();
        self.generation.get() != before
    }

    /// Re-read the file now, regardless of the watcher.
    pub fn reload_now(&mut self) -> Result<LoadReport, ConfigError> {
        let report = ini_loader::load_into(&self.path, &mut self.config.borrow_mut())?;
        self.generation.set(self.generation.get() + 1);
        Ok(report)
    }

    pub fn config(&self) -> Ref<'_, EditorConfig> {
        self.config.borrow()
    }

    /// Number of reloads applied since start.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.is_running()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stop watching. The snapshot stays readable.
    pub fn stop(&mut self) {
        self.watcher.stop();
    }
}

fn reload_callback(
    path: PathBuf,
    config: Rc<RefCell<EditorConfig>>,
    generation: Rc<Cell<u64>>,
) -> impl FnMut() + 'static {
    move || {
        match ini_loader::load_into(&path, &mut config.borrow_mut()) {
            Ok(_) => {
                generation.set(generation.get() + 1);
                info!("config reloaded (generation {})", generation.get());
            }
            Err(e) => warn!("config reload failed: {e}, keeping current settings"),
        }
    }
}
