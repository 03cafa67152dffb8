//! File watcher for live config reload.
//!
//! A [`ConfigWatcher`] runs one background thread that blocks on the
//! platform's native change notification facility and raises a single
//! dirty flag. The consumer drains that flag from its own thread with
//! [`ConfigWatcher::check`], which is where the reload callback runs.

mod backend;
mod config_watcher;
mod options;


pub use backend::{open_backend, WatchBackend, WatchEvent};
pub use config_watcher::{BackendFactory, ConfigWatcher};
pub use options::{BackendKind, WatchOptions};
