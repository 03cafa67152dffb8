//! Live config reload for single-threaded consumers.
//!
//! Combines the file watcher with the INI loader: changes are detected in
//! the background and applied to the shared snapshot when the consumer
//! calls [`ReloadManager::tick`], typically once per frame.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::ReloadManager;
