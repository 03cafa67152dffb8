//! Blip editor configuration.
//!
//! Flat `key = value` config files decoded into a typed [`EditorConfig`],
//! plus a background file watcher that lets the editor pick up edits to
//! that file while it runs. Every field has a default, so partial and
//! partly invalid files still load.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use blip_config::{config_to_json, ReloadManager};
//!
//! let mut reload = ReloadManager::start("config.ini");
//! loop {
//!     if reload.tick() {
//!         println!("{}", config_to_json(&reload.config()));
//!     }
//!     # break;
//! }
//! ```

pub mod colors;
pub mod ini_loader;
pub mod reload;
pub mod schema;
pub mod shortcut;
pub mod watcher;

pub use ini_loader::LoadReport;
pub use reload::ReloadManager;
pub use schema::EditorConfig;
pub use watcher::{BackendKind, ConfigWatcher, WatchOptions};

use blip_common::ConfigError;

/// Load config from the platform default path, writing the commented
/// template there first if no file exists yet.
pub fn load_config() -> Result<EditorConfig, ConfigError> {
    let path = ini_loader::default_config_path()?;
    if !path.exists() {
        ini_loader::create_default_config(&path)?;
    }
    ini_loader::load_from_path(&path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &EditorConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
