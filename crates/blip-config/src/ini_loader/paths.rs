//! Config path resolution and default file creation.

use blip_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_ini;

/// Get the platform-specific default config file path.
///
/// On Linux: `~/.config/blip/config.ini`
/// On macOS: `~/Library/Application Support/blip/config.ini`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("blip").join("config.ini"))
}

/// Create a commented default config file, including parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_ini()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
