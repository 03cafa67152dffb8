use serde::{Deserialize, Serialize};

/// Optional subsystems. `hot_reload` gates the config file watcher and is
/// only read at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub lsp: bool,
    pub snippets: bool,
    pub git: bool,
    pub linter: bool,
    pub file_explorer: bool,
    pub hot_reload: bool,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            lsp: false,
            snippets: false,
            git: false,
            linter: false,
            file_explorer: false,
            hot_reload: true,
        }
    }
}
