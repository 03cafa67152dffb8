//! File handling options.

use serde::{Deserialize, Serialize};

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoSaveMode {
    OnFocus,
    Delay,
    Manual,
}

impl Choice for AutoSaveMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("on_focus", Self::OnFocus),
        ("delay", Self::Delay),
        ("manual", Self::Manual),
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub autosave_mode: AutoSaveMode,
    /// Glob patterns hidden from the file explorer.
    pub exclude_patterns: Vec<String>,
    pub show_hidden_files: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            autosave_mode: AutoSaveMode::OnFocus,
            exclude_patterns: Vec::new(),
            show_hidden_files: false,
        }
    }
}
