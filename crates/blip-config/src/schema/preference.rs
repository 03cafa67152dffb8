//! Editing behavior preferences.

use serde::{Deserialize, Serialize};

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoFormat {
    Manual,
    OnSave,
    OnPaste,
}

impl Choice for AutoFormat {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("manual", Self::Manual),
        ("on_save", Self::OnSave),
        ("on_paste", Self::OnPaste),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    /// Tab width in columns; values of 2 or less are rejected.
    pub tab_width: u16,
    pub auto_format: AutoFormat,
    pub bracket_matching: bool,
    pub auto_close_brackets: bool,
    pub word_wrap: bool,
    pub trim_trailing_whitespace_on_save: bool,
    pub highlight_active_scope: bool,
    pub auto_indent: bool,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            tab_width: 4,
            auto_format: AutoFormat::OnSave,
            bracket_matching: true,
            auto_close_brackets: true,
            word_wrap: false,
            trim_trailing_whitespace_on_save: true,
            highlight_active_scope: true,
            auto_indent: true,
        }
    }
}
