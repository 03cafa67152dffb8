//! Window chrome and editor surface options.

use serde::{Deserialize, Serialize};

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    Block,
    Line,
}

impl Choice for CursorStyle {
    const VARIANTS: &'static [(&'static str, Self)] =
        &[("block", Self::Block), ("line", Self::Line)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineNumbers {
    Absolute,
    Relative,
    Hidden,
    AbsoluteAndRelative,
}

impl Choice for LineNumbers {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("absolute", Self::Absolute),
        ("relative", Self::Relative),
        ("hidden", Self::Hidden),
        ("absolute_and_relative", Self::AbsoluteAndRelative),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub cursor_style: CursorStyle,
    pub line_numbers: LineNumbers,
    pub status_bar_visible: bool,
    pub tab_bar_visible: bool,
    pub highlight_current_line: bool,
    pub show_whitespace: bool,
    pub show_indent_guides: bool,
    /// UI scale in percent; values of 5 or less are rejected.
    pub ui_scale: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cursor_style: CursorStyle::Block,
            line_numbers: LineNumbers::Absolute,
            status_bar_visible: false,
            tab_bar_visible: false,
            highlight_current_line: false,
            show_whitespace: true,
            show_indent_guides: false,
            ui_scale: 100,
        }
    }
}
