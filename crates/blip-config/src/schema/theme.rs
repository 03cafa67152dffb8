//! Editor color theme.

use blip_common::Color;
use serde::{Deserialize, Serialize};

/// Colors used by the editor surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub selection: Color,
    pub line_number: Color,
    pub whitespace: Color,
    pub diff_add: Color,
    pub diff_remove: Color,
    pub diff_change: Color,
    pub diagnostic_error: Color,
    pub diagnostic_warning: Color,
    pub diagnostic_info: Color,
    pub popup_background: Color,
    pub tooltip_border: Color,
    pub completion_background: Color,
    pub hover_tab_background: Color,
}

impl ThemeConfig {
    pub const DARK: Self = Self {
        background: Color::opaque(0, 0, 0),
        foreground: Color::opaque(212, 212, 212),
        cursor: Color::opaque(255, 255, 255),
        selection: Color::opaque(47, 47, 47),
        line_number: Color::opaque(133, 133, 133),
        whitespace: Color::opaque(59, 59, 59),
        diff_add: Color::opaque(88, 124, 12),
        diff_remove: Color::opaque(148, 21, 27),
        diff_change: Color::opaque(0, 90, 158),
        diagnostic_error: Color::opaque(244, 135, 113),
        diagnostic_warning: Color::opaque(204, 167, 0),
        diagnostic_info: Color::opaque(117, 190, 255),
        popup_background: Color::opaque(37, 37, 38),
        tooltip_border: Color::opaque(69, 69, 69),
        completion_background: Color::opaque(45, 45, 48),
        hover_tab_background: Color::opaque(42, 45, 46),
    };
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::DARK
    }
}
