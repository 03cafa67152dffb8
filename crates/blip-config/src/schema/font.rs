//! Typography configuration types.

use blip_common::Color;
use serde::{Deserialize, Serialize};

/// Typography configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub color: Color,
    pub ligatures: bool,
    /// Font size in points, always positive.
    pub size: u16,
    /// Line height multiplier, always positive.
    pub line_height: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Adwaita Sans".into(),
            color: Color::opaque(212, 212, 212),
            ligatures: false,
            size: 14,
            line_height: 1.5,
        }
    }
}
