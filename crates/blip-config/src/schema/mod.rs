//! Configuration schema types for the Blip editor.
//!
//! Every section implements `Default`, so a config file only needs to
//! mention the keys it wants to change. The on-disk format is the flat
//! `key = value` file handled by [`crate::ini_loader`]; the serde derives
//! exist for state dumps.

mod choice;
mod file;
mod font;
mod input;
mod plugins;
mod preference;
mod theme;
mod ui;

pub use choice::Choice;
pub use file::*;
pub use font::*;
pub use input::*;
pub use plugins::*;
pub use preference::*;
pub use theme::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// Root configuration snapshot consumed by the render loop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub theme: ThemeConfig,
    pub font: FontConfig,
    pub ui: UiConfig,
    pub preference: PreferenceConfig,
    pub input: InputConfig,
    pub plugins: PluginsConfig,
    pub file: FileConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::Modifier;
    use blip_common::Color;

    #[test]
    fn default_theme_matches_dark_palette() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.background, Color::opaque(0, 0, 0));
        assert_eq!(theme.foreground, Color::opaque(212, 212, 212));
        assert_eq!(theme.hover_tab_background, Color::opaque(42, 45, 46));
    }

    #[test]
    fn default_font() {
        let font = FontConfig::default();
        assert_eq!(font.family, "Adwaita Sans");
        assert_eq!(font.size, 14);
        assert_eq!(font.line_height, 1.5);
        assert!(!font.ligatures);
    }

    #[test]
    fn default_shortcuts() {
        let input = InputConfig::default();
        assert_eq!(input.shortcut_save.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(input.shortcut_save.key, "S");
        assert_eq!(
            input.shortcut_split_vertical.modifiers,
            vec![Modifier::Ctrl, Modifier::Shift]
        );
        assert_eq!(input.shortcut_split_vertical.key, "V");
    }

    #[test]
    fn hot_reload_enabled_by_default() {
        assert!(PluginsConfig::default().hot_reload);
        assert!(!PluginsConfig::default().lsp);
    }

    #[test]
    fn choice_parses_index_and_name() {
        assert_eq!(CursorStyle::parse_choice("1"), Some(CursorStyle::Line));
        assert_eq!(CursorStyle::parse_choice("block"), Some(CursorStyle::Block));
        assert_eq!(
            LineNumbers::parse_choice("absolute_and_relative"),
            Some(LineNumbers::AbsoluteAndRelative)
        );
        assert_eq!(AutoSaveMode::parse_choice("2"), Some(AutoSaveMode::Manual));
        assert_eq!(AutoFormat::parse_choice("3"), None);
        assert_eq!(AutoFormat::parse_choice("-1"), None);
        assert_eq!(AutoFormat::parse_choice("sometimes"), None);
    }

    #[test]
    fn choice_name_round_trips() {
        for (name, variant) in LineNumbers::VARIANTS {
            assert_eq!(variant.name(), *name);
        }
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"font":{"size":20}}"#).unwrap();
        assert_eq!(config.font.size, 20);
        assert_eq!(config.font.family, "Adwaita Sans");
        assert_eq!(config.ui.ui_scale, 100);
    }
}
