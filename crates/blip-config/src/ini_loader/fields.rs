//! Static table mapping config keys to typed setters.
//!
//! Every setter decodes the raw string; when decoding fails the field is
//! reset to its default and the reason is reported back to the loader.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use blip_common::Color;

use crate::colors::parse_color;
use crate::schema::{
    AutoFormat, AutoSaveMode, Choice, CursorStyle, EditorConfig, FileConfig, FontConfig,
    InputConfig, LineNumbers, PluginsConfig, PreferenceConfig, ThemeConfig, UiConfig,
};
use crate::shortcut::{parse_shortcut, Shortcut};

/// Result of applying one `key = value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Applied,
    /// The value was rejected and the field was reset to its default.
    Fallback(String),
}

type Setter = fn(&mut EditorConfig, &str) -> FieldOutcome;

static FIELDS: LazyLock<HashMap<&'static str, Setter>> = LazyLock::new(|| {
    let mut m: HashMap<&'static str, Setter> = HashMap::new();

    // [theme]
    m.insert("background", |c, v| color(&mut c.theme.background, v, ThemeConfig::DARK.background));
    m.insert("foreground", |c, v| color(&mut c.theme.foreground, v, ThemeConfig::DARK.foreground));
    m.insert("cursor", |c, v| color(&mut c.theme.cursor, v, ThemeConfig::DARK.cursor));
    m.insert("selection", |c, v| color(&mut c.theme.selection, v, ThemeConfig::DARK.selection));
    m.insert("line_number", |c, v| color(&mut c.theme.line_number, v, ThemeConfig::DARK.line_number));
    m.insert("whitespace", |c, v| color(&mut c.theme.whitespace, v, ThemeConfig::DARK.whitespace));
    m.insert("diff_add", |c, v| color(&mut c.theme.diff_add, v, ThemeConfig::DARK.diff_add));
    m.insert("diff_remove", |c, v| color(&mut c.theme.diff_remove, v, ThemeConfig::DARK.diff_remove));
    m.insert("diff_change", |c, v| color(&mut c.theme.diff_change, v, ThemeConfig::DARK.diff_change));
    m.insert("diagnostic_error", |c, v| {
        color(&mut c.theme.diagnostic_error, v, ThemeConfig::DARK.diagnostic_error)
    });
    m.insert("diagnostic_warning", |c, v| {
        color(&mut c.theme.diagnostic_warning, v, ThemeConfig::DARK.diagnostic_warning)
    });
    m.insert("diagnostic_info", |c, v| {
        color(&mut c.theme.diagnostic_info, v, ThemeConfig::DARK.diagnostic_info)
    });
    m.insert("popup_background", |c, v| {
        color(&mut c.theme.popup_background, v, ThemeConfig::DARK.popup_background)
    });
    m.insert("tooltip_border", |c, v| {
        color(&mut c.theme.tooltip_border, v, ThemeConfig::DARK.tooltip_border)
    });
    m.insert("completion_background", |c, v| {
        color(&mut c.theme.completion_background, v, ThemeConfig::DARK.completion_background)
    });
    m.insert("hover_tab_background", |c, v| {
        color(&mut c.theme.hover_tab_background, v, ThemeConfig::DARK.hover_tab_background)
    });

    // [font]
    m.insert("font_family", |c, v| {
        let trimmed = v.trim();
        let parsed = if trimmed.is_empty() {
            Err("font family is empty".to_string())
        } else {
            Ok(trimmed.to_string())
        };
        assign(&mut c.font.family, parsed, FontConfig::default().family)
    });
    m.insert("font_color", |c, v| color(&mut c.font.color, v, FontConfig::default().color));
    m.insert("font_ligatures", |c, v| flag(&mut c.font.ligatures, v, FontConfig::default().ligatures));
    m.insert("font_size", |c, v| {
        number(&mut c.font.size, v, FontConfig::default().size, |n| n > 0)
    });
    m.insert("line_height", |c, v| {
        number(&mut c.font.line_height, v, FontConfig::default().line_height, |h: f32| {
            h.is_finite() && h > 0.0
        })
    });

    // [ui]
    m.insert("cursor_style", |c, v| {
        choice::<CursorStyle>(&mut c.ui.cursor_style, v, UiConfig::default().cursor_style)
    });
    m.insert("line_numbers", |c, v| {
        choice::<LineNumbers>(&mut c.ui.line_numbers, v, UiConfig::default().line_numbers)
    });
    m.insert("status_bar_visible", |c, v| {
        flag(&mut c.ui.status_bar_visible, v, UiConfig::default().status_bar_visible)
    });
    m.insert("tab_bar_visible", |c, v| {
        flag(&mut c.ui.tab_bar_visible, v, UiConfig::default().tab_bar_visible)
    });
    m.insert("highlight_current_line", |c, v| {
        flag(&mut c.ui.highlight_current_line, v, UiConfig::default().highlight_current_line)
    });
    m.insert("show_whitespace", |c, v| {
        flag(&mut c.ui.show_whitespace, v, UiConfig::default().show_whitespace)
    });
    m.insert("show_indent_guides", |c, v| {
        flag(&mut c.ui.show_indent_guides, v, UiConfig::default().show_indent_guides)
    });
    m.insert("ui_scale", |c, v| {
        // Fractional scales are truncated to whole percent.
        let parsed = v
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|s| s.is_finite() && *s > 5.0 && *s <= f32::from(u16::MAX))
            .map(|s| s as u16)
            .ok_or_else(|| format!("ui_scale must be a number above 5, got {v:?}"));
        assign(&mut c.ui.ui_scale, parsed, UiConfig::default().ui_scale)
    });

    // [preference]
    m.insert("tab_width", |c, v| {
        number(&mut c.preference.tab_width, v, PreferenceConfig::default().tab_width, |w| w > 2)
    });
    m.insert("auto_format", |c, v| {
        choice::<AutoFormat>(&mut c.preference.auto_format, v, PreferenceConfig::default().auto_format)
    });
    m.insert("bracket_matching", |c, v| {
        flag(&mut c.preference.bracket_matching, v, PreferenceConfig::default().bracket_matching)
    });
    m.insert("auto_close_brackets", |c, v| {
        flag(&mut c.preference.auto_close_brackets, v, PreferenceConfig::default().auto_close_brackets)
    });
    m.insert("word_wrap", |c, v| {
        flag(&mut c.preference.word_wrap, v, PreferenceConfig::default().word_wrap)
    });
    m.insert("trim_trailing_whitespace_on_save", |c, v| {
        flag(
            &mut c.preference.trim_trailing_whitespace_on_save,
            v,
            PreferenceConfig::default().trim_trailing_whitespace_on_save,
        )
    });
    m.insert("highlight_active_scope", |c, v| {
        flag(
            &mut c.preference.highlight_active_scope,
            v,
            PreferenceConfig::default().highlight_active_scope,
        )
    });
    m.insert("auto_indent", |c, v| {
        flag(&mut c.preference.auto_indent, v, PreferenceConfig::default().auto_indent)
    });

    // [input]
    m.insert("shortcut_save", |c, v| {
        shortcut(&mut c.input.shortcut_save, v, InputConfig::default_save())
    });
    m.insert("shortcut_search", |c, v| {
        shortcut(&mut c.input.shortcut_search, v, InputConfig::default_search())
    });
    m.insert("shortcut_split_vertical", |c, v| {
        shortcut(&mut c.input.shortcut_split_vertical, v, InputConfig::default_split_vertical())
    });
    m.insert("shortcut_split_horizontal", |c, v| {
        shortcut(&mut c.input.shortcut_split_horizontal, v, InputConfig::default_split_horizontal())
    });
    m.insert("vim_mode", |c, v| flag(&mut c.input.vim_mode, v, InputConfig::default().vim_mode));
    m.insert("autocomplete", |c, v| {
        flag(&mut c.input.autocomplete, v, InputConfig::default().autocomplete)
    });
    m.insert("clipboard_integration", |c, v| {
        flag(&mut c.input.clipboard_integration, v, InputConfig::default().clipboard_integration)
    });
    m.insert("mouse_selection", |c, v| {
        flag(&mut c.input.mouse_selection, v, InputConfig::default().mouse_selection)
    });
    m.insert("drag_and_drop", |c, v| {
        flag(&mut c.input.drag_and_drop, v, InputConfig::default().drag_and_drop)
    });

    // [plugins]
    m.insert("lsp", |c, v| flag(&mut c.plugins.lsp, v, PluginsConfig::default().lsp));
    m.insert("snippets", |c, v| flag(&mut c.plugins.snippets, v, PluginsConfig::default().snippets));
    m.insert("git", |c, v| flag(&mut c.plugins.git, v, PluginsConfig::default().git));
    m.insert("linter", |c, v| flag(&mut c.plugins.linter, v, PluginsConfig::default().linter));
    m.insert("file_explorer", |c, v| {
        flag(&mut c.plugins.file_explorer, v, PluginsConfig::default().file_explorer)
    });
    m.insert("hot_reload", |c, v| {
        flag(&mut c.plugins.hot_reload, v, PluginsConfig::default().hot_reload)
    });

    // [file]
    m.insert("autosave_mode", |c, v| {
        choice::<AutoSaveMode>(&mut c.file.autosave_mode, v, FileConfig::default().autosave_mode)
    });
    m.insert("exclude_patterns", |c, v| {
        c.file.exclude_patterns = v
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        FieldOutcome::Applied
    });
    m.insert("show_hidden_files", |c, v| {
        flag(&mut c.file.show_hidden_files, v, FileConfig::default().show_hidden_files)
    });

    m
});

/// Apply one pair to `config`. Returns `None` when the key is unknown.
pub(crate) fn apply_field(config: &mut EditorConfig, key: &str, value: &str) -> Option<FieldOutcome> {
    FIELDS.get(key).map(|setter| setter(config, value))
}

pub fn is_known_key(key: &str) -> bool {
    FIELDS.contains_key(key)
}

/// All recognized keys, sorted.
pub fn known_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = FIELDS.keys().copied().collect();
    keys.sort_unstable();
    keys
}

fn assign<T>(dst: &mut T, parsed: Result<T, String>, default: T) -> FieldOutcome {
    match parsed {
        Ok(value) => {
            *dst = value;
            FieldOutcome::Applied
        }
        Err(reason) => {
            *dst = default;
            FieldOutcome::Fallback(reason)
        }
    }
}

fn color(dst: &mut Color, value: &str, default: Color) -> FieldOutcome {
    assign(dst, parse_color(value).map_err(|e| e.to_string()), default)
}

fn flag(dst: &mut bool, value: &str, default: bool) -> FieldOutcome {
    let parsed = match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected true or false, got {other:?}")),
    };
    assign(dst, parsed, default)
}

fn number<T>(dst: &mut T, value: &str, default: T, accept: impl Fn(T) -> bool) -> FieldOutcome
where
    T: FromStr + Copy,
{
    let parsed = value
        .trim()
        .parse::<T>()
        .ok()
        .filter(|n| accept(*n))
        .ok_or_else(|| format!("out of range or not a number: {value:?}"));
    assign(dst, parsed, default)
}

fn choice<T: Choice>(dst: &mut T, value: &str, default: T) -> FieldOutcome {
    let parsed = T::parse_choice(value).ok_or_else(|| {
        let names: Vec<&str> = T::VARIANTS.iter().map(|(name, _)| *name).collect();
        format!("expected one of {} or an index, got {value:?}", names.join(", "))
    });
    assign(dst, parsed, default)
}

fn shortcut(dst: &mut Shortcut, value: &str, default: Shortcut) -> FieldOutcome {
    assign(dst, parse_shortcut(value).map_err(|e| e.to_string()), default)
}
