//! Default config template with inline documentation comments.

/// Generate the default config content. Every setting is commented out,
/// so the file documents the defaults without pinning them.
pub(crate) fn default_config_ini() -> &'static str {
    r##"# Blip configuration
# Lines are `key = value`. Lines starting with # or ; are comments.
# Missing keys keep their defaults; invalid values fall back to the default.
# Changes are picked up while the editor is running.

[theme]
# background = #000000
# foreground = #d4d4d4
# cursor = #ffffff
# selection = #2f2f2f
# line_number = #858585
# whitespace = #3b3b3b
# diff_add = #587c0c
# diff_remove = #94151b
# diff_change = #005a9e
# diagnostic_error = #f48771
# diagnostic_warning = #cca700
# diagnostic_info = #75beff
# popup_background = #252526
# tooltip_border = #454545
# completion_background = #2d2d30
# hover_tab_background = #2a2d2e

[font]
# font_family = Adwaita Sans
# font_color = #d4d4d4
# font_ligatures = false
# font_size = 14
# line_height = 1.5

[ui]
# cursor_style = block          # block, line
# line_numbers = absolute       # absolute, relative, hidden, absolute_and_relative
# status_bar_visible = false
# tab_bar_visible = false
# highlight_current_line = false
# show_whitespace = true
# show_indent_guides = false
# ui_scale = 100

[preference]
# tab_width = 4
# auto_format = on_save         # manual, on_save, on_paste
# bracket_matching = true
# auto_close_brackets = true
# word_wrap = false
# trim_trailing_whitespace_on_save = true
# highlight_active_scope = true
# auto_indent = true

[input]
# shortcut_save = Control+S
# shortcut_search = Control+F
# shortcut_split_vertical = Control+Shift+V
# shortcut_split_horizontal = Control+Shift+H
# vim_mode = false
# autocomplete = true
# clipboard_integration = true
# mouse_selection = true
# drag_and_drop = false

[plugins]
# lsp = false
# snippets = false
# git = false
# linter = false
# file_explorer = false
# hot_reload = true             # read at startup only

[file]
# autosave_mode = on_focus      # on_focus, delay, manual
# exclude_patterns = .git, target, node_modules
# show_hidden_files = false
"##
}
