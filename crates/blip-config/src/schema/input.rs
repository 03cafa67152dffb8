//! Keyboard and pointer input options.

use serde::{Deserialize, Serialize};

use crate::shortcut::{Modifier, Shortcut};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub shortcut_save: Shortcut,
    pub shortcut_search: Shortcut,
    pub shortcut_split_vertical: Shortcut,
    pub shortcut_split_horizontal: Shortcut,
    pub vim_mode: bool,
    pub autocomplete: bool,
    pub clipboard_integration: bool,
    pub mouse_selection: bool,
    pub drag_and_drop: bool,
}

impl InputConfig {
    pub fn default_save() -> Shortcut {
        Shortcut::new(vec![Modifier::Ctrl], "S")
    }

    pub fn default_search() -> Shortcut {
        Shortcut::new(vec![Modifier::Ctrl], "F")
    }

    pub fn default_split_vertical() -> Shortcut {
        Shortcut::new(vec![Modifier::Ctrl, Modifier::Shift], "V")
    }

    pub fn default_split_horizontal() -> Shortcut {
        Shortcut::new(vec![Modifier::Ctrl, Modifier::Shift], "H")
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            shortcut_save: Self::default_save(),
            shortcut_search: Self::default_search(),
            shortcut_split_vertical: Self::default_split_vertical(),
            shortcut_split_horizontal: Self::default_split_horizontal(),
            vim_mode: false,
            autocomplete: true,
            clipboard_integration: true,
            mouse_selection: true,
            drag_and_drop: false,
        }
    }
}
