use serde::{Deserialize, Serialize};
use std::fmt;

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Ctrl key on all platforms.
    Ctrl,
    /// Alt key (Option on macOS).
    Alt,
    /// Shift key.
    Shift,
    /// Super key: Cmd on macOS, Win on Windows, Super on Linux.
    Super,
}

impl Modifier {
    fn label(self) -> &'static str {
        match self {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        }
    }
}

/// A shortcut made of one or more modifiers and a normalized key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl Shortcut {
    pub fn new(modifiers: Vec<Modifier>, key: impl Into<String>) -> Self {
        Self {
            modifiers,
            key: key.into(),
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.label())?;
        }
        f.write_str(&self.key)
    }
}
