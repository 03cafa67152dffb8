use blip_common::ConfigError;

use super::types::{Modifier, Shortcut};

/// Parses a shortcut string like `"Control+S"` or `"Ctrl+Shift+V"`.
///
/// Rules:
/// - at least one modifier and a key, joined by `+`
/// - the first token must be a primary modifier (Ctrl, Alt, Super and
///   their aliases); Shift may only be added after it
/// - the key is the last token and must be a known key name
///
/// `"Cmd"` / `"Command"` map to `Super` on macOS and `Ctrl` elsewhere.
pub fn parse_shortcut(s: &str) -> Result<Shortcut, ConfigError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();

    if tokens.len() < 2 {
        return Err(ConfigError::ParseError(format!(
            "shortcut needs a modifier and a key: {s:?}"
        )));
    }

    let (key_token, modifier_tokens) = tokens
        .split_last()
        .ok_or_else(|| ConfigError::ParseError("empty shortcut".into()))?;

    let mut modifiers = Vec::new();
    for (i, token) in modifier_tokens.iter().enumerate() {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            ConfigError::ParseError(format!("unrecognized modifier {token:?} in {s:?}"))
        })?;
        if i == 0 && modifier == Modifier::Shift {
            return Err(ConfigError::ParseError(format!(
                "shortcut must start with Ctrl, Alt or Super: {s:?}"
            )));
        }
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    let key = normalize_key_name(key_token)
        .ok_or_else(|| ConfigError::ParseError(format!("unknown key {key_token:?} in {s:?}")))?;

    Ok(Shortcut { modifiers, key })
}

fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

fn normalize_key_name(token: &str) -> Option<String> {
    let lower = token.to_lowercase();
    let named = match lower.as_str() {
        "period" => ".",
        "comma" => ",",
        "slash" => "/",
        "backslash" => "\\",
        "minus" => "-",
        "equals" => "=",
        "space" => "Space",
        "enter" | "return" => "Enter",
        "escape" | "esc" => "Escape",
        "tab" => "Tab",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "insert" => "Insert",
        "up" => "Up",
        "down" => "Down",
        "left" => "Left",
        "right" => "Right",
        "home" => "Home",
        "end" => "End",
        "pageup" => "PageUp",
        "pagedown" => "PageDown",
        _ => return single_char_or_function_key(token, &lower),
    };
    Some(named.into())
}

fn single_char_or_function_key(token: &str, lower: &str) -> Option<String> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return (c.is_ascii_graphic() && c != '+').then(|| c.to_ascii_uppercase().to_string());
    }

    let number: u8 = lower.strip_prefix('f')?.parse().ok()?;
    (1..=24).contains(&number).then(|| format!("F{number}"))
}
