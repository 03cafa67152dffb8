//! Keyboard shortcut decoding for `shortcut_*` config keys.
//!
//! Shortcuts are written as `Modifier+...+Key`, for example `Control+S`
//! or `Ctrl+Shift+V`.

mod parse;
mod types;

pub use parse::parse_shortcut;
pub use types::{Modifier, Shortcut};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_control_long_name() {
        let sc = parse_shortcut("Control+S").unwrap();
        assert_eq!(sc.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(sc.key, "S");
    }

    #[test]
    fn parse_multi_modifier() {
        let sc = parse_shortcut("Ctrl+Shift+T").unwrap();
        assert_eq!(sc.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(sc.key, "T");
    }

    #[test]
    fn parse_alt_first() {
        let sc = parse_shortcut("Alt+Shift+f").unwrap();
        assert_eq!(sc.modifiers, vec![Modifier::Alt, Modifier::Shift]);
        assert_eq!(sc.key, "F");
    }

    #[test]
    fn parse_option_becomes_alt() {
        let sc = parse_shortcut("Option+Period").unwrap();
        assert_eq!(sc.modifiers, vec![Modifier::Alt]);
        assert_eq!(sc.key, ".");
    }

    #[test]
    fn parse_cmd_modifier() {
        let sc = parse_shortcut("Cmd+G").unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(sc.modifiers, vec![Modifier::Super]);
        } else {
            assert_eq!(sc.modifiers, vec![Modifier::Ctrl]);
        }
    }

    #[test]
    fn parse_named_and_function_keys() {
        assert_eq!(parse_shortcut("Ctrl+Return").unwrap().key, "Enter");
        assert_eq!(parse_shortcut("Ctrl+esc").unwrap().key, "Escape");
        assert_eq!(parse_shortcut("Alt+f12").unwrap().key, "F12");
    }

    #[test]
    fn parse_duplicate_modifiers_deduplicated() {
        let sc = parse_shortcut("Ctrl+Ctrl+A").unwrap();
        assert_eq!(sc.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(sc.key, "A");
    }

    #[test]
    fn parse_rejects_bare_key() {
        assert!(parse_shortcut("S").is_err());
        assert!(parse_shortcut("").is_err());
    }

    #[test]
    fn parse_rejects_shift_as_leading_modifier() {
        assert!(parse_shortcut("Shift+S").is_err());
    }

    #[test]
    fn parse_rejects_unknown_key_name() {
        assert!(parse_shortcut("Ctrl+Banana").is_err());
        assert!(parse_shortcut("Ctrl+F25").is_err());
    }

    #[test]
    fn parse_rejects_missing_key() {
        assert!(parse_shortcut("Ctrl+Shift").is_err());
        assert!(parse_shortcut("Ctrl+").is_err());
    }

    #[test]
    fn parse_rejects_key_in_the_middle() {
        assert!(parse_shortcut("Ctrl+S+Shift").is_err());
    }

    #[test]
    fn display_round_trips() {
        let sc = parse_shortcut("control + shift + h").unwrap();
        assert_eq!(sc.to_string(), "Ctrl+Shift+H");
        assert_eq!(parse_shortcut(&sc.to_string()).unwrap(), sc);
    }
}
