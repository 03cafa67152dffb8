//! Color parsing.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, and `rgb()`/`rgba()` formats.
//! In the functional format the alpha component can be either 0-255
//! (integer) or 0.0-1.0 (float), matching CSS conventions.

mod parse;

#[cfg(test)]
mod tests;

use blip_common::{Color, ConfigError};

use parse::{parse_functional, parse_hex};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_functional(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}
