/// Split one config line into a trimmed `(key, value)` pair.
///
/// Returns `None` for blank lines, `#`/`;` comments, `[section]` headers,
/// lines without `=`, and pairs with an empty key or value.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    if line.starts_with('[') && line.ends_with(']') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}
