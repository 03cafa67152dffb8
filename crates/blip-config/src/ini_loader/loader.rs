//! Core config loading: apply text to a live snapshot.

use crate::schema::EditorConfig;
use blip_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use super::fields::{apply_field, FieldOutcome};
use super::line::parse_line;

/// A value that could not be decoded and was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFallback {
    pub line: usize,
    pub key: String,
    pub value: String,
    pub reason: String,
}

/// What happened while applying a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of pairs that were decoded and stored.
    pub applied: usize,
    pub fallbacks: Vec<FieldFallback>,
    /// Keys that are not part of the schema, in file order.
    pub unknown_keys: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.fallbacks.is_empty() && self.unknown_keys.is_empty()
    }
}

/// Apply config text to `config` in place.
///
/// Never fails: bad values fall back to their defaults field by field and
/// keys missing from `text` keep their current value.
pub fn apply_str(text: &str, config: &mut EditorConfig) -> LoadReport {
    let mut report = LoadReport::default();

    for (index, raw) in text.lines().enumerate() {
        let Some((key, value)) = parse_line(raw) else {
            continue;
        };
        match apply_field(config, key, value) {
            Some(FieldOutcome::Applied) => report.applied += 1,
            Some(FieldOutcome::Fallback(reason)) => report.fallbacks.push(FieldFallback {
                line: index + 1,
                key: key.to_string(),
                value: value.to_string(),
                reason,
            }),
            None => report.unknown_keys.push(key.to_string()),
        }
    }

    report
}

/// Re-read `path` and apply it to `config` in place.
///
/// If the file cannot be read the snapshot is left untouched.
pub fn load_into(path: &Path, config: &mut EditorConfig) -> Result<LoadReport, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let report = apply_str(&content, config);

    for fallback in &report.fallbacks {
        warn!(
            "{}:{}: {} = {:?} rejected ({}), using default",
            path.display(),
            fallback.line,
            fallback.key,
            fallback.value,
            fallback.reason
        );
    }
    if !report.unknown_keys.is_empty() {
        debug!("ignoring unknown config keys: {}", report.unknown_keys.join(", "));
    }

    info!(
        "loaded config from {} ({} applied, {} fallbacks)",
        path.display(),
        report.applied,
        report.fallbacks.len()
    );
    Ok(report)
}

/// Load a fresh snapshot from `path`, starting from defaults.
pub fn load_from_path(path: &Path) -> Result<EditorConfig, ConfigError> {
    let mut config = EditorConfig::default();
    load_into(path, &mut config)?;
    Ok(config)
}
