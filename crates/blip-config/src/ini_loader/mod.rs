//! `key = value` config file loading and creation.
//!
//! There is a single parse/update pipeline: lines go through
//! [`parse_line`], each pair is routed through the field table, and
//! every field either takes the new value or falls back to its default.
//! Keys that are absent from the file keep whatever value the snapshot
//! already had, so a reload never wipes settings it cannot read.

mod fields;
mod line;
mod loader;
mod paths;
mod template;


pub use fields::{is_known_key, known_keys, FieldOutcome};
pub use line::parse_line;
pub use loader::{apply_str, load_from_path, load_into, FieldFallback, LoadReport};
pub use paths::{create_default_config, default_config_path};
