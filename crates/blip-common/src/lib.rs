pub mod errors;
pub mod types;

pub use errors::{BlipError, ConfigError};
pub use types::Color;
