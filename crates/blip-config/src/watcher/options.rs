//! Settings for the watch loop itself. These are fixed for the lifetime of
//! a watcher; only the watched file is reloaded live.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which backend family the watch loop uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// inotify on Linux, kqueue on macOS and the BSDs. Falls back to
    /// [`BackendKind::Portable`] elsewhere.
    #[default]
    Native,
    /// The `notify` crate, watching the parent directory.
    Portable,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "portable" | "notify" => Ok(Self::Portable),
            other => Err(format!("unknown watch backend {other:?} (expected native or portable)")),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::Portable => f.write_str("portable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchOptions {
    pub backend: BackendKind,
    /// Upper bound on one blocking wait, and so on how long `stop()` can take.
    pub poll_timeout_ms: u64,
    /// Delay before retrying a failed arm. `None` uses the backend's own delay.
    pub retry_delay_ms: Option<u64>,
}

impl WatchOptions {
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.max(1))
    }

    pub fn retry_delay(&self) -> Option<Duration> {
        self.retry_delay_ms.map(Duration::from_millis)
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            backend: BackendKind::Native,
            poll_timeout_ms: 500,
            retry_delay_ms: None,
        }
    }
}
