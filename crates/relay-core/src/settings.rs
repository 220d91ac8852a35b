//! Relay settings and validation.
//!
//! These are pure domain values; adapters decide where they come from
//! (command line, environment, config file).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of messages a single subscriber may have pending.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Default interval between keep-alive comments on an idle stream.
pub const DEFAULT_KEEP_ALIVE_SECS: u64 = 30;

/// Tunables for the broadcast core and its streams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RelaySettings {
    /// Per-subscriber queue capacity. When full, new messages are dropped
    /// for that subscriber only.
    pub queue_capacity: usize,

    /// Seconds between keep-alive comments on each open stream.
    pub keep_alive_secs: u64,
}

impl RelaySettings {
    /// Create settings with the defaults.
    pub const fn with_defaults() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            keep_alive_secs: DEFAULT_KEEP_ALIVE_SECS,
        }
    }

    /// Keep-alive interval as a `Duration`.
    pub const fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Queue capacity must be between 1 and 65536, got {0}")]
    InvalidQueueCapacity(usize),

    #[error("Keep-alive interval must be between 1 and 3600 seconds, got {0}")]
    InvalidKeepAlive(u64),
}

/// Validate settings values.
pub fn validate_settings(settings: &RelaySettings) -> Result<(), SettingsError> {
    if !(1..=65_536).contains(&settings.queue_capacity) {
        return Err(SettingsError::InvalidQueueCapacity(settings.queue_capacity));
    }

    if !(1..=3_600).contains(&settings.keep_alive_secs) {
        return Err(SettingsError::InvalidKeepAlive(settings.keep_alive_secs));
    }

    Ok(())
}
