//! Monitoring collector configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the metrics collector subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CollectorConfig {
    /// Collection interval in seconds. Default: 10.
    pub interval_secs: Option<u64>,
    /// Maximum buffered events before new records are dropped.
    /// Default: 1000.
    pub buffer_cap: Option<usize>,
}

impl CollectorConfig {
    /// Returns the effective collection interval, defaulting to 10s.
    pub fn effective_interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.unwrap_or(10))
    }

    /// Returns the effective buffer cap, defaulting to 1000.
    pub fn effective_buffer_cap(&self) -> usize {
        self.buffer_cap.unwrap_or(1000)
    }
}
