//! Metrics collector — the periodic work the monitoring licensee gates.
//! Buffers samples locally for a downstream exporter; records are
//! silently dropped while the license disallows collection.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::CollectorConfig;
use crate::licensee::MonitoringLicensee;

/// Kinds of samples the monitoring subsystem produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionEventKind {
    NodeStats,
    ClusterStats,
    IndexStats,
    Heartbeat,
}

/// One buffered monitoring sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEvent {
    pub kind: CollectionEventKind,
    pub timestamp: u64,
    pub properties: serde_json::Value,
}

/// Buffers monitoring samples while the license permits collection.
pub struct MetricsCollector {
    licensee: Arc<MonitoringLicensee>,
    buffer: Arc<Mutex<Vec<CollectionEvent>>>,
    buffer_cap: usize,
}

impl MetricsCollector {
    pub fn new(config: &CollectorConfig, licensee: Arc<MonitoringLicensee>) -> Self {
        Self {
            licensee,
            buffer: Arc::new(Mutex::new(Vec::new())),
            buffer_cap: config.effective_buffer_cap(),
        }
    }

    /// Record a sample. No-op while collection is gated off, so a
    /// disabled license stops the flow without tearing the loop down.
    pub fn record(&self, kind: CollectionEventKind, properties: serde_json::Value) {
        if !self.licensee.collection_enabled() {
            return;
        }

        let event = CollectionEvent {
            kind,
            timestamp: current_unix_time(),
            properties,
        };

        if let Ok(mut buf) = self.buffer.lock() {
            // Cap the buffer to prevent unbounded growth if the
            // exporter falls behind.
            if buf.len() < self.buffer_cap {
                buf.push(event);
            }
        }
    }

    /// Convenience: record a sample with no properties.
    pub fn record_simple(&self, kind: CollectionEventKind) {
        self.record(kind, json!({}));
    }

    /// Take all buffered samples (for the exporter).
    pub fn drain(&self) -> Vec<CollectionEvent> {
        if let Ok(mut buf) = self.buffer.lock() {
            std::mem::take(&mut *buf)
        } else {
            Vec::new()
        }
    }

    /// Number of buffered samples.
    pub fn pending_count(&self) -> usize {
        self.buffer.lock().map(|b| b.len()).unwrap_or(0)
    }

    /// Whether the license currently permits collection.
    pub fn collection_enabled(&self) -> bool {
        self.licensee.collection_enabled()
    }

    /// Serialize and clear the buffer. None when empty.
    pub fn serialize_batch(&self) -> Option<String> {
        let events = self.drain();
        if events.is_empty() {
            return None;
        }
        serde_json::to_string(&events).ok()
    }
}

fn current_unix_time() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
