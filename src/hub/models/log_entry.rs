//! # Log Entry
//!
//! Read-only log line fetched from the remote service.

use serde::{Deserialize, Serialize};

/// Number of most recent log lines the panel keeps
pub const LOG_PANEL_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }

    /// Keep the last `LOG_PANEL_CAPACITY` entries in the order received
    pub fn most_recent(mut entries: Vec<LogEntry>) -> Vec<LogEntry> {
        let excess = entries.len().saturating_sub(LOG_PANEL_CAPACITY);
        entries.drain(..excess);
        entries
    }
}
