//! # Log Panel
//!
//! Logs are best effort: a failed fetch is logged and the panel simply
//! empties, no banner is shown.

use super::core::HubViewModel;
use crate::hub::events::ViewEvent;
use crate::hub::models::LogEntry;
use crate::hub::services::RequestError;

impl HubViewModel {
    /// Re-fetch logs only
    pub fn refresh_logs(&mut self) {
        tracing::debug!("Refreshing logs");
        self.dispatcher.fetch_logs();
    }

    pub(super) fn on_logs_loaded(&mut self, result: Result<Vec<LogEntry>, RequestError>) {
        self.logs = match result {
            Ok(entries) => {
                tracing::debug!("Fetched {} log entries", entries.len());
                LogEntry::most_recent(entries)
            }
            Err(e) => {
                tracing::warn!("Failed to fetch logs: {e}");
                Vec::new()
            }
        };
        self.emit_view_event([ViewEvent::LogsChanged]);
    }
}
