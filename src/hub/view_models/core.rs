//! # Hub View Model Core
//!
//! Holds the UI state store and the plumbing shared by the feature modules.
//! Remote calls are dispatched without waiting; their results arrive later
//! as `ApiEvent`s and are folded into state by `apply_api_event`.

use crate::hub::events::{ApiEvent, ViewEvent};
use crate::hub::models::{LogEntry, NewUserForm, TransientMessage, User};
use crate::hub::services::{ApiDispatcher, UsersApi};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// How long the missing user id hint stays visible
pub const VALIDATION_TOOLTIP_DURATION: Duration = Duration::from_secs(2);

/// How long an error banner stays visible
pub const ERROR_BANNER_DURATION: Duration = Duration::from_secs(3);

pub const VALIDATION_TOOLTIP_TEXT: &str = "Please enter a User ID";

/// Banner shown when the user list cannot be fetched
pub const LOAD_USERS_ERROR_TEXT: &str = "Failed to load users.";

pub struct HubViewModel {
    pub(super) dispatcher: ApiDispatcher,
    pub(super) users: Vec<User>,
    pub(super) form: NewUserForm,
    pub(super) logs: Vec<LogEntry>,
    error_banner: Option<TransientMessage>,
    validation_tooltip: Option<TransientMessage>,
    show_help: bool,
    mounted: bool,
    pending_view_events: Vec<ViewEvent>,
}

impl HubViewModel {
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        Self {
            dispatcher: ApiDispatcher::new(api),
            users: Vec::new(),
            form: NewUserForm::default(),
            logs: Vec::new(),
            error_banner: None,
            validation_tooltip: None,
            show_help: false,
            mounted: false,
            pending_view_events: Vec::new(),
        }
    }

    /// Initial load of users and logs. Only the first call does anything.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!("Mounting hub view model");
        self.dispatcher.fetch_users();
        self.dispatcher.fetch_logs();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn form(&self) -> &NewUserForm {
        &self.form
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_banner.as_ref().map(TransientMessage::text)
    }

    pub fn validation_tooltip(&self) -> Option<&str> {
        self.validation_tooltip.as_ref().map(TransientMessage::text)
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// True while any dispatched call has not been applied yet
    pub fn is_busy(&self) -> bool {
        self.dispatcher.in_flight() > 0
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.emit_view_event([ViewEvent::HelpToggled]);
    }

    /// Show an error banner, replacing any banner and its pending clear
    pub fn show_error(&mut self, text: impl Into<String>) {
        let message = TransientMessage::new(text, ERROR_BANNER_DURATION);
        tracing::debug!("Error banner: {}", message.text());
        self.error_banner = Some(message);
        self.emit_view_event([ViewEvent::MessagesChanged]);
    }

    pub(super) fn clear_error(&mut self) {
        if self.error_banner.take().is_some() {
            self.emit_view_event([ViewEvent::MessagesChanged]);
        }
    }

    pub(super) fn show_validation_tooltip(&mut self) {
        self.validation_tooltip = Some(TransientMessage::new(
            VALIDATION_TOOLTIP_TEXT,
            VALIDATION_TOOLTIP_DURATION,
        ));
        self.emit_view_event([ViewEvent::MessagesChanged]);
    }

    /// Drop transient messages whose display window has passed
    pub fn expire_transients(&mut self, now: Instant) {
        let mut changed = false;
        if self.error_banner.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.error_banner = None;
            changed = true;
        }
        if self
            .validation_tooltip
            .as_ref()
            .is_some_and(|m| m.is_expired(now))
        {
            self.validation_tooltip = None;
            changed = true;
        }
        if changed {
            self.emit_view_event([ViewEvent::MessagesChanged]);
        }
    }

    /// Earliest instant at which a visible transient message expires
    pub fn next_expiry(&self) -> Option<Instant> {
        [&self.error_banner, &self.validation_tooltip]
            .into_iter()
            .flatten()
            .map(TransientMessage::expires_at)
            .min()
    }

    /// Fold a finished API call into state
    pub fn apply_api_event(&mut self, event: ApiEvent) {
        tracing::debug!(
            "Applying API event: {} (success: {})",
            event.label(),
            event.is_success()
        );
        match event {
            ApiEvent::UsersLoaded(result) => self.on_users_loaded(result),
            ApiEvent::LogsLoaded(result) => self.on_logs_loaded(result),
            ApiEvent::UserCreated { user_id, result } => self.on_user_created(&user_id, result),
            ApiEvent::UserDeleted { user_id, result } => self.on_user_deleted(&user_id, result),
        }
    }

    /// Apply every result that has already arrived, without waiting
    pub fn process_pending_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.dispatcher.poll_event() {
            self.apply_api_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for and apply results until nothing is in flight, including
    /// follow-up fetches triggered by the results themselves
    pub async fn settle(&mut self) {
        while let Some(event) = self.dispatcher.next_event().await {
            self.apply_api_event(event);
        }
    }

    pub(crate) fn emit_view_event(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            if !self.pending_view_events.contains(&event) {
                self.pending_view_events.push(event);
            }
        }
    }

    pub fn has_pending_view_events(&self) -> bool {
        !self.pending_view_events.is_empty()
    }

    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}
