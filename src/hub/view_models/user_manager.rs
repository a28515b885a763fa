//! # User Management
//!
//! Draft editing plus the create and delete flows. The user list is never
//! patched locally: every successful mutation is followed by a fresh fetch
//! and the list is replaced with whatever the service returns.

use super::core::{HubViewModel, LOAD_USERS_ERROR_TEXT};
use crate::hub::events::ViewEvent;
use crate::hub::models::{FormField, User};
use crate::hub::services::RequestError;
use serde_json::Value;

impl HubViewModel {
    pub fn set_form_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        self.emit_view_event([ViewEvent::FormChanged]);
    }

    pub fn clear_form(&mut self) {
        self.form.reset();
        self.emit_view_event([ViewEvent::FormChanged]);
    }

    /// Submit the draft. A blank user id only raises the validation hint.
    /// Returns whether a create request was dispatched.
    pub fn submit_new_user(&mut self) -> bool {
        if !self.form.has_user_id() {
            tracing::debug!("Rejected new user without a user id");
            self.show_validation_tooltip();
            return false;
        }

        let user = self.form.to_user();
        tracing::info!("Creating user {}", user.user_id);
        self.dispatcher.create_user(user);
        true
    }

    pub fn delete_user(&mut self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        tracing::info!("Deleting user {user_id}");
        self.dispatcher.delete_user(user_id);
    }

    /// Re-fetch users and logs after a successful mutation
    fn refresh_after_mutation(&mut self) {
        self.dispatcher.fetch_users();
        self.dispatcher.fetch_logs();
    }

    pub(super) fn on_users_loaded(&mut self, result: Result<Vec<User>, RequestError>) {
        match result {
            Ok(users) => {
                tracing::debug!("Loaded {} users", users.len());
                self.users = users;
                if self.error_message() == Some(LOAD_USERS_ERROR_TEXT) {
                    self.clear_error();
                }
                self.emit_view_event([ViewEvent::UsersChanged]);
            }
            Err(e) => {
                tracing::error!("Failed to load users: {e}");
                self.show_error(LOAD_USERS_ERROR_TEXT);
            }
        }
    }

    pub(super) fn on_user_created(&mut self, user_id: &str, result: Result<Value, RequestError>) {
        match result {
            Ok(response) => {
                tracing::info!("Created user {user_id}: {response}");
                self.form.reset();
                self.clear_error();
                self.emit_view_event([ViewEvent::FormChanged]);
                self.refresh_after_mutation();
            }
            Err(e) => {
                tracing::warn!("Failed to create user {user_id}: {e}");
                self.show_error(e.message());
            }
        }
    }

    pub(super) fn on_user_deleted(&mut self, user_id: &str, result: Result<Value, RequestError>) {
        match result {
            Ok(response) => {
                tracing::info!("Deleted user {user_id}: {response}");
                self.clear_error();
                self.refresh_after_mutation();
            }
            Err(e) => {
                tracing::warn!("Failed to delete user {user_id}: {e}");
                self.show_error(e.message());
            }
        }
    }
}
