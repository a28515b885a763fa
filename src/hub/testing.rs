//! # Test Support
//!
//! In-memory `UsersApi` used by unit and integration tests. It behaves like
//! the remote service (unique ids, 404 on unknown deletes, a log line per
//! mutation) and can be told to fail individual operations.

use crate::hub::models::{LogEntry, User};
use crate::hub::services::{RequestError, UsersApi};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct FakeState {
    users: Vec<User>,
    logs: Vec<LogEntry>,
    list_users_error: Option<RequestError>,
    list_logs_error: Option<RequestError>,
    create_error: Option<RequestError>,
    delete_error: Option<RequestError>,
    create_calls: Vec<User>,
    delete_calls: Vec<String>,
    list_users_calls: usize,
    list_logs_calls: usize,
}

#[derive(Debug, Default)]
pub struct FakeUsersApi {
    state: Mutex<FakeState>,
}

impl FakeUsersApi {
    pub fn with_users(users: Vec<User>) -> Self {
        let api = Self::default();
        api.state().users = users;
        api
    }

    pub fn with_logs(self, logs: Vec<LogEntry>) -> Self {
        self.state().logs = logs;
        self
    }

    pub fn fail_list_users(&self, error: RequestError) {
        self.state().list_users_error = Some(error);
    }

    pub fn fail_list_logs(&self, error: RequestError) {
        self.state().list_logs_error = Some(error);
    }

    pub fn fail_create(&self, error: RequestError) {
        self.state().create_error = Some(error);
    }

    pub fn fail_delete(&self, error: RequestError) {
        self.state().delete_error = Some(error);
    }

    /// Stop failing every operation
    pub fn recover(&self) {
        let mut state = self.state();
        state.list_users_error = None;
        state.list_logs_error = None;
        state.create_error = None;
        state.delete_error = None;
    }

    pub fn users(&self) -> Vec<User> {
        self.state().users.clone()
    }

    pub fn create_calls(&self) -> Vec<User> {
        self.state().create_calls.clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.state().delete_calls.clone()
    }

    pub fn list_users_calls(&self) -> usize {
        self.state().list_users_calls
    }

    pub fn list_logs_calls(&self) -> usize {
        self.state().list_logs_calls
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_line(state: &mut FakeState, message: String) {
    let timestamp = format!("2025-01-01T00:00:{:02}Z", state.logs.len());
    state.logs.push(LogEntry::new(timestamp, message));
}

#[async_trait]
impl UsersApi for FakeUsersApi {
    async fn list_users(&self) -> Result<Vec<User>, RequestError> {
        let mut state = self.state();
        state.list_users_calls += 1;
        match &state.list_users_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.users.clone()),
        }
    }

    async fn create_user(&self, user: &User) -> Result<Value, RequestError> {
        let mut state = self.state();
        state.create_calls.push(user.clone());
        if let Some(error) = &state.create_error {
            return Err(error.clone());
        }
        if state.users.iter().any(|u| u.user_id == user.user_id) {
            return Err(RequestError::from_response(
                409,
                Some(&crate::hub::services::ErrorPayload::Json(json!({
                    "message": format!("User {} already exists", user.user_id)
                }))),
            ));
        }
        state.users.push(user.clone());
        log_line(&mut state, format!("Created user {}", user.user_id));
        Ok(json!(user))
    }

    async fn delete_user(&self, user_id: &str) -> Result<Value, RequestError> {
        let mut state = self.state();
        state.delete_calls.push(user_id.to_string());
        if let Some(error) = &state.delete_error {
            return Err(error.clone());
        }
        let before = state.users.len();
        state.users.retain(|u| u.user_id != user_id);
        if state.users.len() == before {
            return Err(RequestError::from_response(
                404,
                Some(&crate::hub::services::ErrorPayload::Text(format!(
                    r#"{{"message":"User {user_id} not found"}}"#
                ))),
            ));
        }
        log_line(&mut state, format!("Deleted user {user_id}"));
        Ok(json!({ "message": format!("User {user_id} deleted") }))
    }

    async fn list_logs(&self) -> Result<Vec<LogEntry>, RequestError> {
        let mut state = self.state();
        state.list_logs_calls += 1;
        match &state.list_logs_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.logs.clone()),
        }
    }
}
